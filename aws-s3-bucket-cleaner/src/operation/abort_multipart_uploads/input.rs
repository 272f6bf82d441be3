/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for aborting all multipart uploads in a bucket
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct AbortMultipartUploadsInput {
    /// The bucket whose in-progress multipart uploads should be aborted.
    pub bucket: Option<String>,
}

impl AbortMultipartUploadsInput {
    /// Creates a new builder-style object to manufacture [`AbortMultipartUploadsInput`](crate::operation::abort_multipart_uploads::AbortMultipartUploadsInput).
    pub fn builder() -> AbortMultipartUploadsInputBuilder {
        AbortMultipartUploadsInputBuilder::default()
    }

    /// The bucket whose in-progress multipart uploads should be aborted.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }
}

/// A builder for [`AbortMultipartUploadsInput`](crate::operation::abort_multipart_uploads::AbortMultipartUploadsInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct AbortMultipartUploadsInputBuilder {
    pub(crate) bucket: Option<String>,
}

impl AbortMultipartUploadsInputBuilder {
    /// Set the bucket whose in-progress multipart uploads should be aborted.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket whose in-progress multipart uploads should be aborted.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket whose in-progress multipart uploads should be aborted.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Consume the builder and return the input
    ///
    /// An unset or empty bucket name is a [`BuildError`].
    pub fn build(self) -> Result<AbortMultipartUploadsInput, BuildError> {
        match self.bucket.as_deref() {
            Some(bucket) if !bucket.is_empty() => Ok(AbortMultipartUploadsInput {
                bucket: self.bucket,
            }),
            _ => Err(BuildError::missing_field(
                "bucket",
                "a bucket name is required",
            )),
        }
    }
}
