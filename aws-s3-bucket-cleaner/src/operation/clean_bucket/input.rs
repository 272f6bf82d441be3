/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for emptying a bucket
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct CleanBucketInput {
    /// The bucket to empty.
    pub bucket: Option<String>,
}

impl CleanBucketInput {
    /// Creates a new builder-style object to manufacture [`CleanBucketInput`](crate::operation::clean_bucket::CleanBucketInput).
    pub fn builder() -> CleanBucketInputBuilder {
        CleanBucketInputBuilder::default()
    }

    /// The bucket to empty.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }
}

/// A builder for [`CleanBucketInput`](crate::operation::clean_bucket::CleanBucketInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct CleanBucketInputBuilder {
    pub(crate) bucket: Option<String>,
}

impl CleanBucketInputBuilder {
    /// Set the bucket to empty.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket to empty.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to empty.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Consume the builder and return the input
    ///
    /// An unset or empty bucket name is a [`BuildError`].
    pub fn build(self) -> Result<CleanBucketInput, BuildError> {
        match self.bucket.as_deref() {
            Some(bucket) if !bucket.is_empty() => Ok(CleanBucketInput {
                bucket: self.bucket,
            }),
            _ => Err(BuildError::missing_field(
                "bucket",
                "a bucket name is required",
            )),
        }
    }
}
