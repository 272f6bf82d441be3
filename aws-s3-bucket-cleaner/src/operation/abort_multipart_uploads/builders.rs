/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{AbortMultipartUploadsInputBuilder, AbortMultipartUploadsOutput};

/// Fluent builder for aborting all multipart uploads in a bucket
#[derive(Debug)]
pub struct AbortMultipartUploadsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: AbortMultipartUploadsInputBuilder,
}

impl AbortMultipartUploadsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Abort every in-progress multipart upload in the bucket
    pub async fn send(self) -> Result<AbortMultipartUploadsOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::abort_multipart_uploads::AbortMultipartUploads::orchestrate(
            self.handle,
            input,
        )
        .await
    }

    /// Set the bucket whose in-progress multipart uploads should be aborted.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket whose in-progress multipart uploads should be aborted.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket whose in-progress multipart uploads should be aborted.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }
}

impl crate::operation::abort_multipart_uploads::input::AbortMultipartUploadsInputBuilder {
    /// Abort all multipart uploads with this input using the given client.
    pub async fn send_with(
        self,
        client: &crate::Client,
    ) -> Result<AbortMultipartUploadsOutput, Error> {
        let mut fluent_builder = client.abort_multipart_uploads();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
