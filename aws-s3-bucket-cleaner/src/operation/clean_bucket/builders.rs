/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{CleanBucketInputBuilder, CleanBucketOutput};

/// Fluent builder for emptying a bucket
#[derive(Debug)]
pub struct CleanBucketFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: CleanBucketInputBuilder,
}

impl CleanBucketFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Empty the bucket: abort all multipart uploads, then delete all objects
    pub async fn send(self) -> Result<CleanBucketOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::clean_bucket::CleanBucket::orchestrate(self.handle, input).await
    }

    /// Set the bucket to empty.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket to empty.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket to empty.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }
}

impl crate::operation::clean_bucket::input::CleanBucketInputBuilder {
    /// Empty the bucket with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<CleanBucketOutput, Error> {
        let mut fluent_builder = client.clean_bucket();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
