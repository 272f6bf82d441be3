/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{DeleteAllObjectsInputBuilder, DeleteAllObjectsOutput};

/// Fluent builder for deleting every object in a bucket
#[derive(Debug)]
pub struct DeleteAllObjectsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DeleteAllObjectsInputBuilder,
}

impl DeleteAllObjectsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Delete every object in the bucket
    pub async fn send(self) -> Result<DeleteAllObjectsOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::delete_all_objects::DeleteAllObjects::orchestrate(self.handle, input)
            .await
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

impl crate::operation::delete_all_objects::input::DeleteAllObjectsInputBuilder {
    /// Delete every object in the bucket with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<DeleteAllObjectsOutput, Error> {
        let mut fluent_builder = client.delete_all_objects();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
