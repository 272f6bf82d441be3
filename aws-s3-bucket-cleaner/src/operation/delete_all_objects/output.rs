/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for deleting every object in a bucket
#[non_exhaustive]
#[derive(Debug)]
pub struct DeleteAllObjectsOutput {
    /// The number of objects that were deleted
    pub objects_deleted: u64,

    /// The number of batch-delete requests that were issued
    pub delete_batches: u64,
}

impl DeleteAllObjectsOutput {
    /// Creates a new builder-style object to manufacture [`DeleteAllObjectsOutput`](crate::operation::delete_all_objects::DeleteAllObjectsOutput).
    pub fn builder() -> DeleteAllObjectsOutputBuilder {
        DeleteAllObjectsOutputBuilder::default()
    }

    /// The number of objects that were deleted
    pub fn objects_deleted(&self) -> u64 {
        self.objects_deleted
    }

    /// The number of batch-delete requests that were issued
    pub fn delete_batches(&self) -> u64 {
        self.delete_batches
    }
}

/// A builder for [`DeleteAllObjectsOutput`](crate::operation::delete_all_objects::DeleteAllObjectsOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct DeleteAllObjectsOutputBuilder {
    pub(crate) objects_deleted: u64,
    pub(crate) delete_batches: u64,
}

impl DeleteAllObjectsOutputBuilder {
    /// The number of objects that were deleted
    pub fn objects_deleted(mut self, input: u64) -> Self {
        self.objects_deleted = input;
        self
    }

    /// The number of objects that were deleted
    pub fn get_objects_deleted(&self) -> u64 {
        self.objects_deleted
    }

    /// The number of batch-delete requests that were issued
    pub fn delete_batches(mut self, input: u64) -> Self {
        self.delete_batches = input;
        self
    }

    /// The number of batch-delete requests that were issued
    pub fn get_delete_batches(&self) -> u64 {
        self.delete_batches
    }

    /// Consume the builder and return the output
    pub fn build(self) -> DeleteAllObjectsOutput {
        DeleteAllObjectsOutput {
            objects_deleted: self.objects_deleted,
            delete_batches: self.delete_batches,
        }
    }
}
