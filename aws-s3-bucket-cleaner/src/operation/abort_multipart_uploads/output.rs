/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::FailedUploadAbort;

/// Output type for aborting all multipart uploads in a bucket
#[non_exhaustive]
#[derive(Debug)]
pub struct AbortMultipartUploadsOutput {
    /// The number of multipart uploads that were successfully aborted
    pub uploads_aborted: u64,

    /// A list of uploads the cleaner failed to abort
    pub failed_aborts: Option<Vec<FailedUploadAbort>>,
}

impl AbortMultipartUploadsOutput {
    /// Creates a new builder-style object to manufacture [`AbortMultipartUploadsOutput`](crate::operation::abort_multipart_uploads::AbortMultipartUploadsOutput).
    pub fn builder() -> AbortMultipartUploadsOutputBuilder {
        AbortMultipartUploadsOutputBuilder::default()
    }

    /// The number of multipart uploads that were successfully aborted
    pub fn uploads_aborted(&self) -> u64 {
        self.uploads_aborted
    }

    /// A slice of uploads the cleaner failed to abort
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was
    /// set, use `.failed_aborts.is_none()`
    pub fn failed_aborts(&self) -> &[FailedUploadAbort] {
        self.failed_aborts.as_deref().unwrap_or_default()
    }
}

/// A builder for [`AbortMultipartUploadsOutput`](crate::operation::abort_multipart_uploads::AbortMultipartUploadsOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct AbortMultipartUploadsOutputBuilder {
    pub(crate) uploads_aborted: u64,
    pub(crate) failed_aborts: Option<Vec<FailedUploadAbort>>,
}

impl AbortMultipartUploadsOutputBuilder {
    /// The number of multipart uploads that were successfully aborted
    pub fn uploads_aborted(mut self, input: u64) -> Self {
        self.uploads_aborted = input;
        self
    }

    /// The number of multipart uploads that were successfully aborted
    pub fn get_uploads_aborted(&self) -> u64 {
        self.uploads_aborted
    }

    /// Append a failed abort.
    ///
    /// To override the contents of this collection use
    /// [`set_failed_aborts`](Self::set_failed_aborts)
    pub fn failed_aborts(mut self, input: FailedUploadAbort) -> Self {
        self.failed_aborts.get_or_insert_with(Vec::new).push(input);
        self
    }

    /// A list of uploads the cleaner failed to abort
    pub fn set_failed_aborts(mut self, input: Option<Vec<FailedUploadAbort>>) -> Self {
        self.failed_aborts = input;
        self
    }

    /// A list of uploads the cleaner failed to abort
    pub fn get_failed_aborts(&self) -> &Option<Vec<FailedUploadAbort>> {
        &self.failed_aborts
    }

    /// Consume the builder and return the output
    pub fn build(self) -> AbortMultipartUploadsOutput {
        AbortMultipartUploadsOutput {
            uploads_aborted: self.uploads_aborted,
            failed_aborts: self.failed_aborts,
        }
    }
}
