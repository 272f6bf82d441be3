/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Types for abort/delete results.

/// An in-progress multipart upload discovered in the bucket.
///
/// Listing entries that are missing either the key or the upload ID cannot be
/// aborted and are skipped during discovery.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingUpload {
    pub(crate) key: String,
    pub(crate) upload_id: String,
}

impl PendingUpload {
    /// The object key the upload was started for
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The upload ID identifying the multipart upload
    pub fn upload_id(&self) -> &str {
        &self.upload_id
    }

    pub(crate) fn from_listing(upload: &aws_sdk_s3::types::MultipartUpload) -> Option<Self> {
        match (upload.key(), upload.upload_id()) {
            (Some(key), Some(upload_id)) if !key.is_empty() && !upload_id.is_empty() => {
                Some(Self {
                    key: key.to_owned(),
                    upload_id: upload_id.to_owned(),
                })
            }
            _ => None,
        }
    }
}

/// A multipart upload the cleaner attempted but failed to abort.
#[derive(Debug)]
pub struct FailedUploadAbort {
    pub(crate) upload: PendingUpload,
    pub(crate) error: crate::error::Error,
}

impl FailedUploadAbort {
    /// The upload that could not be aborted
    pub fn upload(&self) -> &PendingUpload {
        &self.upload
    }

    /// The error encountered aborting the upload
    pub fn error(&self) -> &crate::error::Error {
        &self.error
    }
}

#[cfg(test)]
mod tests {
    use super::PendingUpload;
    use aws_sdk_s3::types::MultipartUpload;

    #[test]
    fn test_pending_upload_from_listing() {
        let complete = MultipartUpload::builder()
            .key("some/key")
            .upload_id("upload-1")
            .build();
        let missing_id = MultipartUpload::builder().key("some/key").build();
        let missing_key = MultipartUpload::builder().upload_id("upload-2").build();
        let empty_key = MultipartUpload::builder()
            .key("")
            .upload_id("upload-3")
            .build();

        let pending = PendingUpload::from_listing(&complete).unwrap();
        assert_eq!("some/key", pending.key());
        assert_eq!("upload-1", pending.upload_id());

        assert!(PendingUpload::from_listing(&missing_id).is_none());
        assert!(PendingUpload::from_listing(&missing_key).is_none());
        assert!(PendingUpload::from_listing(&empty_key).is_none());
    }
}
