/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for emptying a bucket
pub use input::{CleanBucketInput, CleanBucketInputBuilder};
mod output;
/// Output type for emptying a bucket
pub use output::{CleanBucketOutput, CleanBucketOutputBuilder};

use std::sync::Arc;

use crate::error;
use crate::operation::abort_multipart_uploads::{
    AbortMultipartUploads, AbortMultipartUploadsInput,
};
use crate::operation::delete_all_objects::{DeleteAllObjects, DeleteAllObjectsInput};

/// Operation struct for emptying a bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct CleanBucket;

impl CleanBucket {
    /// Execute a single `CleanBucket` operation.
    ///
    /// Multipart uploads are aborted before objects are deleted: parts of an
    /// incomplete upload occupy storage but never appear in an object
    /// listing, so deleting objects first would leave the bucket non-empty.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: CleanBucketInput,
    ) -> Result<CleanBucketOutput, error::Error> {
        tracing::info!("starting bucket cleanup");

        let abort_input = AbortMultipartUploadsInput::builder()
            .set_bucket(input.bucket.clone())
            .build()?;
        let abort_output = AbortMultipartUploads::orchestrate(handle.clone(), abort_input).await?;

        let delete_input = DeleteAllObjectsInput::builder()
            .set_bucket(input.bucket.clone())
            .build()?;
        let delete_output = DeleteAllObjects::orchestrate(handle, delete_input).await?;

        tracing::info!("bucket cleaned successfully");
        Ok(CleanBucketOutput::builder()
            .objects_deleted(delete_output.objects_deleted)
            .uploads_aborted(abort_output.uploads_aborted)
            .set_failed_aborts(abort_output.failed_aborts)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::abort_multipart_upload::AbortMultipartUploadOutput;
    use aws_sdk_s3::operation::delete_objects::DeleteObjectsOutput;
    use aws_sdk_s3::operation::list_multipart_uploads::ListMultipartUploadsOutput;
    use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
    use aws_sdk_s3::types::{MultipartUpload, Object};
    use aws_smithy_mocks::{mock, mock_client, RuleMode};

    fn test_client(s3_client: aws_sdk_s3::Client) -> crate::Client {
        let config = crate::Config::builder().client(s3_client).build();
        crate::Client::new(config)
    }

    // Sequential rule order pins the phase ordering: the upload listing and
    // aborts must all complete before the first object listing goes out.
    #[tokio::test]
    async fn test_aborts_uploads_before_deleting_objects() {
        let list_uploads = mock!(aws_sdk_s3::Client::list_multipart_uploads).then_output(|| {
            ListMultipartUploadsOutput::builder()
                .uploads(
                    MultipartUpload::builder()
                        .key("pending")
                        .upload_id("up-1")
                        .build(),
                )
                .build()
        });
        let abort = mock!(aws_sdk_s3::Client::abort_multipart_upload)
            .match_requests(|r| r.upload_id.as_deref() == Some("up-1"))
            .then_output(|| AbortMultipartUploadOutput::builder().build());
        let list_objects = mock!(aws_sdk_s3::Client::list_objects_v2).then_output(|| {
            ListObjectsV2Output::builder()
                .contents(Object::builder().key("k1").build())
                .contents(Object::builder().key("k2").build())
                .build()
        });
        let delete = mock!(aws_sdk_s3::Client::delete_objects)
            .match_requests(|r| r.delete.as_ref().map(|d| d.objects().len()) == Some(2))
            .then_output(|| DeleteObjectsOutput::builder().build());

        let client = test_client(mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&list_uploads, &abort, &list_objects, &delete]
        ));

        let output = client
            .clean_bucket()
            .bucket("test-bucket")
            .send()
            .await
            .unwrap();

        assert_eq!(2, output.objects_deleted());
        assert_eq!(1, output.uploads_aborted());
        assert!(output.failed_aborts().is_empty());
        assert_eq!(1, abort.num_calls());
        assert_eq!(1, delete.num_calls());
    }

    // Cleaning an already-empty bucket issues no mutation calls at all.
    #[tokio::test]
    async fn test_empty_bucket_is_a_no_op() {
        let list_uploads = mock!(aws_sdk_s3::Client::list_multipart_uploads)
            .then_output(|| ListMultipartUploadsOutput::builder().build());
        let list_objects = mock!(aws_sdk_s3::Client::list_objects_v2)
            .then_output(|| ListObjectsV2Output::builder().build());

        let client = test_client(mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&list_uploads, &list_objects]
        ));

        let output = client
            .clean_bucket()
            .bucket("test-bucket")
            .send()
            .await
            .unwrap();

        assert_eq!(0, output.objects_deleted());
        assert_eq!(0, output.uploads_aborted());
        assert_eq!(1, list_uploads.num_calls());
        assert_eq!(1, list_objects.num_calls());
    }
}
