/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for deleting every object in a bucket
pub use input::{DeleteAllObjectsInput, DeleteAllObjectsInputBuilder};
mod output;
/// Output type for deleting every object in a bucket
pub use output::{DeleteAllObjectsOutput, DeleteAllObjectsOutputBuilder};

use std::sync::Arc;

use aws_sdk_s3::types::{Delete, ObjectIdentifier};
use tracing::Instrument;

use crate::error;
use crate::operation::list_objects;
use crate::MAX_KEYS_PER_BATCH;

/// Operation struct for deleting every object in a bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct DeleteAllObjects;

impl DeleteAllObjects {
    /// Execute a single `DeleteAllObjects` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DeleteAllObjectsInput,
    ) -> Result<DeleteAllObjectsOutput, error::Error> {
        let client = handle.config.client();
        let bucket = input.bucket.as_deref().expect("bucket set");

        let keys = list_objects::list_all_keys(client, bucket).await?;

        if keys.is_empty() {
            tracing::info!("the bucket is already empty");
            return Ok(DeleteAllObjectsOutput::builder().build());
        }

        tracing::info!("found {} objects, starting deletion", keys.len());

        let mut deleted: u64 = 0;
        let mut batches: u64 = 0;
        for batch in keys.chunks(MAX_KEYS_PER_BATCH) {
            let objects = batch
                .iter()
                .map(|key| ObjectIdentifier::builder().key(key.as_str()).build())
                .collect::<Result<Vec<_>, _>>()?;
            let delete = Delete::builder().set_objects(Some(objects)).build()?;

            let output = client
                .delete_objects()
                .bucket(bucket)
                .delete(delete)
                .send()
                .instrument(tracing::debug_span!("send-delete-objects"))
                .await?;

            let key_errors = output.errors();
            if !key_errors.is_empty() {
                tracing::warn!(
                    "{} keys in this batch reported delete errors",
                    key_errors.len()
                );
            }

            batches += 1;
            deleted += batch.len() as u64;
            tracing::info!("deleted {} objects (total: {})", batch.len(), deleted);
        }

        tracing::info!("all objects deleted");
        Ok(DeleteAllObjectsOutput::builder()
            .objects_deleted(deleted)
            .delete_batches(batches)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::delete_objects::{DeleteObjectsError, DeleteObjectsOutput};
    use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
    use aws_sdk_s3::types::Object;
    use aws_smithy_mocks::{mock, mock_client, RuleMode};

    use crate::error::ErrorKind;

    fn test_client(s3_client: aws_sdk_s3::Client) -> crate::Client {
        let config = crate::Config::builder().client(s3_client).build();
        crate::Client::new(config)
    }

    fn list_resp(next_token: Option<&'static str>, key_count: usize) -> ListObjectsV2Output {
        let contents = (0..key_count)
            .map(|i| Object::builder().key(format!("key-{i}")).build())
            .collect();

        ListObjectsV2Output::builder()
            .is_truncated(next_token.is_some())
            .set_next_continuation_token(next_token.map(str::to_owned))
            .set_contents(Some(contents))
            .build()
    }

    #[tokio::test]
    async fn test_empty_bucket_issues_no_deletes() {
        let list = mock!(aws_sdk_s3::Client::list_objects_v2)
            .then_output(|| ListObjectsV2Output::builder().build());
        let client = test_client(mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&list]));

        let output = client
            .delete_all_objects()
            .bucket("test-bucket")
            .send()
            .await
            .unwrap();

        assert_eq!(0, output.objects_deleted());
        assert_eq!(0, output.delete_batches());
        assert_eq!(1, list.num_calls());
    }

    // 2500 keys are deleted in exactly three batches: 1000, 1000, 500
    #[tokio::test]
    async fn test_batches_of_at_most_1000_keys() {
        let list = mock!(aws_sdk_s3::Client::list_objects_v2)
            .then_output(|| list_resp(None, 2500));
        let batch1 = mock!(aws_sdk_s3::Client::delete_objects)
            .match_requests(|r| {
                r.delete.as_ref().map(|d| d.objects().len()) == Some(1000)
                    && r.delete.as_ref().unwrap().objects()[0].key() == "key-0"
            })
            .then_output(|| DeleteObjectsOutput::builder().build());
        let batch2 = mock!(aws_sdk_s3::Client::delete_objects)
            .match_requests(|r| {
                r.delete.as_ref().map(|d| d.objects().len()) == Some(1000)
                    && r.delete.as_ref().unwrap().objects()[0].key() == "key-1000"
            })
            .then_output(|| DeleteObjectsOutput::builder().build());
        let batch3 = mock!(aws_sdk_s3::Client::delete_objects)
            .match_requests(|r| {
                r.delete.as_ref().map(|d| d.objects().len()) == Some(500)
                    && r.delete.as_ref().unwrap().objects()[0].key() == "key-2000"
            })
            .then_output(|| DeleteObjectsOutput::builder().build());

        let client = test_client(mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&list, &batch1, &batch2, &batch3]
        ));

        let output = client
            .delete_all_objects()
            .bucket("test-bucket")
            .send()
            .await
            .unwrap();

        assert_eq!(2500, output.objects_deleted());
        assert_eq!(3, output.delete_batches());
        assert_eq!(1, batch1.num_calls());
        assert_eq!(1, batch2.num_calls());
        assert_eq!(1, batch3.num_calls());
    }

    #[tokio::test]
    async fn test_keys_from_all_pages_are_deleted() {
        let page1 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .then_output(|| list_resp(Some("token1"), 2));
        let page2 = mock!(aws_sdk_s3::Client::list_objects_v2).then_output(|| list_resp(None, 3));
        let batch = mock!(aws_sdk_s3::Client::delete_objects)
            .match_requests(|r| r.delete.as_ref().map(|d| d.objects().len()) == Some(5))
            .then_output(|| DeleteObjectsOutput::builder().build());

        let client = test_client(mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&page1, &page2, &batch]
        ));

        let output = client
            .delete_all_objects()
            .bucket("test-bucket")
            .send()
            .await
            .unwrap();

        assert_eq!(5, output.objects_deleted());
        assert_eq!(1, output.delete_batches());
    }

    #[tokio::test]
    async fn test_batch_failure_propagates_and_stops() {
        let list = mock!(aws_sdk_s3::Client::list_objects_v2)
            .then_output(|| list_resp(None, 1500));
        let batch1 = mock!(aws_sdk_s3::Client::delete_objects)
            .match_requests(|r| r.delete.as_ref().map(|d| d.objects().len()) == Some(1000))
            .then_output(|| DeleteObjectsOutput::builder().build());
        let batch2 = mock!(aws_sdk_s3::Client::delete_objects).then_error(|| {
            DeleteObjectsError::generic(
                aws_sdk_s3::error::ErrorMetadata::builder()
                    .code("InternalError")
                    .message("injected failure")
                    .build(),
            )
        });

        let client = test_client(mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&list, &batch1, &batch2]
        ));

        let err = client
            .delete_all_objects()
            .bucket("test-bucket")
            .send()
            .await
            .unwrap_err();

        assert_eq!(&ErrorKind::Transport, err.kind());
        assert_eq!(1, batch1.num_calls());
        assert_eq!(1, batch2.num_calls());
    }
}
