/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for aborting all multipart uploads in a bucket
pub use input::{AbortMultipartUploadsInput, AbortMultipartUploadsInputBuilder};
mod output;
/// Output type for aborting all multipart uploads in a bucket
pub use output::{AbortMultipartUploadsOutput, AbortMultipartUploadsOutputBuilder};

use std::sync::Arc;

use aws_sdk_s3::error::DisplayErrorContext;
use tracing::Instrument;

use crate::error;
use crate::types::{FailedUploadAbort, PendingUpload};

/// Operation struct for aborting all in-progress multipart uploads in a bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct AbortMultipartUploads;

impl AbortMultipartUploads {
    /// Execute a single `AbortMultipartUploads` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: AbortMultipartUploadsInput,
    ) -> Result<AbortMultipartUploadsOutput, error::Error> {
        let client = handle.config.client();
        let bucket = input.bucket.as_deref().expect("bucket set");

        tracing::info!("checking for ongoing multipart uploads");
        let uploads = discover_uploads(client, bucket).await?;

        if uploads.is_empty() {
            tracing::info!("no ongoing multipart uploads found");
            return Ok(AbortMultipartUploadsOutput::builder().build());
        }

        tracing::info!("found {} ongoing multipart uploads, aborting", uploads.len());

        let mut builder = AbortMultipartUploadsOutput::builder();
        let mut aborted: u64 = 0;
        for upload in uploads {
            let result = client
                .abort_multipart_upload()
                .bucket(bucket)
                .key(upload.key())
                .upload_id(upload.upload_id())
                .send()
                .instrument(tracing::debug_span!("send-abort-multipart-upload"))
                .await;

            match result {
                Ok(_) => {
                    aborted += 1;
                    tracing::info!(key = %upload.key(), "aborted multipart upload");
                }
                Err(err) => {
                    let err = error::Error::from(err);
                    tracing::warn!(
                        key = %upload.key(),
                        upload_id = %upload.upload_id(),
                        "failed to abort multipart upload: {}",
                        DisplayErrorContext(&err)
                    );
                    builder = builder.failed_aborts(FailedUploadAbort { upload, error: err });
                }
            }
        }

        // The terminal message is emitted regardless of per-upload failures;
        // callers inspect the output for partial failure.
        tracing::info!("all multipart uploads aborted");
        Ok(builder.uploads_aborted(aborted).build())
    }
}

/// Enumerate every in-progress multipart upload in the bucket.
///
/// The marker pair from each response advances together, but continuation is
/// driven by the key marker alone: a response carrying only an upload-id
/// marker ends pagination. An empty key marker ends pagination as well.
async fn discover_uploads(
    client: &aws_sdk_s3::Client,
    bucket: &str,
) -> Result<Vec<PendingUpload>, error::Error> {
    let mut uploads = Vec::new();
    let mut key_marker: Option<String> = None;
    let mut upload_id_marker: Option<String> = None;

    loop {
        let output = client
            .list_multipart_uploads()
            .bucket(bucket)
            .set_key_marker(key_marker.take())
            .set_upload_id_marker(upload_id_marker.take())
            .send()
            .instrument(tracing::debug_span!("send-list-multipart-uploads"))
            .await?;

        uploads.extend(output.uploads().iter().filter_map(PendingUpload::from_listing));

        key_marker = output
            .next_key_marker()
            .filter(|marker| !marker.is_empty())
            .map(str::to_owned);
        upload_id_marker = output.next_upload_id_marker().map(str::to_owned);

        if key_marker.is_none() {
            break;
        }
    }

    Ok(uploads)
}
