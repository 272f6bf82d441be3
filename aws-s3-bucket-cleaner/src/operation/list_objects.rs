/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::{
    error::SdkError,
    operation::list_objects_v2::{ListObjectsV2Error, ListObjectsV2Output},
};
use aws_smithy_runtime_api::http::Response;
use tracing::Instrument;

use crate::error;

/// Paginator for the `ListObjectsV2` operation.
///
/// Continuation is driven by the presence of `next_continuation_token` in the
/// previous response; the first request is sent with no token.
#[derive(Debug)]
pub(crate) struct ListObjectsPaginator {
    client: aws_sdk_s3::Client,
    bucket: String,
    state: Option<State>,
}

#[derive(Debug, PartialEq)]
enum State {
    Paginating {
        // next continuation token to use
        next_token: Option<String>,
    },
    Done,
}

impl State {
    fn next_state(self, output: &ListObjectsV2Output) -> State {
        match output.next_continuation_token() {
            Some(token) => State::Paginating {
                next_token: Some(token.to_owned()),
            },
            None => State::Done,
        }
    }
}

impl ListObjectsPaginator {
    pub(crate) fn new(client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            state: Some(State::Paginating { next_token: None }),
        }
    }

    pub(crate) async fn next_page(
        &mut self,
    ) -> Option<Result<ListObjectsV2Output, SdkError<ListObjectsV2Error, Response>>> {
        let next_token = match self.state.as_ref().expect("valid state") {
            State::Done => return None,
            State::Paginating { next_token } => next_token.clone(),
        };

        let list_result = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .set_continuation_token(next_token)
            .send()
            .instrument(tracing::debug_span!("send-list-objects-v2"))
            .await;
        match list_result {
            Ok(output) => {
                let prev_state = self.state.take().expect("state set");
                self.state.replace(prev_state.next_state(&output));
                Some(Ok(output))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

/// Enumerate every object key in the bucket.
///
/// The full key set is accumulated in memory; there is no streaming consumer
/// downstream of this listing. Entries without a key (or with an empty key)
/// are skipped.
pub(crate) async fn list_all_keys(
    client: &aws_sdk_s3::Client,
    bucket: &str,
) -> Result<Vec<String>, error::Error> {
    let mut paginator = ListObjectsPaginator::new(client.clone(), bucket);
    let mut keys = Vec::new();

    while let Some(page) = paginator.next_page().await {
        let output = page?;
        keys.extend(
            output
                .contents()
                .iter()
                .filter_map(|obj| obj.key())
                .filter(|key| !key.is_empty())
                .map(str::to_owned),
        );
    }

    Ok(keys)
}
