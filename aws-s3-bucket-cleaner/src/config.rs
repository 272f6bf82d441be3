/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub(crate) mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    bucket: Option<String>,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the bucket the cleaner was configured for, if any.
    ///
    /// Operations take the bucket explicitly; this is the value resolved from
    /// the environment for callers that want the configured default.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The Amazon S3 client instance that will be used to send requests to the storage service.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    bucket: Option<String>,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Set the bucket the cleaner should operate on by default.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set an explicit S3 client to use.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    pub fn build(self) -> Config {
        Config {
            bucket: self.bucket,
            client: self.client.expect("client set"),
        }
    }
}
