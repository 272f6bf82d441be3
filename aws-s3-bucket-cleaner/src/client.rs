/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::Config;

/// Bucket cleaner client for Amazon S3 and S3-compatible storage.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, S3 client, env details, etc
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Client {
    /// Creates a new client from a bucket cleaner config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Empty a bucket.
    ///
    /// Aborts every in-progress multipart upload and then deletes every
    /// object, in that order. Incomplete uploads occupy storage but are
    /// invisible to a standard object listing, so they have to be removed
    /// explicitly before the bucket is truly empty.
    ///
    /// Constructs a fluent builder for the
    /// [`CleanBucket`](crate::operation::clean_bucket::builders::CleanBucketFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &aws_s3_bucket_cleaner::Client) -> Result<(), aws_s3_bucket_cleaner::error::Error> {
    /// let output = client.clean_bucket().bucket("my-bucket").send().await?;
    /// println!("deleted {} objects", output.objects_deleted());
    /// # Ok(())
    /// # }
    /// ```
    pub fn clean_bucket(&self) -> crate::operation::clean_bucket::builders::CleanBucketFluentBuilder {
        crate::operation::clean_bucket::builders::CleanBucketFluentBuilder::new(self.handle.clone())
    }

    /// Abort every in-progress multipart upload in a bucket.
    ///
    /// Individual abort failures are logged and reported in the output rather
    /// than failing the operation.
    ///
    /// Constructs a fluent builder for the
    /// [`AbortMultipartUploads`](crate::operation::abort_multipart_uploads::builders::AbortMultipartUploadsFluentBuilder) operation.
    pub fn abort_multipart_uploads(
        &self,
    ) -> crate::operation::abort_multipart_uploads::builders::AbortMultipartUploadsFluentBuilder
    {
        crate::operation::abort_multipart_uploads::builders::AbortMultipartUploadsFluentBuilder::new(
            self.handle.clone(),
        )
    }

    /// Delete every object in a bucket.
    ///
    /// Enumerates all keys and issues one batch-delete request per 1000 keys.
    ///
    /// Constructs a fluent builder for the
    /// [`DeleteAllObjects`](crate::operation::delete_all_objects::builders::DeleteAllObjectsFluentBuilder) operation.
    pub fn delete_all_objects(
        &self,
    ) -> crate::operation::delete_all_objects::builders::DeleteAllObjectsFluentBuilder {
        crate::operation::delete_all_objects::builders::DeleteAllObjectsFluentBuilder::new(
            self.handle.clone(),
        )
    }
}
