/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Empties an Amazon S3 or S3-compatible bucket.
//!
//! The cleaner aborts every in-progress multipart upload (incomplete uploads
//! occupy storage but never show up in a standard object listing) and then
//! bulk-deletes every object in the bucket, 1000 keys per request.
//!
//! # Examples
//!
//! Load configuration from the environment and empty the configured bucket:
//!
//! ```no_run
//! # async fn example() -> Result<(), aws_s3_bucket_cleaner::error::Error> {
//! let config = aws_s3_bucket_cleaner::from_env().load().await?;
//! let bucket = config.bucket().expect("bucket configured").to_owned();
//! let client = aws_s3_bucket_cleaner::Client::new(config);
//!
//! let output = client.clean_bucket().bucket(bucket).send().await?;
//! println!(
//!     "deleted {} objects, aborted {} uploads",
//!     output.objects_deleted(),
//!     output.uploads_aborted()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! See the documentation for each client operation for more information:
//!
//! * [`clean_bucket`](crate::Client::clean_bucket) - abort all multipart uploads, then delete all objects
//! * [`abort_multipart_uploads`](crate::Client::abort_multipart_uploads) - abort all in-progress multipart uploads
//! * [`delete_all_objects`](crate::Client::delete_all_objects) - delete every object in the bucket

/// Maximum number of keys a single `DeleteObjects` request accepts
pub(crate) const MAX_KEYS_PER_BATCH: usize = 1000;

/// Error types emitted by `aws-s3-bucket-cleaner`
pub mod error;

/// Common types used by `aws-s3-bucket-cleaner`
pub mod types;

/// Bucket cleaner client
pub mod client;

/// Bucket cleaner operations
pub mod operation;

/// Bucket cleaner configuration
pub mod config;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
