/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::process::ExitCode;

use aws_s3_bucket_cleaner::error::Error;
use aws_s3_bucket_cleaner::operation::clean_bucket::CleanBucketOutput;
use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "clean-bucket")]
#[command(
    about = "Empties an S3-compatible bucket: aborts in-progress multipart uploads, then deletes every object."
)]
struct Args {
    /// Bucket to empty; defaults to the R2_BUCKET environment variable
    #[arg(long)]
    bucket: Option<String>,
}

async fn run(args: Args) -> Result<CleanBucketOutput, Error> {
    let config = aws_s3_bucket_cleaner::from_env().load().await?;
    let bucket = args
        .bucket
        .unwrap_or_else(|| config.bucket().expect("bucket resolved from environment").to_owned());
    let client = aws_s3_bucket_cleaner::Client::new(config);

    client.clean_bucket().bucket(bucket).send().await
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run(args).await {
        Ok(output) => {
            println!(
                "bucket cleaned: {} objects deleted, {} multipart uploads aborted",
                output.objects_deleted(),
                output.uploads_aborted()
            );
            let failed = output.failed_aborts().len();
            if failed > 0 {
                println!("warning: {failed} multipart uploads could not be aborted");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("error cleaning bucket: {}", DisplayErrorContext(&err));
            ExitCode::FAILURE
        }
    }
}
