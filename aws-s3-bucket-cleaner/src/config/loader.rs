/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::config::{Credentials, Region};

use crate::config::Builder;
use crate::error;
use crate::Config;

/// Bucket to empty
const ENV_BUCKET: &str = "R2_BUCKET";
/// Account identifier used to derive the storage endpoint
const ENV_ACCOUNT_ID: &str = "R2_ACCOUNT_ID";
/// Credential pair
const ENV_ACCESS_KEY_ID: &str = "R2_ACCESS_KEY_ID";
const ENV_SECRET_ACCESS_KEY: &str = "R2_SECRET_ACCESS_KEY";

/// R2 serves every account from a single region alias.
const DEFAULT_REGION: &str = "auto";

const CREDENTIALS_PROVIDER_NAME: &str = "bucket-cleaner-environment";

/// Connection settings resolved from the environment.
#[derive(Debug)]
struct ResolvedEnv {
    bucket: String,
    account_id: String,
    access_key_id: String,
    secret_access_key: String,
}

impl ResolvedEnv {
    /// Resolve all required variables through `lookup`, failing with a single
    /// error naming every variable that is missing or empty.
    fn resolve<F>(lookup: F) -> Result<ResolvedEnv, error::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name| lookup(name).filter(|v| !v.is_empty());

        let bucket = lookup(ENV_BUCKET);
        let account_id = lookup(ENV_ACCOUNT_ID);
        let access_key_id = lookup(ENV_ACCESS_KEY_ID);
        let secret_access_key = lookup(ENV_SECRET_ACCESS_KEY);

        let missing: Vec<&str> = [
            (ENV_BUCKET, &bucket),
            (ENV_ACCOUNT_ID, &account_id),
            (ENV_ACCESS_KEY_ID, &access_key_id),
            (ENV_SECRET_ACCESS_KEY, &secret_access_key),
        ]
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            return Err(error::config_invalid(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        Ok(ResolvedEnv {
            bucket: bucket.expect("validated"),
            account_id: account_id.expect("validated"),
            access_key_id: access_key_id.expect("validated"),
            secret_access_key: secret_access_key.expect("validated"),
        })
    }

    fn endpoint_url(&self) -> String {
        format!("https://{}.r2.cloudflarestorage.com", self.account_id)
    }
}

/// Load bucket cleaner [`Config`] from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
}

impl ConfigLoader {
    /// Load the configuration from the environment.
    ///
    /// Validates that every required variable is present before any network
    /// call is made and fails with `ErrorKind::ConfigInvalid` otherwise.
    pub async fn load(self) -> Result<Config, error::Error> {
        let env = ResolvedEnv::resolve(|name| std::env::var(name).ok())?;

        let credentials = Credentials::new(
            env.access_key_id.clone(),
            env.secret_access_key.clone(),
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        );

        let shared_config = aws_config::from_env()
            .endpoint_url(env.endpoint_url())
            .region(Region::new(DEFAULT_REGION))
            .credentials_provider(credentials)
            .load()
            .await;
        let client = aws_sdk_s3::Client::new(&shared_config);

        let builder = self.builder.bucket(env.bucket).client(client);
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::ResolvedEnv;
    use crate::error::ErrorKind;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("R2_BUCKET", "test-bucket"),
            ("R2_ACCOUNT_ID", "acct123"),
            ("R2_ACCESS_KEY_ID", "akid"),
            ("R2_SECRET_ACCESS_KEY", "secret"),
        ])
    }

    fn resolve(env: &HashMap<&str, &str>) -> Result<ResolvedEnv, crate::error::Error> {
        ResolvedEnv::resolve(|name| env.get(name).map(|v| (*v).to_owned()))
    }

    #[test]
    fn test_resolve_full_env() {
        let env = resolve(&full_env()).unwrap();
        assert_eq!("test-bucket", env.bucket);
        assert_eq!(
            "https://acct123.r2.cloudflarestorage.com",
            env.endpoint_url()
        );
    }

    #[test]
    fn test_resolve_missing_vars() {
        let mut env = full_env();
        env.remove("R2_BUCKET");
        env.insert("R2_SECRET_ACCESS_KEY", "");

        let err = resolve(&env).unwrap_err();
        assert_eq!(&ErrorKind::ConfigInvalid, err.kind());
        let source = std::error::Error::source(&err).unwrap().to_string();
        assert!(source.contains("R2_BUCKET"));
        assert!(source.contains("R2_SECRET_ACCESS_KEY"));
        assert!(!source.contains("R2_ACCOUNT_ID"));
    }

    #[test]
    fn test_resolve_empty_env() {
        let err = resolve(&HashMap::new()).unwrap_err();
        assert_eq!(&ErrorKind::ConfigInvalid, err.kind());
    }
}
