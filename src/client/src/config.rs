use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use serde::{Deserialize, Serialize};

/// Credential source for the pricing client.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AwsConfig {
    Profile(String),
    RoleArn(String),
    Env,
}

/// Builds an SDK config from the requested credential source, verifying
/// that credentials actually resolve. Returns `None` when they do not,
/// so callers can fall back to an inert client instead of failing at
/// construction time.
pub async fn resolve_available_aws_config(
    initialization_conf: AwsConfig,
    region: &'static str,
) -> Option<SdkConfig> {
    let config_loader = aws_config::defaults(BehaviorVersion::latest());
    let config = match initialization_conf {
        AwsConfig::Profile(profile) => config_loader.profile_name(profile),
        AwsConfig::RoleArn(arn) => {
            let assumed_role_provider = aws_config::sts::AssumeRoleProvider::builder(arn)
                .session_name("pricing-client-session")
                .build()
                .await;

            let assumed_credentials_provider =
                match assumed_role_provider.provide_credentials().await {
                    Ok(creds) => creds,
                    Err(_) => return None,
                };

            config_loader.credentials_provider(assumed_credentials_provider)
        }
        AwsConfig::Env => aws_config::from_env(),
    }
    .region(region)
    .load()
    .await;

    let credentials_provider = config.credentials_provider()?;

    match credentials_provider.provide_credentials().await {
        Ok(_) => Some(config),
        Err(err) => {
            tracing::warn!(error = ?err, "AWS credentials did not resolve");
            None
        }
    }
}
