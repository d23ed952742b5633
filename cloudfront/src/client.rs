use std::path::Path;

use async_trait::async_trait;
use cloudfront_patch_core::{
    config::PatchConfig,
    error::AwsCliError,
    util::{command_line, output_text},
};
use serde::de::DeserializeOwned;
use tokio::process::Command;

use crate::{
    artifact::file_uri,
    resource::{CallerIdentity, ETag, GetDistributionConfigOutput, UpdateDistributionOutput},
};

/// The remote calls the patcher needs.
#[async_trait]
pub trait DistributionClient: Send + Sync {
    async fn get_caller_identity(&self) -> Result<CallerIdentity, AwsCliError>;

    async fn get_distribution_config(&self, distribution_id: &str) -> Result<GetDistributionConfigOutput, AwsCliError>;

    /// `config_path` must already hold the full config. CloudFront rejects the call if `if_match` is stale.
    async fn update_distribution(
        &self,
        distribution_id: &str,
        config_path: &Path,
        if_match: &ETag,
    ) -> Result<UpdateDistributionOutput, AwsCliError>;
}

/// Talks to CloudFront through the `aws` command line client.
///
/// Credentials and region come from the CLI's own resolution chain.
#[derive(Debug, Clone)]
pub struct AwsCliClient {
    program: String,
    profile: Option<String>,
}

impl AwsCliClient {
    pub fn new(program: impl Into<String>, profile: Option<String>) -> Self {
        Self {
            program: program.into(),
            profile,
        }
    }

    pub fn from_config(config: &PatchConfig) -> Self {
        Self::new(config.aws_cli.clone(), config.profile.clone())
    }

    fn args(&self, call: &[&str]) -> Vec<String> {
        let mut args: Vec<String> = call.iter().map(|s| s.to_string()).collect();
        args.extend([String::from("--output"), String::from("json")]);
        if let Some(profile) = &self.profile {
            args.extend([String::from("--profile"), profile.clone()]);
        }
        args
    }

    async fn run_json<T: DeserializeOwned>(&self, args: Vec<String>) -> Result<T, AwsCliError> {
        let command = command_line(&self.program, &args);
        tracing::debug!("Running {}", command);

        let output = match Command::new(&self.program).args(&args).output().await {
            Ok(output) => output,
            Err(source) => {
                tracing::debug!("Failed to launch {}: {}", self.program, source);
                return Err(AwsCliError::Spawn { command, source });
            }
        };

        if !output.status.success() {
            let stderr = output_text(&output.stderr);
            tracing::debug!("{} exited with {}", command, output.status);
            return Err(AwsCliError::Failed {
                command,
                status: output.status,
                stderr,
            });
        }

        serde_json::from_slice(&output.stdout).map_err(|source| AwsCliError::Parse { command, source })
    }
}

#[async_trait]
impl DistributionClient for AwsCliClient {
    async fn get_caller_identity(&self) -> Result<CallerIdentity, AwsCliError> {
        self.run_json(self.args(&["sts", "get-caller-identity"])).await
    }

    async fn get_distribution_config(&self, distribution_id: &str) -> Result<GetDistributionConfigOutput, AwsCliError> {
        self.run_json(self.args(&["cloudfront", "get-distribution-config", "--id", distribution_id]))
            .await
    }

    async fn update_distribution(
        &self,
        distribution_id: &str,
        config_path: &Path,
        if_match: &ETag,
    ) -> Result<UpdateDistributionOutput, AwsCliError> {
        let config_uri = file_uri(config_path);
        self.run_json(self.args(&[
            "cloudfront",
            "update-distribution",
            "--id",
            distribution_id,
            "--distribution-config",
            config_uri.as_str(),
            "--if-match",
            if_match.0.as_str(),
        ]))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_request_json_and_pass_profile() {
        let client = AwsCliClient::new("aws", Some(String::from("prod")));
        assert_eq!(
            client.args(&["cloudfront", "get-distribution-config", "--id", "E123"]),
            vec![
                "cloudfront",
                "get-distribution-config",
                "--id",
                "E123",
                "--output",
                "json",
                "--profile",
                "prod"
            ]
        );

        let client = AwsCliClient::new("aws", None);
        assert_eq!(client.args(&["sts", "get-caller-identity"]), vec!["sts", "get-caller-identity", "--output", "json"]);
    }

    #[test]
    fn from_config_uses_configured_program() {
        let config = PatchConfig {
            aws_cli: String::from("/opt/aws/bin/aws"),
            ..Default::default()
        };
        let client = AwsCliClient::from_config(&config);
        assert_eq!(client.program, "/opt/aws/bin/aws");
        assert_eq!(client.profile, None);
    }

    #[tokio::test]
    async fn non_zero_exit_is_a_command_failure() {
        let client = AwsCliClient::new("false", None);

        let err = client.get_distribution_config("E123").await.unwrap_err();

        match err {
            AwsCliError::Failed { command, status, .. } => {
                assert_eq!(command, "false cloudfront get-distribution-config --id E123 --output json");
                assert!(!status.success());
            }
            other => panic!("expected a command failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_output_is_a_parse_failure() {
        // echo succeeds and prints its arguments, which is not JSON
        let client = AwsCliClient::new("echo", None);

        let err = client.get_distribution_config("E123").await.unwrap_err();

        match err {
            AwsCliError::Parse { command, .. } => {
                assert!(command.starts_with("echo cloudfront get-distribution-config"));
            }
            other => panic!("expected a parse failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_failure() {
        let client = AwsCliClient::new("cloudfront-patch-test-no-such-program", None);

        let err = client.get_caller_identity().await.unwrap_err();

        assert!(matches!(err, AwsCliError::Spawn { .. }), "got {err:?}");
    }
}
