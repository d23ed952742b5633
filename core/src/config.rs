use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::util::RON;

pub const CONFIG_FILE_NAME: &str = "cloudfront-patch.ron";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PatchConfig {
    /// Distribution to patch.
    pub distribution_id: String,
    /// `Id` of the origin to remove.
    pub origin_id:       String,
    /// `PathPattern` of the cache behavior to remove.
    pub path_pattern:    String,
    /// Where the patched config is written for `update-distribution` to pick up.
    pub artifact_path:   PathBuf,
    /// Program used to reach the AWS API.
    pub aws_cli:         String,
    pub profile:         Option<String>,
    /// When set, the caller identity must belong to this account.
    pub account_id:      Option<String>,
    pub dry_run:         bool,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            distribution_id: String::from("E8A9C5FXPTO0X"),
            origin_id:       String::from("lambda-ssr-origin"),
            path_pattern:    String::from("/posts/*"),
            artifact_path:   PathBuf::from("/tmp/cloudfront-config.json"),
            aws_cli:         String::from("aws"),
            profile:         None,
            account_id:      None,
            dry_run:         false,
        }
    }
}

impl PatchConfig {
    pub fn try_load(prefix: &Path) -> anyhow::Result<PatchConfig> {
        let config_path = prefix.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            tracing::info!("Loading cloudfront-patch config file at {:?}", config_path);
            let config: PatchConfig = RON.from_str(&std::fs::read_to_string(config_path)?)?;
            Ok(config)
        } else {
            tracing::info!("cloudfront-patch config file at {:?} not present, using defaults.", config_path);
            Ok(PatchConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PatchConfig::try_load(dir.path()).unwrap();
        assert_eq!(config, PatchConfig::default());
        assert_eq!(config.distribution_id, "E8A9C5FXPTO0X");
        assert_eq!(config.artifact_path, PathBuf::from("/tmp/cloudfront-config.json"));
    }

    #[test]
    fn file_overrides_only_the_fields_it_sets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"(
                distribution_id: "E2QWRUHAPOMQZL",
                profile: "staging",
                dry_run: true,
            )"#,
        )
        .unwrap();

        let config = PatchConfig::try_load(dir.path()).unwrap();
        assert_eq!(config.distribution_id, "E2QWRUHAPOMQZL");
        assert_eq!(config.profile.as_deref(), Some("staging"));
        assert!(config.dry_run);
        assert_eq!(config.origin_id, "lambda-ssr-origin");
        assert_eq!(config.path_pattern, "/posts/*");
        assert_eq!(config.account_id, None);
    }

    #[test]
    fn misspelled_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "(dry_runn: true)").unwrap();

        let err = PatchConfig::try_load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("dry_runn"), "got {err}");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "(distribution_id: 42)").unwrap();

        assert!(PatchConfig::try_load(dir.path()).is_err());
    }
}
