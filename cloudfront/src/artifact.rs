use std::path::Path;

use anyhow::Context;

use crate::resource::DistributionConfig;

/// Write the patched config where `update-distribution` can read it. Replaces whatever was there.
pub async fn persist(config: &DistributionConfig, path: &Path) -> anyhow::Result<()> {
    let json = config.to_pretty_json()?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write distribution config to {}", path.display()))?;
    tracing::debug!("Wrote distribution config to {}", path.display());
    Ok(())
}

/// The `file://` form the AWS CLI expects for `--distribution-config`.
pub fn file_uri(path: &Path) -> String {
    format!("file://{}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::tests::config_with;

    #[tokio::test]
    async fn persisted_config_reads_back_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloudfront-config.json");
        let config = config_with(&["s3-site", "api"], &["/api/*"]);

        persist(&config, &path).await.unwrap();

        let read_back: DistributionConfig = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(read_back, config);
    }

    #[tokio::test]
    async fn persist_overwrites_and_indents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloudfront-config.json");
        std::fs::write(&path, "stale content that is much longer than nothing at all").unwrap();

        let config = config_with(&["s3-site"], &[]);
        persist(&config, &path).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("{\n  \"Origins\": {"));
        assert!(!written.contains("stale"));
    }

    #[tokio::test]
    async fn persist_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("cloudfront-config.json");

        let err = persist(&config_with(&["s3-site"], &[]), &path).await.unwrap_err();
        assert!(err.to_string().contains("Failed to write distribution config"));
    }

    #[test]
    fn file_uri_prefixes_the_path() {
        assert_eq!(file_uri(Path::new("/tmp/cloudfront-config.json")), "file:///tmp/cloudfront-config.json");
    }
}
