use anyhow::Context;

use crate::{
    artifact,
    client::DistributionClient,
    resource::{DistributionConfig, ETag, UpdateDistributionOutput},
};

use super::DistributionPatcher;

impl<C: DistributionClient> DistributionPatcher<C> {
    pub(super) async fn do_write_back(
        &self,
        config: &DistributionConfig,
        if_match: &ETag,
    ) -> anyhow::Result<UpdateDistributionOutput> {
        let artifact_path = &self.config.artifact_path;
        artifact::persist(config, artifact_path).await?;

        let update = self
            .client
            .update_distribution(&self.config.distribution_id, artifact_path, if_match)
            .await
            .with_context(|| format!("Update of {} with ETag {} was rejected", self.config.distribution_id, if_match))?;

        tracing::info!(
            "Updated {}: new ETag {}, status {}",
            self.config.distribution_id,
            update.e_tag,
            update.distribution.status
        );
        Ok(update)
    }
}
