use anyhow::bail;

use crate::{client::DistributionClient, resource::GetDistributionConfigOutput};

use super::DistributionPatcher;

impl<C: DistributionClient> DistributionPatcher<C> {
    pub(super) async fn do_verify_account(&self, account_id: &str) -> anyhow::Result<()> {
        let identity = self.client.get_caller_identity().await?;

        if identity.account != account_id {
            bail!(
                "AWS: Account ID mismatch. Configured to use account ID {account_id}, \nbut credentials provided are for account ID {}.",
                identity.account
            );
        }
        tracing::info!("Caller identity matches account {}", account_id);
        Ok(())
    }

    pub(super) async fn do_fetch(&self) -> anyhow::Result<GetDistributionConfigOutput> {
        let distribution_id = &self.config.distribution_id;
        let fetched = self.client.get_distribution_config(distribution_id).await?;

        tracing::info!(
            "Fetched config for {} (ETag {}, {} origins, {} cache behaviors)",
            distribution_id,
            fetched.e_tag,
            fetched.distribution_config.origins.quantity,
            fetched.distribution_config.cache_behaviors.quantity
        );
        Ok(fetched)
    }
}
