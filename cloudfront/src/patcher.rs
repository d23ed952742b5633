use std::io::Write;

use cloudfront_patch_core::config::PatchConfig;

use crate::{
    client::DistributionClient,
    patch::PatchSummary,
    report,
    resource::{ETag, UpdateDistributionOutput},
};

mod fetch;
mod plan;
mod write_back;

#[derive(Debug, Clone, PartialEq)]
pub enum PatchOutcome {
    Updated {
        summary: PatchSummary,
        update:  UpdateDistributionOutput,
    },
    DryRun {
        summary: PatchSummary,
        diff:    String,
    },
}

/// Runs one fetch, filter, write-back pass against a single distribution.
pub struct DistributionPatcher<C: DistributionClient> {
    client: C,
    config: PatchConfig,
}

impl<C: DistributionClient> DistributionPatcher<C> {
    pub fn new(client: C, config: PatchConfig) -> Self {
        Self { client, config }
    }

    /// Any error aborts the run. Nothing is written remotely unless every step before write-back succeeded.
    pub async fn run(&self, out: &mut impl Write) -> anyhow::Result<PatchOutcome> {
        if let Some(account_id) = &self.config.account_id {
            self.do_verify_account(account_id).await?;
        }

        let distribution_id = &self.config.distribution_id;
        report::fetching(out, distribution_id)?;
        let fetched = self.do_fetch().await?;

        let e_tag: ETag = fetched.e_tag;
        let planned = self.do_plan(fetched.distribution_config)?;
        report::current(out, &e_tag, &planned.summary)?;
        report::removals(out, &planned.summary, &self.config.origin_id, &self.config.path_pattern)?;

        if self.config.dry_run {
            report::dry_run(out, &planned.diff)?;
            return Ok(PatchOutcome::DryRun {
                summary: planned.summary,
                diff:    planned.diff,
            });
        }

        report::updating(out)?;
        let update = self.do_write_back(&planned.config, &e_tag).await?;
        report::updated(out, &update, &planned.summary)?;
        report::propagation_notice(out, distribution_id, &self.config.path_pattern)?;

        Ok(PatchOutcome::Updated {
            summary: planned.summary,
            update,
        })
    }
}
