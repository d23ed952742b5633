use similar::TextDiff;

use crate::{
    client::DistributionClient,
    patch::{self, PatchSummary},
    resource::DistributionConfig,
};

use super::DistributionPatcher;

pub(super) struct PlannedPatch {
    pub config:  DistributionConfig,
    pub summary: PatchSummary,
    /// Unified diff of the pretty JSON, only filled in on dry runs.
    pub diff:    String,
}

impl<C: DistributionClient> DistributionPatcher<C> {
    pub(super) fn do_plan(&self, mut config: DistributionConfig) -> anyhow::Result<PlannedPatch> {
        let current = if self.config.dry_run { Some(config.to_pretty_json()?) } else { None };

        let summary = patch::apply(&mut config, &self.config.origin_id, &self.config.path_pattern);
        tracing::debug!("Planned patch: {:?}", summary);

        let diff = match current {
            Some(current) => render_diff(&current, &config.to_pretty_json()?),
            None => String::new(),
        };

        Ok(PlannedPatch { config, summary, diff })
    }
}

pub(super) fn render_diff(current: &str, patched: &str) -> String {
    if current == patched {
        return String::new();
    }
    TextDiff::from_lines(current, patched)
        .unified_diff()
        .context_radius(3)
        .header("current", "patched")
        .to_string()
}
