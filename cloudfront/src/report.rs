//! Operator-facing progress lines. Diagnostics go through `tracing` instead.

use std::io::{self, Write};

use crate::{
    patch::PatchSummary,
    resource::{ETag, UpdateDistributionOutput},
};

pub fn fetching(out: &mut impl Write, distribution_id: &str) -> io::Result<()> {
    writeln!(out, "Fetching CloudFront distribution config for {distribution_id}...")
}

/// Counts as CloudFront reported them, before either filter ran.
pub fn current(out: &mut impl Write, e_tag: &ETag, summary: &PatchSummary) -> io::Result<()> {
    writeln!(out, "Current ETag: {e_tag}")?;
    writeln!(out, "Current origins: {}", summary.origins_before)?;
    writeln!(out, "Current cache behaviors: {}", summary.cache_behaviors_before)
}

pub fn removals(out: &mut impl Write, summary: &PatchSummary, origin_id: &str, path_pattern: &str) -> io::Result<()> {
    if summary.origin.is_removed() {
        writeln!(out, "✓ Removed {origin_id}")?;
    } else {
        writeln!(out, "⚠ Origin {origin_id} not found (already removed?)")?;
    }
    if summary.cache_behavior.is_removed() {
        writeln!(out, "✓ Removed {path_pattern} cache behavior")
    } else {
        writeln!(out, "⚠ {path_pattern} cache behavior not found (already removed?)")
    }
}

pub fn dry_run(out: &mut impl Write, diff: &str) -> io::Result<()> {
    writeln!(out, "\nDry run: not updating the distribution.")?;
    if diff.is_empty() {
        writeln!(out, "No changes.")
    } else {
        write!(out, "{diff}")
    }
}

pub fn updating(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nUpdating CloudFront distribution...")
}

pub fn updated(out: &mut impl Write, update: &UpdateDistributionOutput, summary: &PatchSummary) -> io::Result<()> {
    writeln!(out, "\n✓ Distribution updated successfully!")?;
    writeln!(out, "New ETag: {}", update.e_tag)?;
    writeln!(out, "Status: {}", update.distribution.status)?;
    writeln!(out, "\nOrigins: {}", summary.origins_after)?;
    writeln!(out, "Cache behaviors: {}", summary.cache_behaviors_after)
}

/// The update returns before edge locations pick it up; tell the operator how to watch it.
pub fn propagation_notice(out: &mut impl Write, distribution_id: &str, path_pattern: &str) -> io::Result<()> {
    let rule = "=".repeat(60);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "IMPORTANT: CloudFront is now deploying the changes.")?;
    writeln!(out, "This typically takes 5-15 minutes to propagate globally.")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "\nYou can check deployment status with:")?;
    writeln!(
        out,
        "aws cloudfront get-distribution --id {distribution_id} --query 'Distribution.Status'"
    )?;
    writeln!(
        out,
        "\nOnce deployed, all requests (including {path_pattern}) will route to the remaining origins."
    )
}
