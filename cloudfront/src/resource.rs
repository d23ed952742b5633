use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque version marker CloudFront hands out with every config read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ETag(pub String);

impl fmt::Display for ETag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// CloudFront's `{ Quantity, Items }` list wrapper.
///
/// The CLI leaves `Items` out entirely when `Quantity` is 0, so it is optional
/// here and stays absent on write if it was absent on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemList<T> {
    pub quantity: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items:    Option<Vec<T>>,
}

impl<T> ItemList<T> {
    pub(crate) fn len(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().flatten()
    }

    /// Keep only the items matching `keep`, then resync `quantity`. Returns how many were dropped.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) -> usize {
        let before = self.len();
        if let Some(items) = self.items.as_mut() {
            items.retain(keep);
        }
        self.quantity = self.len();
        before - self.quantity
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Origin {
    pub id:    String,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CacheBehavior {
    pub path_pattern: String,
    #[serde(flatten)]
    pub other:        Map<String, Value>,
}

/// A distribution config as returned by `get-distribution-config`.
///
/// Only the two lists this tool edits are typed. Everything else rides along in
/// `other` and is written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DistributionConfig {
    pub origins:         ItemList<Origin>,
    pub cache_behaviors: ItemList<CacheBehavior>,
    #[serde(flatten)]
    pub other:           Map<String, Value>,
}

impl DistributionConfig {
    /// Two-space indented JSON, the form handed to `update-distribution`.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetDistributionConfigOutput {
    #[serde(rename = "ETag")]
    pub e_tag:               ETag,
    #[serde(rename = "DistributionConfig")]
    pub distribution_config: DistributionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Distribution {
    #[serde(default)]
    pub id:          Option<String>,
    pub status:      String,
    #[serde(default)]
    pub domain_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateDistributionOutput {
    #[serde(rename = "ETag")]
    pub e_tag:        ETag,
    #[serde(rename = "Distribution")]
    pub distribution: Distribution,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallerIdentity {
    pub account: String,
    #[serde(default)]
    pub arn:     Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}
