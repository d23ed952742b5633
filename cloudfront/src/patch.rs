use crate::resource::DistributionConfig;

/// Result of filtering one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed { count: usize },
    /// Nothing matched. Usually means an earlier run already removed it.
    NotFound,
}

impl Removal {
    fn from_count(count: usize) -> Self {
        if count > 0 { Removal::Removed { count } } else { Removal::NotFound }
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, Removal::Removed { .. })
    }
}

pub fn remove_origin(config: &mut DistributionConfig, origin_id: &str) -> Removal {
    Removal::from_count(config.origins.retain(|origin| origin.id != origin_id))
}

pub fn remove_cache_behavior(config: &mut DistributionConfig, path_pattern: &str) -> Removal {
    Removal::from_count(config.cache_behaviors.retain(|behavior| behavior.path_pattern != path_pattern))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSummary {
    pub origins_before:         usize,
    pub origins_after:          usize,
    pub origin:                 Removal,
    pub cache_behaviors_before: usize,
    pub cache_behaviors_after:  usize,
    pub cache_behavior:         Removal,
}

/// Apply both filters. They always run together so a patched config is never half-edited.
pub fn apply(config: &mut DistributionConfig, origin_id: &str, path_pattern: &str) -> PatchSummary {
    let origins_before = config.origins.quantity;
    let cache_behaviors_before = config.cache_behaviors.quantity;

    let origin = remove_origin(config, origin_id);
    let cache_behavior = remove_cache_behavior(config, path_pattern);

    PatchSummary {
        origins_before,
        origins_after: config.origins.quantity,
        origin,
        cache_behaviors_before,
        cache_behaviors_after: config.cache_behaviors.quantity,
        cache_behavior,
    }
}
