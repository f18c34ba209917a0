//! Targets operation - registry listing.

use admod_config::Config;

use crate::reports::{TargetEntry, TargetsReport};

/// List registered targets and whether their base path exists.
pub fn targets(config: &Config) -> TargetsReport {
    let targets = config
        .targets
        .iter()
        .map(|(name, base)| TargetEntry {
            name: name.clone(),
            base: base.clone(),
            exists: base.is_dir(),
        })
        .collect();

    TargetsReport { targets }
}
