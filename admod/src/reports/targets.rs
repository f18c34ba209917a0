//! Targets command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data for the target registry.
#[derive(Debug)]
pub struct TargetsReport {
    pub targets: Vec<TargetEntry>,
}

/// A registered target.
#[derive(Debug)]
pub struct TargetEntry {
    pub name: String,
    pub base: PathBuf,
    /// Whether the base path is an existing directory.
    pub exists: bool,
}

impl Report for TargetsReport {
    fn render(&self, out: &mut dyn Output) {
        if self.targets.is_empty() {
            out.preformatted("No targets registered in admod.toml");
            return;
        }

        out.section(&format!("Targets ({})", self.targets.len()));
        for target in &self.targets {
            let base = target.base.display().to_string();
            if target.exists {
                out.key_value_indented(&target.name, &base);
            } else {
                out.key_value_indented(&target.name, &format!("{} (missing)", base));
            }
        }
    }
}
