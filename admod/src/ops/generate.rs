//! Generate operation - module scaffolding below a base path.

use std::path::Path;

use admod_core::Result;
use admod_engine::Generator;

use crate::reports::{GenerateOutcome, GenerateReport};

/// Options for the generate operation.
pub struct RunOptions<'a> {
    /// Registered target name, if the base came from the registry.
    pub target: Option<&'a str>,
    /// Base path (…/Resources/app) to generate into.
    pub base: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(generator: &Generator, opts: RunOptions) -> Result<GenerateReport> {
    let outcome = if opts.dry_run {
        GenerateOutcome::Preview(generator.preview(opts.base)?)
    } else {
        GenerateOutcome::Written(generator.generate(opts.base)?)
    };

    Ok(GenerateReport {
        module: generator.spec().name().to_string(),
        target: opts.target.map(str::to_string),
        base: opts.base.to_path_buf(),
        templates: generator.catalog().to_string(),
        facets: generator.spec().facets().to_string(),
        outcome,
    })
}
