use std::path::{Path, PathBuf};

use admod_config::Config;
use admod_core::{Facet, FacetSet};
use admod_engine::{GenerateOptions, Generator, ModuleSpec, TemplateCatalog, names};
use clap::Args;
use dialoguer::{Input, MultiSelect, theme::ColorfulTheme};
use eyre::{Context, Result};
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Target selector registered in admod.toml (prompted when omitted)
    pub target: Option<String>,

    /// Module name, lowercase with hyphens (prompted when omitted)
    pub module: Option<String>,

    /// Facet to generate, repeatable (prompted when omitted)
    #[arg(short, long = "facet", value_name = "FACET", value_delimiter = ',')]
    pub facets: Vec<Facet>,

    /// Base path (…/Resources/app) to generate into, bypassing the target registry
    #[arg(long, value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Template directory (defaults to generate.templates or the bundled set)
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Preview the directories and files that would be created
    #[arg(long)]
    pub dry_run: bool,

    /// Never prompt; fail on missing arguments and use configured facets
    #[arg(short, long)]
    pub no_interaction: bool,

    /// Path to admod.toml (defaults to ./admod.toml)
    #[arg(short, long, default_value = admod_config::CONFIG_FILE_NAME)]
    pub config: PathBuf,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = admod_config::load_or_default(&self.config).unwrap_or_exit();

        let (target, base) = self.resolve_base(&config)?;
        let module = self.module_name()?;
        let facets = self.facets(&config)?;
        let spec = ModuleSpec::new(&module, facets).unwrap_or_exit();

        let generator = Generator::new(spec)
            .with_catalog(select_catalog(self.templates.as_deref(), &config))
            .with_options(generate_options(&config));
        debug!(
            module = %module,
            base = %base.display(),
            catalog = %generator.catalog(),
            "resolved generation input"
        );

        let report = ops::generate(
            &generator,
            ops::generate::RunOptions {
                target: target.as_deref(),
                base: &base,
                dry_run: self.dry_run,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// The TARGET and MODULE positionals. With `--base` and a single
    /// positional, that positional is the module name.
    fn positionals(&self) -> (Option<&str>, Option<&str>) {
        match (&self.base, &self.target, &self.module) {
            (Some(_), Some(module), None) => (None, Some(module.as_str())),
            _ => (self.target.as_deref(), self.module.as_deref()),
        }
    }

    /// The target name (if any) and base path to generate into.
    fn resolve_base(&self, config: &Config) -> Result<(Option<String>, PathBuf)> {
        let (target, _) = self.positionals();
        if let Some(base) = &self.base {
            return Ok((target.map(str::to_string), base.clone()));
        }

        let selector = match target {
            Some(target) => target.to_string(),
            None if self.no_interaction => {
                eyre::bail!("a TARGET argument or --base is required with --no-interaction")
            }
            None => prompt_target(config)?,
        };

        let (name, base) = config.resolve_target(&selector).unwrap_or_exit();
        Ok((Some(name.to_string()), base.to_path_buf()))
    }

    fn module_name(&self) -> Result<String> {
        match self.positionals().1 {
            Some(module) => Ok(module.to_string()),
            None if self.no_interaction => {
                eyre::bail!("a MODULE argument is required with --no-interaction")
            }
            None => prompt_module(),
        }
    }

    fn facets(&self, config: &Config) -> Result<FacetSet> {
        if !self.facets.is_empty() {
            return Ok(self.facets.iter().copied().collect());
        }
        if self.no_interaction {
            return Ok(config.generate.facets.clone());
        }
        prompt_facets(&config.generate.facets)
    }
}

/// The `--templates` directory, else `generate.templates`, else the bundled set.
pub(crate) fn select_catalog(flag: Option<&Path>, config: &Config) -> TemplateCatalog {
    match flag.or(config.generate.templates.as_deref()) {
        Some(dir) => TemplateCatalog::from_dir(dir),
        None => TemplateCatalog::bundled(),
    }
}

/// Naming options from the `[generate]` table, falling back to the defaults.
pub(crate) fn generate_options(config: &Config) -> GenerateOptions {
    let defaults = GenerateOptions::default();
    let generate = &config.generate;
    GenerateOptions {
        snippet_locale: generate
            .snippet_locale
            .clone()
            .unwrap_or(defaults.snippet_locale),
        markup_extension: generate
            .markup_extension
            .clone()
            .unwrap_or(defaults.markup_extension),
        stylesheet_extension: generate
            .stylesheet_extension
            .clone()
            .unwrap_or(defaults.stylesheet_extension),
    }
}

fn prompt_target(config: &Config) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt("Target");
    if let Some(first) = config.target_names().next() {
        input = input.default(first.to_string());
    }
    input.interact_text().wrap_err("Failed to read target")
}

fn prompt_module() -> Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Module name")
        .validate_with(|input: &String| -> std::result::Result<(), &'static str> {
            match names::validate_module_name(&input.trim().to_lowercase()) {
                Some(reason) => Err(reason),
                None => Ok(()),
            }
        })
        .interact_text()
        .wrap_err("Failed to read module name")
}

fn prompt_facets(defaults: &FacetSet) -> Result<FacetSet> {
    let items: Vec<&str> = Facet::ALL.iter().map(|facet| facet.as_str()).collect();
    let checked: Vec<bool> = Facet::ALL
        .iter()
        .map(|facet| defaults.contains(*facet))
        .collect();

    let selection = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Facets to generate")
        .items(&items)
        .defaults(&checked)
        .interact()
        .wrap_err("Failed to get facet selection")?;

    Ok(selection.into_iter().map(|index| Facet::ALL[index]).collect())
}
