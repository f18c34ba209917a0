use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use admod_core::FacetSet;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    Error, Result, SourceContext,
    validate::{capitalize_first, find_key_span, validate_file_component},
};

/// Root schema for admod.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Target selector -> base path, in declaration order
    #[serde(default)]
    pub targets: IndexMap<String, PathBuf>,

    /// Defaults for `admod generate`
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// The `[generate]` table.
///
/// Unset naming fields fall back to the generator's own defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    /// Template directory, bundled templates when unset
    pub templates: Option<PathBuf>,

    /// Facets preselected at the prompt and used with `--no-interaction`
    #[serde(default)]
    pub facets: FacetSet,

    pub snippet_locale: Option<String>,
    pub markup_extension: Option<String>,
    pub stylesheet_extension: Option<String>,
}

impl Config {
    /// Parse an admod.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        for (name, path) in &self.targets {
            if name.trim().is_empty() {
                return Err(ctx.validation_error("target name cannot be empty", None));
            }
            if path.as_os_str().is_empty() {
                return Err(ctx.validation_error(
                    format!("target '{}' has an empty path", name),
                    find_key_span(ctx.src(), name),
                ));
            }
        }

        let fields = [
            ("snippet_locale", &self.generate.snippet_locale),
            ("markup_extension", &self.generate.markup_extension),
            ("stylesheet_extension", &self.generate.stylesheet_extension),
        ];
        for (field, value) in fields {
            let Some(value) = value else { continue };
            if let Some(reason) = validate_file_component(value) {
                return Err(ctx.validation_error(
                    format!("invalid {} '{}': {}", field, value, reason),
                    find_key_span(ctx.src(), field),
                ));
            }
        }

        Ok(())
    }

    /// Make relative target and template paths relative to `root`.
    pub(crate) fn resolve_relative_to(&mut self, root: &Path) {
        for path in self.targets.values_mut() {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
        if let Some(templates) = &mut self.generate.templates {
            if templates.is_relative() {
                *templates = root.join(&*templates);
            }
        }
    }

    /// Look up a target by selector.
    ///
    /// Tries the exact name first, then the name with its first letter
    /// upper-cased, so `swagExample` finds `SwagExample`.
    pub fn resolve_target(&self, name: &str) -> Result<(&str, &Path)> {
        let name = name.trim();
        self.targets
            .get_key_value(name)
            .or_else(|| self.targets.get_key_value(capitalize_first(name).as_str()))
            .map(|(key, path)| (key.as_str(), path.as_path()))
            .ok_or_else(|| Error::unknown_target(name, self.target_names()))
    }

    /// Registered target names in declaration order.
    pub fn target_names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_str_with_filename(s, crate::CONFIG_FILE_NAME)
    }
}
