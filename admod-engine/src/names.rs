//! Module name validation and derived naming variants.

use admod_core::{Error, FacetSet, Result, to_camel_case, to_dotted, to_snake_case};

/// What to generate: one module name and the selected facets.
///
/// Built once from user input and passed by reference through the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSpec {
    name: String,
    facets: FacetSet,
}

impl ModuleSpec {
    /// Create a spec from raw input.
    ///
    /// The name is trimmed and lower-cased before validation.
    pub fn new(name: &str, facets: FacetSet) -> Result<Self> {
        let name = name.trim().to_lowercase();
        if let Some(reason) = validate_module_name(&name) {
            return Err(Error::input(name, reason));
        }
        Ok(Self { name, facets })
    }

    /// The canonical (lowercase, hyphenated) module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn facets(&self) -> &FacetSet {
        &self.facets
    }
}

/// Check that a name is usable as a path segment and a dotted route token.
///
/// Returns `None` if valid, or the reason it is not.
pub fn validate_module_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("module name cannot be empty");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Some("module name contains characters other than letters, digits and hyphens");
    }
    if name.starts_with('-') || name.ends_with('-') {
        return Some("module name cannot start or end with a hyphen");
    }
    None
}

/// Textual forms of the module name used inside generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameVariants {
    /// The module name as given (`order-item`)
    pub raw: String,
    /// Dotted route prefix (`order.item`)
    pub route_form: String,
    /// camelCase label (`orderItem`)
    pub label_form: String,
    /// snake_case snippet key (`order_item`)
    pub snippet_key_form: String,
}

impl NameVariants {
    pub fn derive(module_name: &str) -> Self {
        Self {
            raw: module_name.to_string(),
            route_form: to_dotted(module_name),
            label_form: to_camel_case(module_name),
            snippet_key_form: to_snake_case(module_name),
        }
    }
}

impl From<&ModuleSpec> for NameVariants {
    fn from(spec: &ModuleSpec) -> Self {
        Self::derive(spec.name())
    }
}
