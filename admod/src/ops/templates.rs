//! Templates operation - catalog listing with routing.

use std::path::Path;

use admod_core::Result;
use admod_engine::{GenerateOptions, ModuleLayout, TemplateCatalog, destination};

use crate::reports::{TemplateEntry, TemplatesReport};

/// Placeholder shown for the module name in destination patterns.
const NAME_PLACEHOLDER: &str = "<name>";

/// Classify every template in `catalog` and show where it would be written.
pub fn templates(catalog: &TemplateCatalog, options: &GenerateOptions) -> Result<TemplatesReport> {
    let layout = ModuleLayout::new(Path::new(""), NAME_PLACEHOLDER);

    let mut templates = Vec::new();
    for asset in catalog.assets()? {
        let asset = asset?;
        let routing = asset.role().map(|role| {
            let (dir, file_name) = destination(role, &layout, options);
            let path = dir.join(file_name);
            let relative = path.strip_prefix(layout.admin_root()).unwrap_or(&path);
            (role.to_string(), relative.display().to_string())
        });
        templates.push(TemplateEntry {
            filename: asset.filename().to_string(),
            routing,
        });
    }

    Ok(TemplatesReport {
        source: catalog.to_string(),
        templates,
    })
}
