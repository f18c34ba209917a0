//! Templates command report data structures.

use super::output::{Output, Report};

/// Report data for a template catalog.
#[derive(Debug)]
pub struct TemplatesReport {
    /// Catalog description (directory or bundled set).
    pub source: String,
    pub templates: Vec<TemplateEntry>,
}

/// A template and where it is routed.
#[derive(Debug)]
pub struct TemplateEntry {
    pub filename: String,
    /// Role and destination pattern, `None` if the template is inert.
    pub routing: Option<(String, String)>,
}

impl Report for TemplatesReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Templates", &self.source);
        out.newline();

        let (routed, inert): (Vec<&TemplateEntry>, Vec<&TemplateEntry>) =
            self.templates.iter().partition(|t| t.routing.is_some());

        out.section(&format!("Routed ({})", routed.len()));
        for template in routed {
            if let Some((role, destination)) = &template.routing {
                out.list_item(&format!("{} ({}) -> {}", template.filename, role, destination));
            }
        }

        if !inert.is_empty() {
            out.newline();
            out.section(&format!("Inert ({})", inert.len()));
            for template in inert {
                out.list_item(&template.filename);
            }
        }
    }
}
