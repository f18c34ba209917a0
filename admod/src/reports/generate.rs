//! Generate command report data structures.

use std::path::{Path, PathBuf};

use admod_engine::{GenerationResult, PreviewResult, Unrouted, UnroutedReason};

use super::output::{Output, Report};

/// Report data from module generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Canonical module name.
    pub module: String,
    /// Registered target name, if any.
    pub target: Option<String>,
    /// Base path generated into.
    pub base: PathBuf,
    /// Template source description.
    pub templates: String,
    /// Selected facets, comma separated.
    pub facets: String,
    /// Files written or preview.
    pub outcome: GenerateOutcome,
}

/// Result of a generate run.
#[derive(Debug)]
pub enum GenerateOutcome {
    /// Directories and files were created on disk.
    Written(GenerationResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.outcome {
            GenerateOutcome::Written(result) => self.render_written(out, result),
            GenerateOutcome::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_header(&self, out: &mut dyn Output, first_run: bool) {
        match &self.target {
            Some(target) => out.preformatted(&format!("Module '{}' for {}", self.module, target)),
            None => out.preformatted(&format!("Module '{}'", self.module)),
        }
        out.key_value("Base", &self.base.display().to_string());
        out.key_value("Templates", &self.templates);
        let facets = if self.facets.is_empty() { "none" } else { &self.facets };
        out.key_value("Facets", facets);

        if !first_run {
            out.warning(&format!(
                "module '{}' already exists; missing default folders are not recreated",
                self.module
            ));
        }
    }

    fn render_written(&self, out: &mut dyn Output, result: &GenerationResult) {
        self.render_header(out, result.first_run);
        let root = result.admin_root.as_path();

        if !result.created_dirs.is_empty() {
            out.newline();
            out.section(&format!("Created directories ({})", result.created_dirs.len()));
            for dir in &result.created_dirs {
                out.added_item(&relative(root, dir));
            }
        }

        let main_js = result.main_js == admod_core::WriteResult::Written;
        let created_files = result.written.len() + usize::from(main_js);
        if created_files > 0 {
            out.newline();
            out.section(&format!("Created files ({})", created_files));
            if main_js {
                out.added_item("main.js");
            }
            for file in &result.written {
                out.added_item(&relative(root, file));
            }
        }

        render_unrouted(out, root, &result.unrouted);

        out.newline();
        if result.has_changes() {
            out.key_value("Left untouched", &format!("{} existing files", result.skipped.len()));
        } else {
            out.preformatted("Nothing to do, the module is up to date");
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        let root = preview.admin_root.as_path();

        for file in &preview.files {
            out.divider(&relative(root, file.path()));
            out.preformatted(file.content());
        }

        out.divider("Summary");
        self.render_header(out, preview.first_run);

        if !preview.directories.is_empty() {
            out.newline();
            out.section("Directories that would be created");
            for dir in &preview.directories {
                out.added_item(&relative(root, dir));
            }
        }

        render_unrouted(out, root, &preview.unrouted);

        out.newline();
        let files = preview.files.len() + usize::from(preview.creates_main_js);
        out.preformatted(&format!(
            "{} directories and {} files would be created, {} existing files left untouched",
            preview.directories.len(),
            files,
            preview.existing.len()
        ));
    }
}

/// List templates skipped for a missing directory. Inert templates and
/// templates of unselected facets are expected and only show up in the
/// debug log.
fn render_unrouted(out: &mut dyn Output, root: &Path, unrouted: &[Unrouted]) {
    let missing: Vec<(&str, &Path)> = unrouted
        .iter()
        .filter_map(|u| match &u.reason {
            UnroutedReason::MissingDirectory(dir) => Some((u.filename.as_str(), dir.as_path())),
            UnroutedReason::Inert | UnroutedReason::FacetNotSelected(_) => None,
        })
        .collect();
    if missing.is_empty() {
        return;
    }

    out.newline();
    out.section("Skipped templates (directory missing)");
    for (filename, dir) in missing {
        out.list_item(&format!("{} -> {}", filename, relative(root, dir)));
    }
}

fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
