//! The generation pipeline.
//!
//! A run is linear: plan the layout, create missing directories and
//! `main.js`, then walk the catalog and route every template to at most one
//! destination. A template is written only when the directory it belongs
//! to exists and the destination file does not.

use std::path::{Path, PathBuf};

use admod_core::{Facet, File, Result, WriteResult, ensure_directories, ensure_file};
use tracing::{debug, info};

use crate::{
    catalog::{TemplateAsset, TemplateCatalog, TemplateRole},
    layout::{ModuleLayout, plan_layout},
    names::{ModuleSpec, NameVariants},
    paths,
    render::render,
};

/// Naming choices for generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Locale of the snippet dictionary (`snippet/<locale>.json`)
    pub snippet_locale: String,
    /// Extension of page and component markup, without the leading dot
    pub markup_extension: String,
    /// Extension of page and component stylesheets, without the leading dot
    pub stylesheet_extension: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            snippet_locale: paths::DEFAULT_SNIPPET_LOCALE.to_string(),
            markup_extension: paths::DEFAULT_MARKUP_EXTENSION.to_string(),
            stylesheet_extension: paths::DEFAULT_STYLESHEET_EXTENSION.to_string(),
        }
    }
}

/// Why a template produced no file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnroutedReason {
    /// The filename matches no role.
    Inert,
    /// The template belongs to a facet that was not selected and whose
    /// directory does not exist.
    FacetNotSelected(Facet),
    /// The directory the template renders into does not exist.
    MissingDirectory(PathBuf),
}

/// A template that was not written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unrouted {
    pub filename: String,
    pub reason: UnroutedReason,
}

/// Outcome of [`Generator::generate`].
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// The administration source root everything was generated under.
    pub admin_root: PathBuf,
    /// Whether the module root was created by this run.
    pub first_run: bool,
    pub created_dirs: Vec<PathBuf>,
    pub main_js: WriteResult,
    /// Files created by this run.
    pub written: Vec<PathBuf>,
    /// Destinations that already existed and were left untouched.
    pub skipped: Vec<PathBuf>,
    pub unrouted: Vec<Unrouted>,
}

impl GenerationResult {
    /// Whether the run changed anything on disk.
    pub fn has_changes(&self) -> bool {
        !self.created_dirs.is_empty()
            || !self.written.is_empty()
            || self.main_js == WriteResult::Written
    }
}

/// Outcome of [`Generator::preview`]: what `generate` would do right now.
#[derive(Debug, Clone)]
pub struct PreviewResult {
    pub admin_root: PathBuf,
    pub first_run: bool,
    /// Directories that would be created.
    pub directories: Vec<PathBuf>,
    pub creates_main_js: bool,
    /// Files that would be created, with their rendered content.
    pub files: Vec<File>,
    /// Destinations that already exist.
    pub existing: Vec<PathBuf>,
    pub unrouted: Vec<Unrouted>,
}

/// Generates one module from a catalog of templates.
#[derive(Debug, Clone)]
pub struct Generator {
    spec: ModuleSpec,
    names: NameVariants,
    catalog: TemplateCatalog,
    options: GenerateOptions,
}

impl Generator {
    /// Create a generator using the bundled templates and default options.
    pub fn new(spec: ModuleSpec) -> Self {
        let names = NameVariants::from(&spec);
        Self {
            spec,
            names,
            catalog: TemplateCatalog::bundled(),
            options: GenerateOptions::default(),
        }
    }

    pub fn with_catalog(mut self, catalog: TemplateCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn spec(&self) -> &ModuleSpec {
        &self.spec
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Generate the module below `base`, creating only what is missing.
    pub fn generate(&self, base: &Path) -> Result<GenerationResult> {
        let plan = plan_layout(base, &self.spec)?;
        let layout = &plan.layout;

        let created_dirs = ensure_directories(&plan.directories)?;
        let main_js = ensure_file(&layout.main_js(), "")?;
        if main_js == WriteResult::Written {
            info!(path = %layout.main_js().display(), "created main.js");
        }

        let mut result = GenerationResult {
            admin_root: layout.admin_root().to_path_buf(),
            first_run: plan.first_run,
            created_dirs,
            main_js,
            written: Vec::new(),
            skipped: Vec::new(),
            unrouted: Vec::new(),
        };

        for asset in self.catalog.assets()? {
            let asset = asset?;
            let path = match self.route(&asset, layout, |dir| dir.is_dir()) {
                Ok(path) => path,
                Err(reason) => {
                    result.unrouted.push(unrouted(&asset, reason));
                    continue;
                }
            };

            let file = File::new(path, render(asset.body(), &self.names));
            match file.write()? {
                WriteResult::Written => {
                    info!(path = %file.path().display(), template = asset.filename(), "created file");
                    result.written.push(file.path().to_path_buf());
                }
                WriteResult::Skipped => result.skipped.push(file.path().to_path_buf()),
            }
        }

        Ok(result)
    }

    /// Report what [`generate`](Self::generate) would do without writing.
    ///
    /// Planned directories count as existing for routing purposes.
    pub fn preview(&self, base: &Path) -> Result<PreviewResult> {
        let plan = plan_layout(base, &self.spec)?;
        let layout = &plan.layout;

        let mut preview = PreviewResult {
            admin_root: layout.admin_root().to_path_buf(),
            first_run: plan.first_run,
            directories: plan.directories.clone(),
            creates_main_js: !layout.main_js().exists(),
            files: Vec::new(),
            existing: Vec::new(),
            unrouted: Vec::new(),
        };

        for asset in self.catalog.assets()? {
            let asset = asset?;
            match self.route(&asset, layout, |dir| plan.provides(dir)) {
                Ok(path) if path.exists() || preview.files.iter().any(|f| f.path() == path) => {
                    preview.existing.push(path);
                }
                Ok(path) => {
                    let content = render(asset.body(), &self.names);
                    preview.files.push(File::new(path, content));
                }
                Err(reason) => preview.unrouted.push(unrouted(&asset, reason)),
            }
        }

        Ok(preview)
    }

    /// Pick the destination of `asset`, provided its directory exists.
    fn route(
        &self,
        asset: &TemplateAsset,
        layout: &ModuleLayout,
        dir_exists: impl Fn(&Path) -> bool,
    ) -> std::result::Result<PathBuf, UnroutedReason> {
        let Some(role) = asset.role() else {
            debug!(template = asset.filename(), "inert template");
            return Err(UnroutedReason::Inert);
        };

        let (dir, file_name) = destination(role, layout, &self.options);
        if !dir_exists(&dir) {
            if let Some(facet) = role.gating_facet() {
                if !self.spec.facets().contains(facet) {
                    debug!(template = asset.filename(), %facet, "facet not selected, skipping template");
                    return Err(UnroutedReason::FacetNotSelected(facet));
                }
            }
            debug!(
                template = asset.filename(),
                %role,
                dir = %dir.display(),
                "directory missing, skipping template"
            );
            return Err(UnroutedReason::MissingDirectory(dir));
        }

        Ok(dir.join(file_name))
    }
}

/// The owning directory and file name for a role.
pub fn destination(
    role: TemplateRole,
    layout: &ModuleLayout,
    options: &GenerateOptions,
) -> (PathBuf, String) {
    let markup = &options.markup_extension;
    let stylesheet = &options.stylesheet_extension;

    match role {
        TemplateRole::ModuleIndex => (layout.module_root().to_path_buf(), paths::INDEX_JS.to_string()),
        TemplateRole::Snippet => (
            layout.snippet_dir(),
            format!("{}.json", options.snippet_locale),
        ),
        TemplateRole::PageScript(kind) => (layout.page_dir(kind), paths::INDEX_JS.to_string()),
        TemplateRole::PageMarkup(kind) => (
            layout.page_dir(kind),
            format!("{}.{}", layout.page_name(kind), markup),
        ),
        TemplateRole::PageStylesheet(kind) => (
            layout.page_dir(kind),
            format!("{}.{}", layout.page_name(kind), stylesheet),
        ),
        TemplateRole::ComponentScript => (layout.component_dir(), paths::INDEX_JS.to_string()),
        TemplateRole::ComponentMarkup => (
            layout.component_dir(),
            format!("{}.{}", layout.component_name(), markup),
        ),
        TemplateRole::ComponentStylesheet => (
            layout.component_dir(),
            format!("{}.{}", layout.component_name(), stylesheet),
        ),
        TemplateRole::FacetIndex(facet) => (
            layout.module_root().join(facet.as_str()),
            paths::INDEX_JS.to_string(),
        ),
    }
}

fn unrouted(asset: &TemplateAsset, reason: UnroutedReason) -> Unrouted {
    Unrouted {
        filename: asset.filename().to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use admod_core::{Facet, FacetSet};

    use super::*;
    use crate::layout::PageKind;

    fn generator(name: &str) -> Generator {
        Generator::new(ModuleSpec::new(name, FacetSet::default()).unwrap())
    }

    #[test]
    fn test_destinations_use_options() {
        let generator = generator("task").with_options(GenerateOptions {
            snippet_locale: "de-DE".to_string(),
            markup_extension: "html".to_string(),
            stylesheet_extension: "css".to_string(),
        });
        let layout = ModuleLayout::new(Path::new("/app"), "task");

        let (dir, file) = destination(TemplateRole::Snippet, &layout, &generator.options);
        assert_eq!(dir.join(file), Path::new("/app/administration/src/module/task/snippet/de-DE.json"));

        let (dir, file) =
            destination(TemplateRole::PageMarkup(PageKind::List), &layout, &generator.options);
        assert_eq!(
            dir.join(file),
            Path::new("/app/administration/src/module/task/page/task-list/task-list.html")
        );

        let (dir, file) = destination(TemplateRole::ComponentStylesheet, &layout, &generator.options);
        assert_eq!(
            dir.join(file),
            Path::new("/app/administration/src/module/task/component/task-action/task-action.css")
        );
    }

    #[test]
    fn test_default_destinations() {
        let generator = generator("order-item");
        let layout = ModuleLayout::new(Path::new("/app"), "order-item");
        let root = layout.module_root().to_path_buf();

        let cases = [
            (TemplateRole::ModuleIndex, "index.js"),
            (TemplateRole::Snippet, "snippet/en-GB.json"),
            (
                TemplateRole::PageScript(PageKind::Create),
                "page/order-item-create/index.js",
            ),
            (
                TemplateRole::PageStylesheet(PageKind::Detail),
                "page/order-item-detail/order-item-detail.scss",
            ),
            (
                TemplateRole::ComponentMarkup,
                "component/order-item-action/order-item-action.html.twig",
            ),
            (TemplateRole::FacetIndex(Facet::Service), "service/index.js"),
        ];

        for (role, expected) in cases {
            let (dir, file) = destination(role, &layout, &generator.options);
            assert_eq!(dir.join(file), root.join(expected), "{role}");
        }
    }

    #[test]
    fn test_route_inert_and_missing_directory() {
        let generator = generator("task");
        let layout = ModuleLayout::new(Path::new("/app"), "task");

        let inert = TemplateAsset::new("README.md", "docs");
        assert_eq!(
            generator.route(&inert, &layout, |_| true),
            Err(UnroutedReason::Inert)
        );

        let snippet = TemplateAsset::new("module_snippet.json", "{}");
        assert_eq!(
            generator.route(&snippet, &layout, |_| false),
            Err(UnroutedReason::MissingDirectory(layout.snippet_dir()))
        );

        let acl = TemplateAsset::new("module_acl_index.js", "acl");
        assert_eq!(
            generator.route(&acl, &layout, |_| false),
            Err(UnroutedReason::FacetNotSelected(Facet::Acl))
        );
        assert_eq!(
            generator.route(&acl, &layout, |_| true),
            Ok(layout.module_root().join("acl/index.js"))
        );
    }

    #[test]
    fn test_route_selected_facet_with_missing_directory() {
        let spec = ModuleSpec::new("task", [Facet::Acl].into_iter().collect()).unwrap();
        let generator = Generator::new(spec);
        let layout = ModuleLayout::new(Path::new("/app"), "task");

        let acl = TemplateAsset::new("module_acl_index.js", "acl");
        assert_eq!(
            generator.route(&acl, &layout, |_| false),
            Err(UnroutedReason::MissingDirectory(
                layout.facet_dir(Facet::Acl).unwrap()
            ))
        );

        // an unselected facet whose folder exists from an earlier run is still filled
        let mixin = TemplateAsset::new("module_mixin_index.js", "mixin");
        assert_eq!(
            generator.route(&mixin, &layout, |_| true),
            Ok(layout.module_root().join("mixin/index.js"))
        );
    }
}
