//! Directory layout of a generated module.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use admod_core::{Error, Facet, Result};
use tracing::debug;

use crate::{names::ModuleSpec, paths};

/// The three pages every module gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    List,
    Detail,
    Create,
}

impl PageKind {
    pub const ALL: [PageKind; 3] = [PageKind::List, PageKind::Detail, PageKind::Create];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::List => "list",
            PageKind::Detail => "detail",
            PageKind::Create => "create",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Paths of one module below a base path.
///
/// ```text
/// <base>/administration/src/
///   main.js
///   module/<name>/
///     page/<name>-{list,detail,create}/
///     snippet/
///     component/<name>-action/
///     {acl,view,service,mixin}/
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLayout {
    admin_root: PathBuf,
    module_root: PathBuf,
    name: String,
}

impl ModuleLayout {
    pub fn new(base: &Path, module_name: &str) -> Self {
        let admin_root = base.join(paths::ADMIN_SRC_DIR);
        let module_root = admin_root.join(paths::MODULE_DIR).join(module_name);
        Self {
            admin_root,
            module_root,
            name: module_name.to_string(),
        }
    }

    /// The administration source root (`<base>/administration/src`).
    pub fn admin_root(&self) -> &Path {
        &self.admin_root
    }

    pub fn module_root(&self) -> &Path {
        &self.module_root
    }

    pub fn main_js(&self) -> PathBuf {
        self.admin_root.join(paths::MAIN_JS)
    }

    pub fn page_dir(&self, kind: PageKind) -> PathBuf {
        self.module_root
            .join(paths::PAGE_DIR)
            .join(self.page_name(kind))
    }

    pub fn snippet_dir(&self) -> PathBuf {
        self.module_root.join(paths::SNIPPET_DIR)
    }

    pub fn component_dir(&self) -> PathBuf {
        self.module_root
            .join(paths::COMPONENT_DIR)
            .join(self.component_name())
    }

    /// Folder name of the action component (`<name>-action`).
    pub fn component_name(&self) -> String {
        format!("{}-{}", self.name, paths::ACTION_SUFFIX)
    }

    /// File stem shared by a page's markup and stylesheet (`<name>-<kind>`).
    pub fn page_name(&self, kind: PageKind) -> String {
        format!("{}-{}", self.name, kind)
    }

    /// Directory owned by a gated facet, `None` for default facets.
    pub fn facet_dir(&self, facet: Facet) -> Option<PathBuf> {
        match facet {
            Facet::Page | Facet::Snippet => None,
            Facet::Component => Some(self.component_dir()),
            Facet::Acl | Facet::View | Facet::Service | Facet::Mixin => {
                Some(self.module_root.join(facet.as_str()))
            }
        }
    }

    /// Directories laid out on the first run regardless of the selection.
    pub fn default_dirs(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = PageKind::ALL
            .into_iter()
            .map(|kind| self.page_dir(kind))
            .collect();
        dirs.push(self.snippet_dir());
        dirs
    }
}

/// Directories a run has to create.
#[derive(Debug, Clone)]
pub struct LayoutPlan {
    pub layout: ModuleLayout,
    /// Whether the module root was absent when planning.
    pub first_run: bool,
    /// Missing directories, in creation order.
    pub directories: Vec<PathBuf>,
}

impl LayoutPlan {
    /// Whether `dir` exists now or will be created by this plan, either
    /// directly or as the parent of a planned directory.
    pub fn provides(&self, dir: &Path) -> bool {
        dir.is_dir() || self.directories.iter().any(|planned| planned.starts_with(dir))
    }
}

/// Compute the directories to create for `spec` below `base`.
///
/// The default batch is only planned when the module root does not exist
/// yet. An existing root means the module was generated before, and its
/// default folders are left alone even if some of them were removed.
pub fn plan_layout(base: &Path, spec: &ModuleSpec) -> Result<LayoutPlan> {
    if !base.is_dir() {
        return Err(Error::path(base));
    }

    let layout = ModuleLayout::new(base, spec.name());
    let first_run = !layout.module_root().exists();
    let mut directories = Vec::new();

    if first_run {
        debug!(root = %layout.module_root().display(), "module root missing, planning default folders");
        directories.extend(layout.default_dirs());
    }

    for facet in Facet::ALL.into_iter().filter(Facet::is_gated) {
        let Some(dir) = layout.facet_dir(facet) else {
            continue;
        };
        if spec.facets().contains(facet) && !dir.exists() {
            debug!(%facet, dir = %dir.display(), "planning facet folder");
            directories.push(dir);
        }
    }

    Ok(LayoutPlan {
        layout,
        first_run,
        directories,
    })
}
