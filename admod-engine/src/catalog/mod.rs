//! Template enumeration and classification.
//!
//! A [`TemplateCatalog`] yields [`TemplateAsset`]s from either the bundled
//! template set or a directory on disk. Each asset is classified into a
//! [`TemplateRole`] as it is produced; assets without a role are inert.

mod bundled;
mod role;

use std::{
    fmt,
    path::{Path, PathBuf},
};

use admod_core::{Error, Result};
pub use role::TemplateRole;
use tracing::debug;

/// A named template blob with its classified role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateAsset {
    filename: String,
    role: Option<TemplateRole>,
    body: String,
}

impl TemplateAsset {
    /// Create an asset, classifying it by filename.
    pub fn new(filename: impl Into<String>, body: impl Into<String>) -> Self {
        let filename = filename.into();
        let role = TemplateRole::classify(&filename);
        Self {
            filename,
            role,
            body: body.into(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The destination role, `None` if the asset is inert.
    pub fn role(&self) -> Option<TemplateRole> {
        self.role
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Where templates are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TemplateSource {
    Bundled,
    Directory(PathBuf),
}

/// A read-only, re-enumerable source of templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    source: TemplateSource,
}

impl TemplateCatalog {
    /// The templates shipped with admod.
    pub fn bundled() -> Self {
        Self {
            source: TemplateSource::Bundled,
        }
    }

    /// Templates read from the files directly inside `dir`.
    ///
    /// The directory is not touched until the catalog is enumerated.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: TemplateSource::Directory(dir.into()),
        }
    }

    /// Start a new enumeration.
    ///
    /// For directory catalogs the listing is taken now and each body is read
    /// when its asset is reached. Listing or reading failures are reported
    /// as [`Error::CatalogUnavailable`].
    pub fn assets(&self) -> Result<Assets> {
        let inner = match &self.source {
            TemplateSource::Bundled => AssetsInner::Bundled(bundled::TEMPLATES.iter()),
            TemplateSource::Directory(dir) => {
                AssetsInner::Directory(list_template_files(dir)?.into_iter())
            }
        };
        Ok(Assets { inner })
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}

impl fmt::Display for TemplateCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            TemplateSource::Bundled => write!(f, "bundled templates"),
            TemplateSource::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

fn list_template_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::catalog_unavailable(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::catalog_unavailable(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    debug!(dir = %dir.display(), count = files.len(), "listed templates");
    Ok(files)
}

/// Lazy iterator over a catalog's assets.
pub struct Assets {
    inner: AssetsInner,
}

enum AssetsInner {
    Bundled(std::slice::Iter<'static, (&'static str, &'static str)>),
    Directory(std::vec::IntoIter<PathBuf>),
}

impl Iterator for Assets {
    type Item = Result<TemplateAsset>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            AssetsInner::Bundled(iter) => iter
                .next()
                .map(|(name, body)| Ok(TemplateAsset::new(*name, *body))),
            AssetsInner::Directory(iter) => iter.next().map(|path| read_asset(&path)),
        }
    }
}

fn read_asset(path: &Path) -> Result<TemplateAsset> {
    let body = std::fs::read_to_string(path).map_err(|e| Error::catalog_unavailable(path, e))?;
    let name = path.file_name().unwrap_or_default();
    let filename = name.to_string_lossy().into_owned();
    if name.to_str().is_none() {
        debug!(path = %path.display(), %filename, "template filename is not valid UTF-8");
    }
    Ok(TemplateAsset::new(filename, body))
}
