use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Errors raised while generating a module.
///
/// Every variant aborts the current run. Nothing already written is rolled
/// back, so re-running after fixing the cause completes the module.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid module name '{name}'")]
    #[diagnostic(
        code(admod::input_error),
        help("{reason}. Use lowercase letters, digits and hyphens, e.g. 'order-item'.")
    )]
    Input { name: String, reason: String },

    #[error("base path '{path}' does not exist or is not a directory")]
    #[diagnostic(
        code(admod::path_error),
        help("check the path registered for this target in admod.toml or pass --base")
    )]
    Path { path: PathBuf },

    #[error("template catalog '{path}' is unavailable")]
    #[diagnostic(
        code(admod::catalog_unavailable),
        help("point 'generate.templates' at a readable directory or remove it to use the bundled templates")
    )]
    CatalogUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(admod::write_error))]
    FilesystemWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an input error for a rejected module name
    pub fn input(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::Input {
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Create a path error for a missing base directory
    pub fn path(path: impl Into<PathBuf>) -> Box<Self> {
        Box::new(Error::Path { path: path.into() })
    }

    /// Create a catalog error from an I/O failure
    pub fn catalog_unavailable(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Error::CatalogUnavailable {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a write error from an I/O failure
    pub fn write(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Error::FilesystemWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}
