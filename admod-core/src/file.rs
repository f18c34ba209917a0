use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A file to be generated.
///
/// Generated files are stubs owned by the user once they exist, so a file
/// is only ever created, never overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file unless something already exists at its path
    pub fn write(&self) -> Result<WriteResult> {
        ensure_file(&self.path, &self.content)
    }
}

/// Write `content` to `path` if and only if `path` does not exist yet.
///
/// Missing parent directories are created.
pub fn ensure_file(path: &Path, content: &str) -> Result<WriteResult> {
    if path.exists() {
        debug!(path = %path.display(), "file exists, skipping");
        return Ok(WriteResult::Skipped);
    }
    write_file(path, content)?;
    Ok(WriteResult::Written)
}

/// Create every missing directory in `paths`, including intermediate ones.
///
/// Returns the directories that did not exist before the call.
pub fn ensure_directories<I, P>(paths: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut created = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            continue;
        }
        std::fs::create_dir_all(path).map_err(|e| Error::write(path, e))?;
        debug!(path = %path.display(), "created directory");
        created.push(path.to_path_buf());
    }
    Ok(created)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::write(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| Error::write(path, e))?;
    Ok(())
}
