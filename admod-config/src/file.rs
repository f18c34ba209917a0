use std::path::{Path, PathBuf};

use crate::{Config, Error, Result};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "admod.toml";

/// An admod.toml file with both raw content and parsed configuration.
///
/// Relative paths in the parsed configuration are already resolved against
/// the directory containing the file.
pub struct AdmodToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl AdmodToml {
    /// Open and parse an admod.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let mut config = Config::from_str_with_filename(&content, &filename)?;
        if let Some(root) = path.parent() {
            config.resolve_relative_to(root);
        }

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}

/// Load the configuration at `path`, or the defaults if there is no file.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Config::default());
    }
    AdmodToml::open(path).map(AdmodToml::into_config)
}
