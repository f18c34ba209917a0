//! Configuration for the admod module generator.
//!
//! Reads `admod.toml`, which maps target selectors to base paths and
//! carries the defaults used by `admod generate`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod validate;

pub use config::{Config, GenerateConfig};
pub use error::{Error, Result, SourceContext};
pub use file::{AdmodToml, CONFIG_FILE_NAME, load_or_default};
