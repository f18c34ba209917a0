//! Core types and utilities for the admod module generator.
//!
//! This crate provides the fundamental pieces shared by the generation
//! engine and the command line front end: the error taxonomy, the facet
//! vocabulary, idempotent file creation, and case conversions.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod facet;
mod file;
mod utils;

pub use error::{Error, Result};
pub use facet::{Facet, FacetSet};
// File operations
pub use file::{File, WriteResult, ensure_directories, ensure_file};
// String utilities
pub use utils::{to_camel_case, to_dotted, to_snake_case};
