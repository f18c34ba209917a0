//! Core operations.
//!
//! This module contains the business logic for admod commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod targets;
pub mod templates;

pub use generate::generate;
pub use targets::targets;
pub use templates::templates;
