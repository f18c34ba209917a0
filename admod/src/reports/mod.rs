//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod generate;
mod output;
mod targets;
mod templates;

pub use generate::{GenerateOutcome, GenerateReport};
pub use output::{Report, TerminalOutput};
pub use targets::{TargetEntry, TargetsReport};
pub use templates::{TemplateEntry, TemplatesReport};
