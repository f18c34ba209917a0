//! Generation engine for administration modules.
//!
//! Turns a [`ModuleSpec`] into a directory tree populated from templates,
//! creating only what is missing so that repeated runs are safe.
//!
//! # Module Organization
//!
//! - [`names`] - Module name validation and derived name variants
//! - [`layout`] - Directory layout planning
//! - [`catalog`] - Template enumeration and role classification
//! - [`render`] - Placeholder substitution
//! - [`generator`] - The generation pipeline tying everything together

pub mod catalog;
pub mod generator;
pub mod layout;
pub mod names;
pub mod paths;
pub mod render;

pub use admod_core::{Error, Facet, FacetSet, Result, WriteResult};
pub use catalog::{TemplateAsset, TemplateCatalog, TemplateRole};
pub use generator::{
    GenerateOptions, GenerationResult, Generator, PreviewResult, Unrouted, UnroutedReason,
    destination,
};
pub use layout::{LayoutPlan, ModuleLayout, PageKind, plan_layout};
pub use names::{ModuleSpec, NameVariants};
pub use render::render;
