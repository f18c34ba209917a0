//! Template roles and filename classification.

use std::fmt;

use admod_core::Facet;

use crate::layout::PageKind;

/// Which destination file a template renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateRole {
    /// `module/<name>/index.js`
    ModuleIndex,
    /// `snippet/<locale>.json`
    Snippet,
    /// `page/<name>-<kind>/index.js`
    PageScript(PageKind),
    /// `page/<name>-<kind>/<name>-<kind>.<markup>`
    PageMarkup(PageKind),
    /// `page/<name>-<kind>/<name>-<kind>.<stylesheet>`
    PageStylesheet(PageKind),
    /// `component/<name>-action/index.js`
    ComponentScript,
    ComponentMarkup,
    ComponentStylesheet,
    /// `<facet>/index.js` for acl, view, service and mixin
    FacetIndex(Facet),
}

/// Filename markers, most specific first. The first marker found anywhere
/// in a filename decides its role.
const ROLE_MARKERS: &[(&str, TemplateRole)] = &[
    ("component_action_twig", TemplateRole::ComponentMarkup),
    ("component_action_scss", TemplateRole::ComponentStylesheet),
    ("component_index", TemplateRole::ComponentScript),
    ("page_list_twig", TemplateRole::PageMarkup(PageKind::List)),
    ("page_detail_twig", TemplateRole::PageMarkup(PageKind::Detail)),
    ("page_create_twig", TemplateRole::PageMarkup(PageKind::Create)),
    ("page_list_scss", TemplateRole::PageStylesheet(PageKind::List)),
    ("page_detail_scss", TemplateRole::PageStylesheet(PageKind::Detail)),
    ("page_create_scss", TemplateRole::PageStylesheet(PageKind::Create)),
    ("page-list", TemplateRole::PageScript(PageKind::List)),
    ("page-detail", TemplateRole::PageScript(PageKind::Detail)),
    ("page-create", TemplateRole::PageScript(PageKind::Create)),
    ("acl_index", TemplateRole::FacetIndex(Facet::Acl)),
    ("mixin_index", TemplateRole::FacetIndex(Facet::Mixin)),
    ("service_index", TemplateRole::FacetIndex(Facet::Service)),
    ("view_index", TemplateRole::FacetIndex(Facet::View)),
    ("snippet", TemplateRole::Snippet),
    ("base", TemplateRole::ModuleIndex),
];

impl TemplateRole {
    /// Classify a template by its filename, `None` for inert templates.
    pub fn classify(filename: &str) -> Option<Self> {
        ROLE_MARKERS
            .iter()
            .find(|(marker, _)| filename.contains(marker))
            .map(|(_, role)| *role)
    }

    /// The facet whose directory must exist for this role to be written.
    ///
    /// Default roles (module index, snippet, pages) depend on the default
    /// folders instead and return `None`.
    pub fn gating_facet(&self) -> Option<Facet> {
        match self {
            TemplateRole::ComponentScript
            | TemplateRole::ComponentMarkup
            | TemplateRole::ComponentStylesheet => Some(Facet::Component),
            TemplateRole::FacetIndex(facet) => Some(*facet),
            TemplateRole::ModuleIndex
            | TemplateRole::Snippet
            | TemplateRole::PageScript(_)
            | TemplateRole::PageMarkup(_)
            | TemplateRole::PageStylesheet(_) => None,
        }
    }
}

impl fmt::Display for TemplateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateRole::ModuleIndex => write!(f, "module index"),
            TemplateRole::Snippet => write!(f, "snippet dictionary"),
            TemplateRole::PageScript(kind) => write!(f, "{} page script", kind),
            TemplateRole::PageMarkup(kind) => write!(f, "{} page markup", kind),
            TemplateRole::PageStylesheet(kind) => write!(f, "{} page stylesheet", kind),
            TemplateRole::ComponentScript => write!(f, "component script"),
            TemplateRole::ComponentMarkup => write!(f, "component markup"),
            TemplateRole::ComponentStylesheet => write!(f, "component stylesheet"),
            TemplateRole::FacetIndex(facet) => write!(f, "{} index", facet),
        }
    }
}
