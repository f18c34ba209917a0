//! Structural facets of an administration module.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A selectable part of the generated module tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    /// List, detail and create pages
    Page,
    /// Snippet dictionary
    Snippet,
    /// Action component
    Component,
    /// Access control list
    Acl,
    /// View extensions
    View,
    /// API service
    Service,
    /// Shared mixin
    Mixin,
}

impl Facet {
    /// All facets in prompt order.
    pub const ALL: [Facet; 7] = [
        Facet::Page,
        Facet::Snippet,
        Facet::Component,
        Facet::Acl,
        Facet::View,
        Facet::Service,
        Facet::Mixin,
    ];

    /// Returns the facet identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Page => "page",
            Facet::Snippet => "snippet",
            Facet::Component => "component",
            Facet::Acl => "acl",
            Facet::View => "view",
            Facet::Service => "service",
            Facet::Mixin => "mixin",
        }
    }

    /// Whether the facet's directory is created on demand.
    ///
    /// Pages and the snippet folder belong to the default batch that is
    /// laid out on the first run regardless of the selection.
    pub fn is_gated(&self) -> bool {
        !matches!(self, Facet::Page | Facet::Snippet)
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Facet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facet::ALL
            .into_iter()
            .find(|facet| facet.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| {
                format!(
                    "unknown facet '{}', expected one of: {}",
                    s,
                    Facet::ALL.map(|f| f.as_str()).join(", ")
                )
            })
    }
}

/// An ordered set of selected facets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FacetSet(BTreeSet<Facet>);

impl FacetSet {
    /// An empty selection (only the default batch is generated).
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, facet: Facet) -> bool {
        self.0.contains(&facet)
    }

    pub fn insert(&mut self, facet: Facet) -> bool {
        self.0.insert(facet)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Facet> + '_ {
        self.0.iter().copied()
    }
}

impl Default for FacetSet {
    /// The interactive default: pages and snippets.
    fn default() -> Self {
        [Facet::Page, Facet::Snippet].into_iter().collect()
    }
}

impl FromIterator<Facet> for FacetSet {
    fn from_iter<I: IntoIterator<Item = Facet>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FacetSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(Facet::as_str).collect();
        write!(f, "{}", names.join(", "))
    }
}
