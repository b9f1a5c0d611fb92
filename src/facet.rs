//! Facet keys, per-page facet schemas, and filter selection state.
//!
//! Ownership model:
//! - `FacetKey` is the closed set of filterable attributes; pages never
//!   invent keys at runtime.
//! - `FacetSchema` is the ordered subset of keys (plus selectable value
//!   domains) one page exposes. Pages differ only by schema, never by
//!   evaluator behavior.
//! - `FacetState` is owned by a single page session; at most one active
//!   value per facet, plus one free-text query.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::facets as domains;
use crate::types::{FacetValue, QueryText};

/// Filterable record attribute shared by every catalog page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetKey {
    Language,
    Industry,
    Application,
    Region,
    Topic,
    DataType,
    Style,
    Environment,
    Device,
    Status,
}

impl FacetKey {
    /// Every facet key, in display order.
    pub const ALL: [FacetKey; 10] = [
        FacetKey::Language,
        FacetKey::Industry,
        FacetKey::Application,
        FacetKey::Region,
        FacetKey::Topic,
        FacetKey::DataType,
        FacetKey::Style,
        FacetKey::Environment,
        FacetKey::Device,
        FacetKey::Status,
    ];

    /// Stable lowercase name used in logs and serialized records.
    pub const fn as_str(self) -> &'static str {
        match self {
            FacetKey::Language => "language",
            FacetKey::Industry => "industry",
            FacetKey::Application => "application",
            FacetKey::Region => "region",
            FacetKey::Topic => "topic",
            FacetKey::DataType => "data_type",
            FacetKey::Style => "style",
            FacetKey::Environment => "environment",
            FacetKey::Device => "device",
            FacetKey::Status => "status",
        }
    }

    /// Human label shown above a filter pill group.
    pub const fn label(self) -> &'static str {
        match self {
            FacetKey::Language => "Language",
            FacetKey::Industry => "Industry",
            FacetKey::Application => "Application",
            FacetKey::Region => "Region",
            FacetKey::Topic => "Topic",
            FacetKey::DataType => "Data Type",
            FacetKey::Style => "Style",
            FacetKey::Environment => "Environment",
            FacetKey::Device => "Device",
            FacetKey::Status => "Status",
        }
    }
}

/// Selectable value domain for one facet on one page.
#[derive(Clone, Debug)]
pub struct FacetDomain {
    /// Facet this domain belongs to.
    pub key: FacetKey,
    /// Values offered in the page's selection menu.
    pub values: Vec<FacetValue>,
}

impl FacetDomain {
    /// Build a domain from a static value table.
    pub fn new(key: FacetKey, values: &[&str]) -> Self {
        Self {
            key,
            values: values.iter().map(|value| (*value).to_string()).collect(),
        }
    }
}

/// Ordered facet set exposed by a single catalog page.
#[derive(Clone, Debug, Default)]
pub struct FacetSchema {
    domains: Vec<FacetDomain>,
}

impl FacetSchema {
    /// Schema from explicit domains, kept in the given order.
    pub fn new(domains: Vec<FacetDomain>) -> Self {
        Self { domains }
    }

    /// Facet keys in page display order.
    pub fn keys(&self) -> impl Iterator<Item = FacetKey> + '_ {
        self.domains.iter().map(|domain| domain.key)
    }

    /// Domain for one facet, when the page exposes it.
    pub fn domain(&self, key: FacetKey) -> Option<&FacetDomain> {
        self.domains.iter().find(|domain| domain.key == key)
    }

    /// Number of facets the page exposes.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Whether the page exposes no facets (query-only filtering).
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Shared facet set of the text dataset catalog pages.
    pub fn text_datasets() -> Self {
        Self::new(vec![
            FacetDomain::new(FacetKey::Language, &domains::LANGUAGES),
            FacetDomain::new(FacetKey::Industry, &domains::INDUSTRIES),
            FacetDomain::new(FacetKey::Application, &domains::APPLICATIONS),
            FacetDomain::new(FacetKey::Region, &domains::REGIONS),
            FacetDomain::new(FacetKey::DataType, &domains::DATA_TYPES),
        ])
    }

    /// Audio dataset catalog: the text set plus recording-condition facets.
    pub fn audio_datasets() -> Self {
        let mut schema = Self::text_datasets();
        schema.domains.extend([
            FacetDomain::new(FacetKey::Style, &domains::STYLES),
            FacetDomain::new(FacetKey::Environment, &domains::ENVIRONMENTS),
            FacetDomain::new(FacetKey::Device, &domains::DEVICES),
        ]);
        schema
    }

    /// Blog index facets.
    pub fn blog() -> Self {
        Self::new(vec![
            FacetDomain::new(FacetKey::Topic, &domains::TOPICS),
            FacetDomain::new(FacetKey::Industry, &domains::INDUSTRIES),
        ])
    }

    /// Job board facets.
    pub fn jobs() -> Self {
        Self::new(vec![
            FacetDomain::new(FacetKey::Region, &domains::REGIONS),
            FacetDomain::new(FacetKey::Status, &domains::STATUSES),
        ])
    }
}

/// Active filter selections for one page: at most one value per facet,
/// plus a free-text query.
///
/// No selection is ever validated against a domain; the predicate is pure
/// equality, so an out-of-domain value just matches nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacetState {
    selections: IndexMap<FacetKey, FacetValue>,
    query: QueryText,
}

impl FacetState {
    /// Empty state: no selections, no query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-select toggle: re-selecting the active value clears the
    /// facet, any other value replaces the previous selection.
    pub fn toggle(&mut self, key: FacetKey, value: impl Into<FacetValue>) {
        let value = value.into();
        if self.selections.get(&key) == Some(&value) {
            self.selections.shift_remove(&key);
        } else {
            self.selections.insert(key, value);
        }
    }

    /// Deactivate one facet.
    pub fn clear(&mut self, key: FacetKey) {
        self.selections.shift_remove(&key);
    }

    /// Replace the free-text query verbatim.
    pub fn set_query(&mut self, text: impl Into<QueryText>) {
        self.query = text.into();
    }

    /// Active value for one facet.
    pub fn selection(&self, key: FacetKey) -> Option<&str> {
        self.selections.get(&key).map(String::as_str)
    }

    /// Active selections in activation order.
    pub fn selections(&self) -> impl Iterator<Item = (FacetKey, &str)> {
        self.selections
            .iter()
            .map(|(key, value)| (*key, value.as_str()))
    }

    /// Number of active facets.
    pub fn active_facets(&self) -> usize {
        self.selections.len()
    }

    /// Raw query text as last set.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The query when it is non-empty after trimming, `None` otherwise.
    /// An all-whitespace query is treated as inactive.
    pub fn active_query(&self) -> Option<&str> {
        if self.query.trim().is_empty() {
            None
        } else {
            Some(&self.query)
        }
    }

    /// Whether no facet and no query constrains the result list.
    pub fn is_unconstrained(&self) -> bool {
        self.selections.is_empty() && self.active_query().is_none()
    }
}
