use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::facet::FacetKey;
use crate::types::{FacetValue, RecordId};
use crate::utils::normalize_inline_whitespace;

/// Managed collection a record belongs to (one admin screen per kind).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Dataset,
    BlogPost,
    Job,
    Service,
    Testimonial,
    Client,
    Contact,
}

impl RecordKind {
    /// Stable lowercase name used in logs and serialized records.
    pub const fn as_str(self) -> &'static str {
        match self {
            RecordKind::Dataset => "dataset",
            RecordKind::BlogPost => "blog_post",
            RecordKind::Job => "job",
            RecordKind::Service => "service",
            RecordKind::Testimonial => "testimonial",
            RecordKind::Client => "client",
            RecordKind::Contact => "contact",
        }
    }
}

impl Default for RecordKind {
    fn default() -> Self {
        RecordKind::Dataset
    }
}

/// Display-only numeric metadata shown on catalog cards.
///
/// Never consulted by filtering; the facet predicate sees only
/// `ContentRecord::facets`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordMetrics {
    /// Number of samples/utterances in a dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_count: Option<u64>,
    /// Recorded audio hours for audio datasets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_hours: Option<f32>,
    /// Word count for text datasets and posts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u64>,
}

/// Canonical catalog record covering datasets, posts, jobs, and the other
/// managed collections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Stable record identifier (slug-derived, immutable after creation).
    pub id: RecordId,
    /// Managed collection this record belongs to.
    pub kind: RecordKind,
    /// Display title shown on cards and admin tables.
    pub title: String,
    /// Facet field values consulted by filtering (single value per facet).
    #[serde(default)]
    pub facets: IndexMap<FacetKey, FacetValue>,
    /// Display-only numeric metadata.
    #[serde(default)]
    pub metrics: RecordMetrics,
    /// Creation time, stamped once.
    pub created_at: DateTime<Utc>,
    /// Last edit time, bumped by admin updates.
    pub updated_at: DateTime<Utc>,
}

impl ContentRecord {
    /// Value of one facet field, when the record carries it.
    pub fn facet(&self, key: FacetKey) -> Option<&str> {
        self.facets.get(&key).map(String::as_str)
    }

    /// Lowercase haystack matched by the free-text predicate: the title
    /// followed by every facet value, joined by single spaces.
    pub fn search_haystack(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(1 + self.facets.len());
        parts.push(self.title.as_str());
        parts.extend(self.facets.values().map(String::as_str));
        normalize_inline_whitespace(parts.join(" ")).to_lowercase()
    }
}

/// Input to admin create/update actions: a record without identity or
/// timestamps (the store assigns both).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RecordDraft {
    /// Collection the record belongs to.
    pub kind: RecordKind,
    /// Display title; also the basis for the slug id on create.
    pub title: String,
    /// Facet field values.
    #[serde(default)]
    pub facets: IndexMap<FacetKey, FacetValue>,
    /// Display-only numeric metadata.
    #[serde(default)]
    pub metrics: RecordMetrics,
}

impl RecordDraft {
    /// Draft with a title and kind, no facets or metrics yet.
    pub fn new(kind: RecordKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            facets: IndexMap::new(),
            metrics: RecordMetrics::default(),
        }
    }

    /// Set one facet field value.
    pub fn with_facet(mut self, key: FacetKey, value: impl Into<FacetValue>) -> Self {
        self.facets.insert(key, value.into());
        self
    }

    /// Set the display-only metrics.
    pub fn with_metrics(mut self, metrics: RecordMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

/// Partial admin edit: only the fields present replace the stored ones.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RecordPatch {
    /// Replacement title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement facet map (wholesale, not merged per key).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facets: Option<IndexMap<FacetKey, FacetValue>>,
    /// Replacement metrics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<RecordMetrics>,
}
