#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Catalog configuration types.
pub mod config;
/// Centralized constants used across facets, pagination, and seeding.
pub mod constants;
/// Reusable example runners shared by the demo wrappers.
pub mod example_apps;
/// Facet keys, per-page schemas, and filter selection state.
pub mod facet;
/// Facet value count summaries.
pub mod metrics;
/// Fixed-size page slicing over filtered lists.
pub mod page;
/// Pure catalog query evaluation.
pub mod query;
/// Content record, draft, and patch types.
pub mod record;
/// Deterministic mock catalog generation.
pub mod seed;
/// Per-page reducer-style session state.
pub mod session;
/// Record source traits and built-in sources.
pub mod source;
/// In-memory record store behind the admin screens.
pub mod store;
/// Input transports used by sources (filesystem today).
pub mod transport;
/// Shared type aliases.
pub mod types;
/// Text normalization and slug helpers.
pub mod utils;

mod errors;

pub use config::CatalogConfig;
pub use errors::CatalogError;
pub use facet::{FacetDomain, FacetKey, FacetSchema, FacetState};
pub use metrics::{facet_value_counts, FacetCount};
pub use page::Paginator;
pub use query::{evaluate, evaluate_indices, filtered_count, matches};
pub use record::{ContentRecord, RecordDraft, RecordKind, RecordMetrics, RecordPatch};
pub use seed::{seed_blog_posts, seed_datasets};
pub use session::{CatalogSession, CatalogView, Transition};
pub use source::{InMemorySource, JsonDirConfig, JsonDirSource, RecordSource};
pub use store::RecordStore;
pub use types::{FacetValue, QueryText, RecordId, SlugText, SourceId};
