//! Record source interfaces and built-in sources.
//!
//! Ownership model:
//! - `RecordSource` supplies a fully-materialized, ordered record list;
//!   the caller owns the result and typically hands it to a `RecordStore`.
//! - Sources are synchronous: whatever fetching or generation happens is
//!   finished before `load` returns.
//! - A catalog session never talks to a source directly; it always
//!   filters the store's current snapshot.

use tracing::debug;

use crate::errors::CatalogError;
use crate::record::ContentRecord;
use crate::types::SourceId;

/// Source implementation modules.
pub mod json_dir;

pub use json_dir::{JsonDirConfig, JsonDirSource};

/// Collaborator that supplies the initial ordered record list for a
/// catalog page.
pub trait RecordSource: Send + Sync {
    /// Stable source identifier used in logs and error reports.
    fn id(&self) -> &str;

    /// Materialize the full ordered record list.
    ///
    /// For a fixed backing state the output must be deterministic: same
    /// records, same order, every call.
    fn load(&self) -> Result<Vec<ContentRecord>, CatalogError>;
}

/// Fixture-backed source for tests and demos.
pub struct InMemorySource {
    id: SourceId,
    records: Vec<ContentRecord>,
}

impl InMemorySource {
    /// Source that serves a fixed record list.
    pub fn new(id: impl Into<SourceId>, records: Vec<ContentRecord>) -> Self {
        Self {
            id: id.into(),
            records,
        }
    }
}

impl RecordSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<Vec<ContentRecord>, CatalogError> {
        debug!(source_id = %self.id, records = self.records.len(), "in-memory source loaded");
        Ok(self.records.clone())
    }
}
