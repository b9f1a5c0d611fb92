//! In-memory record store behind the admin screens.

use chrono::Utc;
use indexmap::IndexMap;
use tracing::debug;

use crate::errors::CatalogError;
use crate::record::{ContentRecord, RecordDraft, RecordKind, RecordPatch};
use crate::types::RecordId;
use crate::utils::slugify;

/// Fallback id base for titles with no alphanumeric characters.
const FALLBACK_ID_BASE: &str = "record";

/// Insertion-ordered in-memory record store.
///
/// Mutations are immediate: deletes remove the record outright (no soft
/// delete, no undo) and edits replace fields in place. Catalog sessions
/// observe changes on their next `sync`/evaluation; the store itself
/// never notifies anyone.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: IndexMap<RecordId, ContentRecord>,
}

impl RecordStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded from an ordered record batch. Later records replace
    /// earlier ones with the same id.
    pub fn from_records(records: impl IntoIterator<Item = ContentRecord>) -> Self {
        let mut store = Self::new();
        store.replace_all(records);
        store
    }

    /// Create a record from `draft`, deriving the id from the slugified
    /// title (`-2`, `-3`, ... suffixes on collision) and stamping both
    /// timestamps. Returns the assigned id.
    pub fn create(&mut self, draft: RecordDraft) -> RecordId {
        let id = self.unique_id(&draft.title);
        let now = Utc::now();
        let record = ContentRecord {
            id: id.clone(),
            kind: draft.kind,
            title: draft.title,
            facets: draft.facets,
            metrics: draft.metrics,
            created_at: now,
            updated_at: now,
        };
        debug!(id = %id, kind = record.kind.as_str(), "record created");
        self.records.insert(id.clone(), record);
        id
    }

    /// Insert an externally-built record, keeping its id and timestamps.
    pub fn insert(&mut self, record: ContentRecord) -> Result<(), CatalogError> {
        if self.records.contains_key(&record.id) {
            return Err(CatalogError::DuplicateRecord(record.id));
        }
        debug!(id = %record.id, kind = record.kind.as_str(), "record inserted");
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    /// Replace every mutable field of `id` from `draft` (full edit form
    /// submit). The id and creation time are kept; `updated_at` is bumped.
    pub fn update(&mut self, id: &str, draft: RecordDraft) -> Result<(), CatalogError> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| CatalogError::UnknownRecord(id.to_string()))?;
        record.kind = draft.kind;
        record.title = draft.title;
        record.facets = draft.facets;
        record.metrics = draft.metrics;
        record.updated_at = Utc::now();
        debug!(id = %id, "record updated");
        Ok(())
    }

    /// Apply a partial edit: only the fields present in `patch` change.
    pub fn apply_patch(&mut self, id: &str, patch: RecordPatch) -> Result<(), CatalogError> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| CatalogError::UnknownRecord(id.to_string()))?;
        if let Some(title) = patch.title {
            record.title = title;
        }
        if let Some(facets) = patch.facets {
            record.facets = facets;
        }
        if let Some(metrics) = patch.metrics {
            record.metrics = metrics;
        }
        record.updated_at = Utc::now();
        debug!(id = %id, "record patched");
        Ok(())
    }

    /// Remove `id` immediately, returning the removed record.
    pub fn remove(&mut self, id: &str) -> Result<ContentRecord, CatalogError> {
        let removed = self
            .records
            .shift_remove(id)
            .ok_or_else(|| CatalogError::UnknownRecord(id.to_string()))?;
        debug!(id = %id, "record removed");
        Ok(removed)
    }

    /// Replace the whole store contents (record source refresh path).
    pub fn replace_all(&mut self, records: impl IntoIterator<Item = ContentRecord>) {
        self.records = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        debug!(records = self.records.len(), "store replaced");
    }

    /// Record by id.
    pub fn get(&self, id: &str) -> Option<&ContentRecord> {
        self.records.get(id)
    }

    /// Ordered snapshot of every record.
    pub fn list(&self) -> Vec<ContentRecord> {
        self.records.values().cloned().collect()
    }

    /// Ordered snapshot of one managed collection.
    pub fn list_kind(&self, kind: RecordKind) -> Vec<ContentRecord> {
        self.records
            .values()
            .filter(|record| record.kind == kind)
            .cloned()
            .collect()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn unique_id(&self, title: &str) -> RecordId {
        let base = slugify(title);
        let base = if base.is_empty() {
            FALLBACK_ID_BASE.to_string()
        } else {
            base
        };
        if !self.records.contains_key(&base) {
            return base;
        }
        let mut suffix = 2;
        loop {
            let candidate = format!("{base}-{suffix}");
            if !self.records.contains_key(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }
}
