use std::io;

use thiserror::Error;

use crate::types::{RecordId, SourceId};

/// Error type for record store, record source, and configuration failures.
///
/// Catalog filtering and pagination never construct this: every session
/// transition is a total function. Only the mutation and loading surfaces
/// can fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("record source '{source_id}' is unavailable: {reason}")]
    SourceUnavailable { source_id: SourceId, reason: String },
    #[error("record '{0}' already exists in the store")]
    DuplicateRecord(RecordId),
    #[error("record '{0}' does not exist in the store")]
    UnknownRecord(RecordId),
    #[error("record file '{path}' could not be decoded: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
}
