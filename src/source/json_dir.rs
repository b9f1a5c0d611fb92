use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::errors::CatalogError;
use crate::record::ContentRecord;
use crate::source::RecordSource;
use crate::transport::fs::list_record_files;
use crate::types::SourceId;

/// Configuration for a directory-of-JSON-files record source.
#[derive(Clone, Debug)]
pub struct JsonDirConfig {
    /// Stable source identifier used in logs and error reports.
    pub source_id: SourceId,
    /// Root directory containing `*.json` record files.
    pub root: PathBuf,
    /// Whether to follow symlinks while walking the root.
    pub follow_links: bool,
    /// Skip files that fail to decode instead of failing the whole load.
    pub skip_invalid: bool,
}

impl JsonDirConfig {
    /// Config with explicit id and root; symlinks off, strict decoding.
    pub fn new(source_id: impl Into<SourceId>, root: impl Into<PathBuf>) -> Self {
        Self {
            source_id: source_id.into(),
            root: root.into(),
            follow_links: false,
            skip_invalid: false,
        }
    }

    /// Override symlink traversal.
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Override whether undecodable files are skipped.
    pub fn with_skip_invalid(mut self, skip_invalid: bool) -> Self {
        self.skip_invalid = skip_invalid;
        self
    }
}

/// Record source that decodes every `*.json` file under a root directory,
/// in path order.
pub struct JsonDirSource {
    config: JsonDirConfig,
}

impl JsonDirSource {
    /// Source over `config.root`.
    pub fn new(config: JsonDirConfig) -> Self {
        Self { config }
    }
}

impl RecordSource for JsonDirSource {
    fn id(&self) -> &str {
        &self.config.source_id
    }

    fn load(&self) -> Result<Vec<ContentRecord>, CatalogError> {
        if !self.config.root.is_dir() {
            return Err(CatalogError::SourceUnavailable {
                source_id: self.config.source_id.clone(),
                reason: format!("root '{}' is not a directory", self.config.root.display()),
            });
        }
        let files = list_record_files(&self.config.root, self.config.follow_links)?;
        let mut records = Vec::with_capacity(files.len());
        for path in files {
            let contents = fs::read_to_string(&path)?;
            match serde_json::from_str::<ContentRecord>(&contents) {
                Ok(record) => records.push(record),
                Err(source) if self.config.skip_invalid => {
                    warn!(path = %path.display(), error = %source, "skipping undecodable record file");
                }
                Err(source) => {
                    return Err(CatalogError::Decode {
                        path: path.display().to_string(),
                        source,
                    });
                }
            }
        }
        debug!(
            source_id = %self.config.source_id,
            records = records.len(),
            "record source loaded"
        );
        Ok(records)
    }
}
