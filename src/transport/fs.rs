//! Filesystem transport for directory-backed record sources.

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::errors::CatalogError;

/// List candidate record files (`*.json`) under `root`, sorted by path so
/// load order is deterministic across runs.
///
/// Unreadable directory entries are skipped with a warning rather than
/// failing the whole walk.
pub fn list_record_files(root: &Path, follow_links: bool) -> Result<Vec<PathBuf>, CatalogError> {
    let mut walker = WalkDir::new(root);
    if follow_links {
        walker = walker.follow_links(true);
    }
    let mut files = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_record_file(entry.path()) {
                    files.push(entry.into_path());
                }
            }
            Err(error) => {
                warn!(root = %root.display(), error = %error, "skipping unreadable entry");
            }
        }
    }
    files.sort();
    Ok(files)
}

fn is_record_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_only_json_files_sorted() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("b.json"), "{}").expect("write");
        fs::write(dir.path().join("a.json"), "{}").expect("write");
        fs::write(dir.path().join("notes.txt"), "skip me").expect("write");
        fs::create_dir(dir.path().join("nested")).expect("mkdir");
        fs::write(dir.path().join("nested/c.JSON"), "{}").expect("write");

        let files = list_record_files(dir.path(), false).expect("walk");
        let names: Vec<_> = files
            .iter()
            .map(|path| path.strip_prefix(dir.path()).expect("prefix").to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.json"),
                PathBuf::from("b.json"),
                PathBuf::from("nested/c.JSON"),
            ]
        );
    }

    #[test]
    fn missing_root_yields_no_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope");
        let files = list_record_files(&missing, false).expect("walk");
        assert!(files.is_empty());
    }
}
