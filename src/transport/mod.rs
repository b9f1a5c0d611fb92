/// Filesystem transport used by directory-backed record sources.
pub mod fs;
