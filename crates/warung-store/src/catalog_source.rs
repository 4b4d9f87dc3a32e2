//! # Catalog Source
//!
//! Retrieves the catalog data file and hands it to the core parser. This
//! is the one-time load at startup: retrieval failure means an empty
//! catalog and a visible empty-state, not a crash, and there is no retry.

use std::path::Path;

use tracing::{info, warn};

use warung_core::Catalog;

use crate::error::{StoreError, StoreResult};

/// Loads and parses the catalog file.
///
/// Individual malformed rows are excluded by the parser and only show up
/// as an aggregate count; a missing or unreadable file is
/// [`StoreError::SourceUnavailable`].
pub fn load_catalog(path: &Path) -> StoreResult<Catalog> {
    let source = std::fs::read_to_string(path).map_err(|source| StoreError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = Catalog::parse(&source);
    if catalog.skipped_rows() > 0 {
        warn!(
            path = %path.display(),
            skipped = catalog.skipped_rows(),
            "catalog rows missing name or size were excluded"
        );
    }
    info!(path = %path.display(), items = catalog.len(), "catalog loaded");

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_catalog_counts_and_items() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "name,size,discount\nHades,6.4,0.2\n,1.0,\n").unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.skipped_rows(), 1);
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, StoreError::SourceUnavailable { .. }));
    }
}
