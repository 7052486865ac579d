//! Data directory bootstrap.
//!
//! The storage, schema and query layers assume the schema root and document
//! root already exist; one of these routines must run first.

use crate::storage::{CleanupReport, FileStore, StorageResult};

/// Create the schema and document root directories if they are absent.
/// Existing roots are left untouched.
pub fn default_setup(store: &FileStore) -> StorageResult<()> {
    let config = store.config();
    for root in [config.schema_root(), config.document_root()] {
        if !store.dir_exists(root, "") {
            store.create_dir(root, "")?;
        }
    }
    Ok(())
}

/// Destructive reset: delete both roots with all their contents, then
/// recreate them empty.
///
/// Deletion is best-effort; paths that could not be removed are collected in
/// the returned report. Recreation failures propagate.
pub fn clean_start_setup(store: &FileStore) -> StorageResult<CleanupReport> {
    let config = store.config();
    let mut report = CleanupReport::default();
    for root in [config.document_root().to_string(), config.schema_root().to_string()] {
        if store.dir_exists(&root, "") {
            report.merge(store.remove_dir_recursive(&root, ""));
        }
        store.create_dir(&root, "")?;
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use serde_json::json;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, FileStore) {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(StoreConfig::with_root(tmp.path()));
        (tmp, store)
    }

    #[test]
    fn test_default_setup_creates_roots() {
        let (_tmp, store) = test_store();

        default_setup(&store).unwrap();
        assert!(store.dir_exists("schema", ""));
        assert!(store.dir_exists("document", ""));
    }

    #[test]
    fn test_default_setup_is_idempotent() {
        let (_tmp, store) = test_store();

        default_setup(&store).unwrap();
        default_setup(&store).unwrap();
        assert!(store.dir_exists("schema", ""));
    }

    #[test]
    fn test_clean_start_wipes_contents() {
        let (_tmp, store) = test_store();

        default_setup(&store).unwrap();
        store.create("leftover", &json!({}), "schema").unwrap();

        let report = clean_start_setup(&store).unwrap();
        assert!(report.is_clean());
        assert!(store.dir_exists("schema", ""));
        assert!(!store.exists("leftover", "schema"));
    }

    #[test]
    fn test_clean_start_on_empty_root() {
        let (_tmp, store) = test_store();

        let report = clean_start_setup(&store).unwrap();
        assert!(report.is_clean());
        assert!(store.dir_exists("document", ""));
    }
}
