//! Store configuration
//!
//! The data root and the well-known subdirectory names are carried in an
//! explicit config struct passed to [`crate::storage::FileStore`] at
//! construction. There is no process-wide path state.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Filesystem layout configuration for a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory under which all schema and document files live
    /// (default: "./data")
    #[serde(default = "default_data_root")]
    pub data_root: PathBuf,

    /// Subdirectory holding one JSON file per schema (default: "schema")
    #[serde(default = "default_schema_dir")]
    pub schema_dir: String,

    /// Subdirectory holding one folder of documents per schema
    /// (default: "document")
    #[serde(default = "default_document_dir")]
    pub document_dir: String,
}

fn default_data_root() -> PathBuf {
    PathBuf::from("./data")
}

fn default_schema_dir() -> String {
    "schema".to_string()
}

fn default_document_dir() -> String {
    "document".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            schema_dir: default_schema_dir(),
            document_dir: default_document_dir(),
        }
    }
}

impl StoreConfig {
    /// Create a config rooted at the given directory, with default
    /// subdirectory names.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: root.into(),
            ..Default::default()
        }
    }

    /// Relative path of the schema directory.
    pub fn schema_root(&self) -> &str {
        &self.schema_dir
    }

    /// Relative path of the directory that holds per-schema document folders.
    pub fn document_root(&self) -> &str {
        &self.document_dir
    }

    /// Relative path of the document folder for one schema.
    pub fn document_path(&self, schema_name: &str) -> String {
        format!("{}/{}", self.document_dir, schema_name)
    }
}
