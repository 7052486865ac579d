//! foliodb - a minimal schema-validated document store
//!
//! Every document is one JSON file on disk, grouped by schema into
//! directories under a configurable data root. Designed for small
//! single-process applications; all queries are linear scans.

pub mod config;
pub mod document;
pub mod query;
pub mod schema;
pub mod setup;
pub mod storage;

pub use config::StoreConfig;
pub use document::{Document, DocumentError};
pub use query::{QueryEngine, QueryError};
pub use schema::{AttributeType, Schema, SchemaError};
pub use storage::{CleanupReport, FileStore, StorageError};
