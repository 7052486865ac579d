//! # Storage Layer
//!
//! Path-keyed JSON persistence under a configured data root. This layer has
//! no knowledge of schemas or documents; callers address entities by name
//! plus a relative directory path, and the `.json` suffix is implicit.

pub mod errors;
pub mod store;

pub use errors::{CleanupFailure, CleanupReport, StorageError, StorageResult};
pub use store::FileStore;
