//! # Query Engine
//!
//! CRUD and linear-scan search over all documents belonging to one schema.
//! Every query round-trips through disk; there is no index, so all
//! non-uid lookups cost O(document count).

pub mod engine;
pub mod errors;

pub use engine::QueryEngine;
pub use errors::{QueryError, QueryResult};
