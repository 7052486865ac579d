//! # Document Model
//!
//! One record conforming to a schema, identified by a unique id and persisted
//! as one JSON file in the schema's document folder.

pub mod errors;
pub mod types;

pub use errors::{DocumentError, DocumentResult};
pub use types::Document;
