//! # Schema Registry
//!
//! Named, persisted declarations of the attribute set a class of documents
//! must have. Each schema owns one document folder under the data root.

pub mod errors;
pub mod types;

pub use errors::{SchemaError, SchemaResult};
pub use types::{AttributeType, Schema};
