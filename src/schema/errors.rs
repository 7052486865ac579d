//! # Schema Errors

use thiserror::Error;

use crate::storage::StorageError;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema definition and persistence errors
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Attribute added under a name the schema already declares
    #[error("attribute name is not unique: {0}")]
    DuplicateAttribute(String),

    /// Attribute referenced that the schema does not declare
    #[error("attribute is not defined: {0}")]
    UnknownAttribute(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
