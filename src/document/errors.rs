//! # Document Errors

use thiserror::Error;

use crate::storage::StorageError;

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Document-level errors
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Attribute referenced that neither the schema nor the built-in `uuid`
    /// field declares
    #[error("attribute is not defined on the document: {0}")]
    UndeclaredAttribute(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
