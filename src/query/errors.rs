//! # Query Errors

use thiserror::Error;

use crate::document::DocumentError;
use crate::storage::StorageError;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Query engine errors
#[derive(Debug, Error)]
pub enum QueryError {
    /// Attribute absent from the persisted record being updated
    #[error("attribute is not present on the stored document: {0}")]
    UndeclaredAttribute(String),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
