//! Error types for the Product actor.

use thiserror::Error;

use crate::framework::FrameworkError;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The product actor rejected the operation (invalid payload,
    /// insufficient stock).
    #[error("Product operation rejected: {0}")]
    Rejected(String),

    /// The catalog actor is unreachable.
    #[error("Catalog storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::Rejected(msg)
    }
}

impl ProductError {
    pub(crate) fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                ProductError::StorageUnavailable(e.to_string())
            }
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::Custom(msg) => ProductError::Rejected(msg),
        }
    }
}
