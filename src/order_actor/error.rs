//! Error types for the Order actor.

use thiserror::Error;

use crate::framework::FrameworkError;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order actor rejected the operation: malformed line items, a bad
    /// status transition, or a failed stock reservation.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// The order actor is unreachable. A batch audit records this and
    /// moves on to the next order.
    #[error("Order storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::Validation(msg)
    }
}

impl OrderError {
    pub(crate) fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                OrderError::StorageUnavailable(e.to_string())
            }
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::Custom(msg) => OrderError::Validation(msg),
        }
    }
}
