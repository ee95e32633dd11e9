//! Cart error taxonomy

use super::codes::ErrorCode;
use crate::order::CartStatus;
use thiserror::Error;

/// Errors returned by cart operations
///
/// Every failing operation leaves the cart exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Operation attempted outside the `Open` state
    #[error("cart is {status}, operation requires an open cart")]
    InvalidState { status: CartStatus },

    /// Confirm attempted with no lines
    #[error("cannot confirm an empty order")]
    EmptyOrder,

    /// No line with the given catalog item id
    #[error("line item not found: {0}")]
    NotFound(i64),
}

impl CartError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CartError::InvalidState { .. } => ErrorCode::OrderInvalidState,
            CartError::EmptyOrder => ErrorCode::OrderEmpty,
            CartError::NotFound(_) => ErrorCode::OrderItemNotFound,
        }
    }
}
