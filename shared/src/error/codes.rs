//! Error codes for the POS front-of-house
//!
//! Codes are grouped by range:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Product / catalog errors
//! - 7xxx: Table errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code enum
///
/// Represented as u16 values so callers (UI, logs) can match on numbers
/// instead of message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 4xxx: Order ====================
    /// Order item not found
    OrderItemNotFound = 4006,
    /// Order has no items
    OrderEmpty = 4007,
    /// Operation not allowed in the order's current state
    OrderInvalidState = 4008,
    /// No order is open in this session
    OrderNotOpen = 4009,

    // ==================== 6xxx: Product ====================
    /// Catalog content is invalid
    CatalogInvalid = 6205,

    // ==================== 7xxx: Table ====================
    /// Table cannot take a new order
    TableNotOrderable = 7004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::OrderItemNotFound => "Order item not found",
            ErrorCode::OrderEmpty => "Order has no items",
            ErrorCode::OrderInvalidState => "Order cannot be changed in its current state",
            ErrorCode::OrderNotOpen => "No order is open",
            ErrorCode::CatalogInvalid => "Catalog is invalid",
            ErrorCode::TableNotOrderable => "Table cannot take a new order",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),

            // Order
            4006 => Ok(ErrorCode::OrderItemNotFound),
            4007 => Ok(ErrorCode::OrderEmpty),
            4008 => Ok(ErrorCode::OrderInvalidState),
            4009 => Ok(ErrorCode::OrderNotOpen),

            // Product
            6205 => Ok(ErrorCode::CatalogInvalid),

            // Table
            7004 => Ok(ErrorCode::TableNotOrderable),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::OrderItemNotFound.code(), 4006);
        assert_eq!(ErrorCode::OrderEmpty.code(), 4007);
        assert_eq!(ErrorCode::OrderInvalidState.code(), 4008);
        assert_eq!(ErrorCode::CatalogInvalid.code(), 6205);
        assert_eq!(ErrorCode::TableNotOrderable.code(), 7004);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(ErrorCode::try_from(4007), Ok(ErrorCode::OrderEmpty));
        assert_eq!(ErrorCode::try_from(7004), Ok(ErrorCode::TableNotOrderable));
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(
            InvalidErrorCode(999).to_string(),
            "invalid error code: 999"
        );
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::OrderInvalidState).unwrap();
        assert_eq!(json, "4008");

        let code: ErrorCode = serde_json::from_str("4006").unwrap();
        assert_eq!(code, ErrorCode::OrderItemNotFound);

        let result: Result<ErrorCode, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_and_message() {
        assert_eq!(ErrorCode::OrderEmpty.to_string(), "4007");
        assert_eq!(ErrorCode::OrderEmpty.message(), "Order has no items");
    }
}
