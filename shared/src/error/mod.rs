//! Error system for the POS front-of-house
//!
//! - [`ErrorCode`]: numeric codes shared with the UI
//! - [`ErrorCategory`]: classification by code range
//! - [`CartError`]: the cart operation failures
//!
//! # Example
//!
//! ```
//! use shared::error::{CartError, ErrorCategory, ErrorCode};
//!
//! let err = CartError::EmptyOrder;
//! assert_eq!(err.code(), ErrorCode::OrderEmpty);
//! assert_eq!(ErrorCategory::from(err.code()), ErrorCategory::Order);
//! ```

mod cart;
mod category;
mod codes;

pub use cart::CartError;
pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
