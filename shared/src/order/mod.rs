//! Order composition types
//!
//! - [`LineItem`]: one cart row, a snapshot of a catalog item plus quantity
//! - [`TableRef`]: the table an order is taken for
//! - [`ConfirmedOrder`]: immutable snapshot emitted on confirmation

pub mod snapshot;
pub mod types;

// Re-exports
pub use snapshot::{CartStatus, ConfirmedOrder};
pub use types::*;
