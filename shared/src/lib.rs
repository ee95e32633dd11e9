//! Shared types for the POS front-of-house
//!
//! Plain data types used by every consumer: menu catalog, dining tables,
//! staff roster, order lines and snapshots, and the error taxonomy.

pub mod error;
pub mod models;
pub mod order;
pub mod types;
pub mod util;

// Re-exports
pub use error::{CartError, ErrorCode};
pub use models::{CatalogItem, DiningTable, MenuCategory, StaffMember, TableStatus};
pub use order::{CartStatus, ConfirmedOrder, LineItem, TableRef};
pub use serde::{Deserialize, Serialize};
