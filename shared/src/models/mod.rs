//! Data models
//!
//! Read-only records supplied by the catalog, floor and roster providers.
//! All IDs are `i64`.

pub mod dining_table;
pub mod menu_item;
pub mod staff;

// Re-exports
pub use dining_table::*;
pub use menu_item::*;
pub use staff::*;
