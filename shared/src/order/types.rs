//! Shared types for order composition

use crate::models::{CatalogItem, DiningTable, MenuCategory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Table Reference
// ============================================================================

/// Reference to the table being served
///
/// Fixed when the cart is opened and never changes afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TableRef {
    pub id: i64,
    pub number: i32,
}

impl From<&DiningTable> for TableRef {
    fn from(table: &DiningTable) -> Self {
        Self {
            id: table.id,
            number: table.number,
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Table {}", self.number)
    }
}

// ============================================================================
// Line Item
// ============================================================================

/// Cart line - catalog snapshot taken at add-time plus quantity
///
/// Name, price, category and image are copied, so later catalog edits do not
/// change lines already in a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Catalog item ID (unique within a cart)
    pub id: i64,
    pub name: String,
    pub unit_price: Decimal,
    pub category: MenuCategory,
    pub image_ref: String,
    /// Always >= 1 while the line exists
    pub quantity: i32,
}

impl LineItem {
    /// Snapshot a catalog item into a new line with quantity 1
    pub fn from_catalog(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            unit_price: item.unit_price,
            category: item.category,
            image_ref: item.image_ref.clone(),
            quantity: 1,
        }
    }
}
