//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Menu category (菜单分类)
///
/// Order matters: it is the tab order of the ordering screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MenuCategory {
    Starters,
    Mains,
    Drinks,
}

impl MenuCategory {
    /// All categories in display order
    pub const ALL: [MenuCategory; 3] = [
        MenuCategory::Starters,
        MenuCategory::Mains,
        MenuCategory::Drinks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Starters => "Starters",
            MenuCategory::Mains => "Mains",
            MenuCategory::Drinks => "Drinks",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when parsing an unknown category name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown menu category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for MenuCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Catalog item - a purchasable menu entry
///
/// Read-only for ordering code; line items copy what they need at add-time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    /// Unit price, never negative
    #[serde(alias = "price")]
    pub unit_price: Decimal,
    pub category: MenuCategory,
    /// Image URL or asset key
    #[serde(alias = "image")]
    pub image_ref: String,
}

impl CatalogItem {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        unit_price: Decimal,
        category: MenuCategory,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            category,
            image_ref: image_ref.into(),
        }
    }
}
