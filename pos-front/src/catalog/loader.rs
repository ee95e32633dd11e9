//! Catalog loading from a JSON file

use rust_decimal::Decimal;
use shared::error::ErrorCode;
use shared::models::CatalogItem;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate catalog item id: {0}")]
    DuplicateId(i64),

    #[error("Catalog item {id} has negative price {price}")]
    NegativePrice { id: i64, price: Decimal },
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::Io(_) => ErrorCode::NotFound,
            CatalogError::Parse(_) => ErrorCode::InvalidFormat,
            CatalogError::DuplicateId(_) | CatalogError::NegativePrice { .. } => {
                ErrorCode::CatalogInvalid
            }
        }
    }
}

/// Check catalog invariants: unique ids and non-negative prices
pub fn validate_catalog(items: &[CatalogItem]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id) {
            return Err(CatalogError::DuplicateId(item.id));
        }
        if item.unit_price < Decimal::ZERO {
            return Err(CatalogError::NegativePrice {
                id: item.id,
                price: item.unit_price,
            });
        }
    }
    Ok(())
}

/// Load and validate a catalog from a JSON array file
///
/// Accepts both `unit_price`/`image_ref` and the frontend's
/// `price`/`image` field names.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<CatalogItem>, CatalogError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let items: Vec<CatalogItem> = serde_json::from_str(&content)?;
    validate_catalog(&items)?;
    tracing::info!(path = %path.display(), items = items.len(), "Catalog loaded");
    Ok(items)
}
