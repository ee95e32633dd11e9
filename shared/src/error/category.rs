//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Order errors (4xxx)
    Order,
    /// Product / catalog errors (6xxx)
    Product,
    /// Table errors (7xxx)
    Table,
    /// Anything outside the known ranges
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            4000..5000 => Self::Order,
            6000..7000 => Self::Product,
            7000..8000 => Self::Table,
            _ => Self::System,
        }
    }
}

impl From<ErrorCode> for ErrorCategory {
    fn from(code: ErrorCode) -> Self {
        Self::from_code(code.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from(ErrorCode::NotFound), ErrorCategory::General);
        assert_eq!(ErrorCategory::from(ErrorCode::OrderEmpty), ErrorCategory::Order);
        assert_eq!(ErrorCategory::from(ErrorCode::CatalogInvalid), ErrorCategory::Product);
        assert_eq!(
            ErrorCategory::from(ErrorCode::TableNotOrderable),
            ErrorCategory::Table
        );
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
    }
}
