//! Application-level error type

use crate::catalog::CatalogError;
use crate::session::SessionError;
use shared::error::{ErrorCategory, ErrorCode};
use thiserror::Error;

/// Errors surfaced by the front-of-house entry points
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Environment error: {0}")]
    Environment(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Catalog(e) => e.code(),
            AppError::Session(e) => e.code(),
            AppError::Environment(_) => ErrorCode::InvalidRequest,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.code().into()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::CartError;

    #[test]
    fn test_codes_pass_through() {
        let err = AppError::from(SessionError::Cart(CartError::EmptyOrder));
        assert_eq!(err.code(), ErrorCode::OrderEmpty);
        assert_eq!(err.category(), ErrorCategory::Order);
        assert_eq!(err.to_string(), "cannot confirm an empty order");

        let err = AppError::from(CatalogError::DuplicateId(4));
        assert_eq!(err.code(), ErrorCode::CatalogInvalid);
        assert_eq!(err.category(), ErrorCategory::Product);
    }
}
