//! Unified error handling for the storefront API.
//!
//! Every failure response is a JSON object with a single `error` string
//! field. Route handlers return `Result<T, AppError>`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use pocketshop_core::ProductId;

use crate::store::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body did not parse against the endpoint schema.
    #[error("invalid body")]
    MalformedBody(#[from] JsonRejection),

    /// Login failed: no user matched the submitted credentials.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Cart add referenced a product not in the catalog.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// Cart removal position was out of range (or parsed as 0).
    #[error("invalid cart position {0}")]
    InvalidPosition(usize),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidCredentials => Self::InvalidCredentials,
            StoreError::ProductNotFound(id) => Self::ProductNotFound(id),
            StoreError::InvalidPosition(position) => Self::InvalidPosition(position),
        }
    }
}

/// JSON body for failure responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::MalformedBody(rejection) = &self {
            tracing::debug!(reason = %rejection, "rejected malformed request body");
        }

        let status = match &self {
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::ProductNotFound(_) | Self::InvalidPosition(_) => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::ProductNotFound(ProductId::new(42));
        assert_eq!(err.to_string(), "product 42 not found");

        let err = AppError::InvalidPosition(5);
        assert_eq!(err.to_string(), "invalid cart position 5");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::ProductNotFound(ProductId::new(1))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::InvalidPosition(0)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_store_error_conversion() {
        let err = AppError::from(StoreError::InvalidPosition(9));
        assert!(matches!(err, AppError::InvalidPosition(9)));

        let err = AppError::from(StoreError::InvalidCredentials);
        assert!(matches!(err, AppError::InvalidCredentials));
    }
}
