use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tinylink_core::{ShortenerError, StorageError};
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("short code not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Shortener(#[from] ShortenerError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Shortener(source) => match source {
                ShortenerError::EmptyInput
                | ShortenerError::UrlTooLong { .. }
                | ShortenerError::GenerationExhausted { .. } => StatusCode::BAD_REQUEST,
                ShortenerError::Storage(StorageError::Unavailable(_))
                | ShortenerError::Storage(StorageError::Timeout(_)) => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                ShortenerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        for source in [
            ShortenerError::EmptyInput,
            ShortenerError::UrlTooLong {
                length: 4096,
                max: 2048,
            },
            ShortenerError::GenerationExhausted { attempts: 3 },
        ] {
            assert_eq!(AppError::from(source).status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn storage_errors_map_to_server_errors() {
        let unavailable = ShortenerError::Storage(StorageError::Unavailable("down".into()));
        let timeout = ShortenerError::Storage(StorageError::Timeout("slow".into()));
        let query = ShortenerError::Storage(StorageError::Query("syntax".into()));

        assert_eq!(
            AppError::from(unavailable).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::from(timeout).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::from(query).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            AppError::NotFound("abc".into()).status(),
            StatusCode::NOT_FOUND
        );
    }
}
