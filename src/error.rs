//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required setting: {0}")]
    Missing(&'static str),
    #[error("invalid setting {key}: {message}")]
    Invalid { key: &'static str, message: String },
    #[error("config load: {0}")]
    Load(String),
}

/// Failures of the storage layer. Each variant keeps the underlying driver error as its source.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to initialize storage at {path}: {source}")]
    Initialization {
        path: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("no student found with id {0}")]
    NotFound(i64),
    #[error("failed to {op}: {source}")]
    Write {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("query error ({op}): {source}")]
    Query {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("validation: {0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Storage(StorageError::NotFound(_)) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::from(StorageError::NotFound(7));
        assert_eq!(err.status_and_code(), (StatusCode::NOT_FOUND, "not_found"));
        assert_eq!(err.to_string(), "no student found with id 7");
    }

    #[test]
    fn driver_failures_map_to_500() {
        let write = AppError::from(StorageError::Write {
            op: "insert student",
            source: sqlx::Error::PoolClosed,
        });
        let query = AppError::from(StorageError::Query {
            op: "list students",
            source: sqlx::Error::PoolClosed,
        });
        assert_eq!(write.status_and_code().0, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(query.status_and_code().0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn client_errors_map_to_400() {
        assert_eq!(
            AppError::Validation("name is required".into()).status_and_code(),
            (StatusCode::BAD_REQUEST, "validation_error")
        );
        assert_eq!(
            AppError::BadRequest("invalid id".into()).status_and_code(),
            (StatusCode::BAD_REQUEST, "bad_request")
        );
    }
}
