//! Success response helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub status: &'static str,
    pub message: String,
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn status_ok(message: String) -> (StatusCode, Json<StatusMessage>) {
    (
        StatusCode::OK,
        Json(StatusMessage {
            status: "OK",
            message,
        }),
    )
}
