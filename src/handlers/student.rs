//! Student CRUD handlers: create, read, list, update, delete.

use crate::error::AppError;
use crate::model::{NewStudent, StudentUpdate};
use crate::response;
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewStudent>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = json_body(payload)?;
    RequestValidator::validate_new(&body)?;
    let id = state
        .store
        .create_student(&body.name, &body.email, body.age)
        .await?;
    tracing::info!(id, "student created");
    Ok(response::created(body.into_student(id)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let student = state.store.get_student_by_id(id).await?;
    Ok(response::ok(student))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = state.store.get_students().await?;
    Ok(response::ok(students))
}

pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<StudentUpdate>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = json_body(payload)?;
    RequestValidator::validate_update(&body)?;
    let student = state
        .store
        .update_student(body.id, &body.name, &body.email, body.age)
        .await?;
    tracing::info!(id = student.id, "student updated");
    Ok(response::ok(student))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let message = state.store.delete_student_by_id(id).await?;
    tracing::info!(id, "student deleted");
    Ok(response::status_ok(message))
}
