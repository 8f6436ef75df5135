//! Route assembly.

mod common;
mod student;

pub use common::common_routes;
pub use student::student_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Largest accepted request body. Student payloads are a few hundred bytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Full application router: common routes at the root, student CRUD under `/api`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", student_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)),
        )
}
