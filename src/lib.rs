//! Students API: JSON CRUD over a single SQLite-backed `students` table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod server;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError, StorageError};
pub use model::{NewStudent, Student, StudentUpdate};
pub use routes::{app, common_routes, student_routes};
pub use server::{serve, shutdown_signal};
pub use service::RequestValidator;
pub use state::AppState;
pub use store::{SqliteStore, StudentStore};
