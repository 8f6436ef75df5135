//! Storage interface for student records. Handlers depend on [`StudentStore`], never on a concrete backend.

mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::StorageError;
use crate::model::Student;
use async_trait::async_trait;

#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Insert a row and return the id the store assigned to it.
    async fn create_student(&self, name: &str, email: &str, age: i64) -> Result<i64, StorageError>;

    async fn get_student_by_id(&self, id: i64) -> Result<Student, StorageError>;

    /// All rows in store order. Empty table yields an empty vec.
    async fn get_students(&self) -> Result<Vec<Student>, StorageError>;

    /// Delete one row. Fails with [`StorageError::NotFound`] when no row matched.
    async fn delete_student_by_id(&self, id: i64) -> Result<String, StorageError>;

    /// Overwrite name, email and age of an existing row and return the values written.
    /// Fails with [`StorageError::NotFound`] when no row matched.
    async fn update_student(
        &self,
        id: i64,
        name: &str,
        email: &str,
        age: i64,
    ) -> Result<Student, StorageError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), StorageError>;
}
