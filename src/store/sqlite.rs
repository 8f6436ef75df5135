//! SQLite-backed [`StudentStore`]. Owns the pool and is the only code issuing SQL against `students`.

use super::StudentStore;
use crate::error::StorageError;
use crate::model::Student;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

const CREATE_STUDENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        email TEXT,
        age INTEGER
    )
"#;

#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open the database file at `path`, creating it if missing, and ensure the `students` table exists.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let init_err = |source: sqlx::Error| StorageError::Initialization {
            path: path.display().to_string(),
            source,
        };
        let opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .map_err(init_err)?;
        ensure_students_table(&pool).await.map_err(init_err)?;
        Ok(Self { pool })
    }

    /// In-memory database on a single pinned connection. Contents vanish when the store is dropped.
    pub async fn open_in_memory() -> Result<Self, StorageError> {
        let init_err = |source: sqlx::Error| StorageError::Initialization {
            path: ":memory:".into(),
            source,
        };
        let opts = SqliteConnectOptions::from_str("sqlite::memory:").map_err(init_err)?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await
            .map_err(init_err)?;
        ensure_students_table(&pool).await.map_err(init_err)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Create the `students` table if it does not exist. Safe to run on every startup.
pub async fn ensure_students_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_STUDENTS_TABLE).execute(pool).await?;
    Ok(())
}

#[async_trait]
impl StudentStore for SqliteStore {
    async fn create_student(&self, name: &str, email: &str, age: i64) -> Result<i64, StorageError> {
        let result = sqlx::query("INSERT INTO students (name, email, age) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(age)
            .execute(&self.pool)
            .await
            .map_err(|source| StorageError::Write {
                op: "insert student",
                source,
            })?;
        let id = result.last_insert_rowid();
        tracing::debug!(id, "student created");
        Ok(id)
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Student, StorageError> {
        sqlx::query_as::<_, Student>("SELECT id, name, email, age FROM students WHERE id = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|source| StorageError::Query {
                op: "get student",
                source,
            })?
            .ok_or(StorageError::NotFound(id))
    }

    async fn get_students(&self) -> Result<Vec<Student>, StorageError> {
        let students = sqlx::query_as::<_, Student>("SELECT id, name, email, age FROM students")
            .fetch_all(&self.pool)
            .await
            .map_err(|source| StorageError::Query {
                op: "list students",
                source,
            })?;
        tracing::debug!(count = students.len(), "students listed");
        Ok(students)
    }

    async fn delete_student_by_id(&self, id: i64) -> Result<String, StorageError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|source| StorageError::Write {
                op: "delete student",
                source,
            })?;
        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(id));
        }
        tracing::debug!(id, "student deleted");
        Ok(format!("student {} deleted successfully", id))
    }

    async fn update_student(
        &self,
        id: i64,
        name: &str,
        email: &str,
        age: i64,
    ) -> Result<Student, StorageError> {
        let result = sqlx::query("UPDATE students SET name = ?, email = ?, age = ? WHERE id = ?")
            .bind(name)
            .bind(email)
            .bind(age)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|source| StorageError::Write {
                op: "update student",
                source,
            })?;
        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(id));
        }
        tracing::debug!(id, "student updated");
        // Not re-read: the returned record is the values just written.
        Ok(Student {
            id,
            name: name.to_string(),
            email: email.to_string(),
            age,
        })
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|source| StorageError::Query { op: "ping", source })?;
        Ok(())
    }
}
