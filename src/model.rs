//! Student record and request payloads.

use serde::{Deserialize, Serialize};

/// A persisted student. `id` is assigned by the store on insert and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// Body of `POST /api/students`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl NewStudent {
    pub fn into_student(self, id: i64) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}

/// Body of `PUT /api/students`. Carries the id of the row to overwrite.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentUpdate {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}
