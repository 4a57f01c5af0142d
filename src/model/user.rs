use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Row of the `users` table. Timestamps are naive UTC.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub is_active: bool,
}

impl User {
    /// Builds a freshly inserted record: both timestamps equal, active.
    pub fn new(id: i32, name: String, now: NaiveDateTime) -> Self {
        Self {
            id,
            name,
            created_at: now,
            updated_at: now,
            is_active: true,
        }
    }

    pub fn rename(&mut self, name: String, now: NaiveDateTime) {
        self.name = name;
        self.updated_at = now;
    }
}

// Payload for POST /user
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

// Payload for PUT /user/:id
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
}

// Payload for POST /search
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub name: String,
}
