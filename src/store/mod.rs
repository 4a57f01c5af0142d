//! Persistence for [`User`] records.
//!
//! Handlers only ever see `Arc<dyn UserStore>`; which backend sits behind it
//! is decided at startup.

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};

use crate::error::StoreError;
use crate::model::user::User;

mod memory;
mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts an active user with both timestamps set to now.
    async fn create(&self, name: &str) -> Result<User, StoreError>;

    /// All users, ordered by id.
    async fn list_all(&self) -> Result<Vec<User>, StoreError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<User>, StoreError>;

    /// Renames a user and refreshes `updated_at`. `false` if no such id.
    async fn update(&self, id: i32, name: &str) -> Result<bool, StoreError>;

    /// `false` if no such id.
    async fn delete(&self, id: i32) -> Result<bool, StoreError>;

    /// Case-insensitive substring match on `name`, ordered by id.
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<User>, StoreError>;
}

pub(crate) fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
