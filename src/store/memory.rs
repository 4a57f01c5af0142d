use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{now, UserStore};
use crate::error::StoreError;
use crate::model::user::User;

#[derive(Debug)]
struct Table {
    next_id: i32,
    rows: BTreeMap<i32, User>,
}

/// `users` table kept in process memory. Ids start at 1 and are never reused.
///
/// Unlike the `VARCHAR(50)` column in PostgreSQL, names of any length are
/// accepted here.
#[derive(Debug)]
pub struct MemoryUserStore {
    table: RwLock<Table>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, name: &str) -> Result<User, StoreError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;
        let user = User::new(id, name.to_string(), now());
        table.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<User>, StoreError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn update(&self, id: i32, name: &str) -> Result<bool, StoreError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(user) => {
                user.rename(name.to_string(), now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<User>, StoreError> {
        let needle = fragment.to_lowercase();
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|user| user.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_sequential_and_not_reused() {
        let store = MemoryUserStore::new();
        let a = store.create("Alice").await.unwrap();
        let b = store.create("Bob").await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        assert!(store.delete(b.id).await.unwrap());
        let c = store.create("Carol").await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn create_sets_defaults() {
        let store = MemoryUserStore::new();
        let user = store.create("").await.unwrap();
        assert_eq!(user.name, "");
        assert!(user.is_active);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_ids() {
        let store = MemoryUserStore::new();
        assert!(!store.update(42, "Nobody").await.unwrap());
        assert!(!store.delete(42).await.unwrap());
    }

    #[tokio::test]
    async fn update_refreshes_only_updated_at() {
        let store = MemoryUserStore::new();
        let before = store.create("Alice").await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        assert!(store.update(before.id, "Alicia").await.unwrap());
        let after = store.get_by_id(before.id).await.unwrap().unwrap();
        assert_eq!(after.name, "Alicia");
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_and_ordered() {
        let store = MemoryUserStore::new();
        store.create("Alice").await.unwrap();
        store.create("Bob").await.unwrap();
        store.create("MALIK").await.unwrap();

        let found = store.search_by_name("aLi").await.unwrap();
        let names: Vec<_> = found.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Alice", "MALIK"]);

        assert!(store.search_by_name("zed").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn name_length_is_not_limited() {
        let store = MemoryUserStore::new();
        let long = "x".repeat(51);
        let user = store.create(&long).await.unwrap();
        assert_eq!(user.name, long);
        assert!(store.update(user.id, &"y".repeat(80)).await.unwrap());
    }

    #[tokio::test]
    async fn search_treats_wildcards_literally() {
        let store = MemoryUserStore::new();
        store.create("Alice").await.unwrap();
        assert!(store.search_by_name("%").await.unwrap().is_empty());
    }
}
