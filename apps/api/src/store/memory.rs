#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::engineer::{EngineerRecord, EngineerRow};
use crate::store::EngineerStore;

/// `EngineerStore` over a `RwLock<BTreeMap>`.
///
/// The standard test double for the enrichment workflow. Iteration order is
/// ascending id.
#[derive(Debug, Default)]
pub struct InMemoryEngineerStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    rows: BTreeMap<i32, EngineerRow>,
}

impl InMemoryEngineerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().rows.is_empty()
    }
}

#[async_trait]
impl EngineerStore for InMemoryEngineerStore {
    async fn upsert(&self, record: EngineerRecord) -> Result<EngineerRow, AppError> {
        let mut inner = self.inner.write().unwrap();

        let id = match record.id {
            Some(id) => id,
            None => inner.next_id + 1,
        };
        // Counter never falls behind an explicitly written key, so fresh
        // inserts cannot collide with it later.
        if id > inner.next_id {
            inner.next_id = id;
        }

        let row = EngineerRow {
            id,
            name: record.name,
            tech_stack: record.tech_stack,
            learning_path_recommendation: record.learning_path_recommendation,
        };
        inner.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<EngineerRow>, AppError> {
        Ok(self.inner.read().unwrap().rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<EngineerRow>, AppError> {
        Ok(self.inner.read().unwrap().rows.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        // Removing an absent key is a no-op, matching the idempotent contract.
        self.inner.write().unwrap().rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, stack: &str) -> EngineerRecord {
        EngineerRecord {
            id: None,
            name: name.to_string(),
            tech_stack: stack.to_string(),
            learning_path_recommendation: "Study X".to_string(),
        }
    }

    #[tokio::test]
    async fn test_upsert_without_id_assigns_sequential_ids() {
        let store = InMemoryEngineerStore::new();
        let first = store.upsert(record("Ana", "Java, Spring")).await.unwrap();
        let second = store.upsert(record("Carlos", "Python")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_upsert_with_id_overwrites_in_place() {
        let store = InMemoryEngineerStore::new();
        let row = store.upsert(record("Ana", "Java")).await.unwrap();

        let overwritten = store
            .upsert(EngineerRecord {
                id: Some(row.id),
                name: "Ana Maria".to_string(),
                tech_stack: "Java, Kotlin".to_string(),
                learning_path_recommendation: "Study X".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(overwritten.id, row.id);
        assert_eq!(store.len(), 1);
        let fetched = store.find_by_id(row.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Ana Maria");
    }

    #[tokio::test]
    async fn test_fresh_ids_never_collide_with_explicit_keys() {
        let store = InMemoryEngineerStore::new();
        store
            .upsert(EngineerRecord {
                id: Some(10),
                name: "Ana".to_string(),
                tech_stack: "Java".to_string(),
                learning_path_recommendation: "Study X".to_string(),
            })
            .await
            .unwrap();

        let fresh = store.upsert(record("Carlos", "Go")).await.unwrap();
        assert!(fresh.id > 10, "expected id past 10, got {}", fresh.id);
    }

    #[tokio::test]
    async fn test_find_by_id_unknown_is_none() {
        let store = InMemoryEngineerStore::new();
        assert!(store.find_by_id(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_silent() {
        let store = InMemoryEngineerStore::new();
        assert!(store.delete_by_id(9999).await.is_ok());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_find_all_empty_store_is_empty_vec() {
        let store = InMemoryEngineerStore::new();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_all_returns_rows_in_id_order() {
        let store = InMemoryEngineerStore::new();
        store.upsert(record("Ana", "Java")).await.unwrap();
        store.upsert(record("Carlos", "Go")).await.unwrap();
        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].id < all[1].id);
    }
}
