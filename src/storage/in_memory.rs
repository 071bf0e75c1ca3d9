//! In-memory store implementation for testing and development

use crate::core::entity::Entity;
use crate::core::error::StoreError;
use crate::core::store::EntityStore;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Closure that populates one navigation path on a single row
pub type Attacher<T> = Arc<dyn Fn(&mut T) -> Result<(), StoreError> + Send + Sync>;

/// In-memory entity store.
///
/// Rows live in an id-keyed [`IndexMap`], so insertion order is the store's
/// natural order — the order `scan` reports and the order an unordered
/// specification falls back to. Navigation paths are served by attacher
/// closures registered at construction; a path without a registered
/// attacher is [`StoreError::UnknownInclude`].
///
/// Uses `RwLock` for thread-safe access; reads never block each other.
/// Lock poisoning is handled asymmetrically on purpose: the
/// [`EntityStore`] read path surfaces it as [`StoreError::Backend`] so a
/// repository call reports a store failure, while the seeding helpers
/// (`insert`, `get`, `len`) recover via `into_inner` — they have no error
/// channel and the id-keyed map stays structurally sound across a
/// panicked writer.
#[derive(Clone)]
pub struct InMemoryStore<T: Entity> {
    rows: Arc<RwLock<IndexMap<i64, T>>>,
    attachers: HashMap<String, Attacher<T>>,
}

impl<T: Entity> InMemoryStore<T> {
    /// Create an empty store with no registered navigation paths
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(IndexMap::new())),
            attachers: HashMap::new(),
        }
    }

    /// Register an attacher for one navigation path
    pub fn with_attacher(
        mut self,
        path: impl Into<String>,
        attach: impl Fn(&mut T) -> Result<(), StoreError> + Send + Sync + 'static,
    ) -> Self {
        self.attachers.insert(path.into(), Arc::new(attach));
        self
    }

    /// Insert or replace one row, keyed by its id
    pub fn insert(&self, entity: T) {
        let mut rows = match self.rows.write() {
            Ok(rows) => rows,
            // a poisoned lock means a writer panicked mid-insert; the map
            // itself is still structurally sound for id-keyed inserts
            Err(poisoned) => poisoned.into_inner(),
        };
        rows.insert(entity.id(), entity);
    }

    /// Look up one row by id
    pub fn get(&self, id: i64) -> Option<T> {
        match self.rows.read() {
            Ok(rows) => rows.get(&id).cloned(),
            Err(poisoned) => poisoned.into_inner().get(&id).cloned(),
        }
    }

    /// Number of rows currently held
    pub fn len(&self) -> usize {
        match self.rows.read() {
            Ok(rows) => rows.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_rows(&self) -> Result<Vec<T>, StoreError> {
        let rows = self.rows.read().map_err(|e| StoreError::Backend {
            backend: "in-memory",
            message: format!("failed to acquire read lock: {e}"),
        })?;
        Ok(rows.values().cloned().collect())
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> EntityStore<T> for InMemoryStore<T> {
    async fn scan(&self) -> Result<Vec<T>, StoreError> {
        self.read_rows()
    }

    async fn attach(&self, path: &str, rows: &mut [T]) -> Result<(), StoreError> {
        let attach = self
            .attachers
            .get(path)
            .ok_or_else(|| StoreError::UnknownInclude {
                resource: T::resource_name(),
                path: path.to_string(),
            })?;
        for row in rows.iter_mut() {
            attach(row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: i64,
        name: String,
        tag: Option<String>,
    }

    impl Entity for Item {
        fn resource_name() -> &'static str {
            "items"
        }

        fn id(&self) -> i64 {
            self.id
        }
    }

    fn item(id: i64, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            tag: None,
        }
    }

    #[tokio::test]
    async fn test_scan_preserves_insertion_order() {
        let store = InMemoryStore::new();
        store.insert(item(3, "third"));
        store.insert(item(1, "first"));
        store.insert(item(2, "second"));

        let ids: Vec<i64> = store.scan().await.unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_insert_replaces_by_id() {
        let store = InMemoryStore::new();
        store.insert(item(1, "old"));
        store.insert(item(1, "new"));

        let rows = store.scan().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "new");
    }

    #[tokio::test]
    async fn test_attach_populates_every_row() {
        let store = InMemoryStore::new().with_attacher("tag", |row: &mut Item| {
            row.tag = Some(format!("tag-{}", row.id));
            Ok(())
        });
        store.insert(item(1, "a"));
        store.insert(item(2, "b"));

        let mut rows = store.scan().await.unwrap();
        store.attach("tag", &mut rows).await.unwrap();
        assert_eq!(rows[0].tag.as_deref(), Some("tag-1"));
        assert_eq!(rows[1].tag.as_deref(), Some("tag-2"));
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let store = InMemoryStore::new();
        store.insert(item(1, "a"));
        assert_eq!(store.get(1).map(|i| i.name), Some("a".to_string()));
        assert!(store.get(2).is_none());
    }

    #[tokio::test]
    async fn test_poisoned_lock_fails_scans_but_not_seeding() {
        let store = InMemoryStore::new();
        store.insert(item(1, "a"));

        let rows = store.rows.clone();
        let _ = std::thread::spawn(move || {
            let _guard = rows.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        let err = store.scan().await.unwrap_err();
        assert!(matches!(err, StoreError::Backend { .. }));

        // seeding helpers keep working against the still-sound map
        store.insert(item(2, "b"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(2).map(|i| i.name), Some("b".to_string()));
    }

    #[tokio::test]
    async fn test_unknown_path_is_an_error() {
        let store = InMemoryStore::<Item>::new();
        let mut rows = Vec::new();
        let err = store.attach("vendor", &mut rows).await.unwrap_err();
        match err {
            StoreError::UnknownInclude { resource, path } => {
                assert_eq!(resource, "items");
                assert_eq!(path, "vendor");
            }
            other => panic!("expected UnknownInclude, got {other:?}"),
        }
    }
}
