//! Generic repository: the sole read-access point over a store
//!
//! One repository type serves every entity type; the per-entity variation
//! lives entirely in the specification values callers hand it. The store
//! handle is an explicit constructor argument — no ambient session, no
//! framework-scoped lifetime — and every operation is an independent,
//! stateless unit of work.

use crate::core::entity::Entity;
use crate::core::error::{CatalogError, CatalogResult};
use crate::core::evaluator;
use crate::core::spec::Specification;
use crate::core::store::EntityStore;
use std::sync::Arc;

/// Read-only repository over a single entity collection
pub struct Repository<T: Entity, S: EntityStore<T>> {
    store: Arc<S>,
    _entity: std::marker::PhantomData<fn() -> T>,
}

impl<T: Entity, S: EntityStore<T>> Clone for Repository<T, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: std::marker::PhantomData,
        }
    }
}

impl<T: Entity, S: EntityStore<T>> Repository<T, S> {
    /// Create a repository over an explicit store handle
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            _entity: std::marker::PhantomData,
        }
    }

    /// Get the single entity matching a specification.
    ///
    /// Zero matches is [`CatalogError::NotFound`], never a placeholder. The
    /// specification should identify at most one row; if it matches more,
    /// the first in specification order is returned.
    pub async fn get_one(&self, spec: &Specification<T>) -> CatalogResult<T> {
        let mut rows = evaluator::evaluate(self.store.as_ref(), spec).await?;
        if rows.is_empty() {
            tracing::debug!(resource = T::resource_name(), "specification matched no rows");
            return Err(CatalogError::NotFound {
                resource: T::resource_name(),
                id: None,
            });
        }
        Ok(rows.swap_remove(0))
    }

    /// Like [`Repository::get_one`] but reports the id the caller looked up
    /// in the NotFound outcome.
    pub async fn get_by_id(&self, id: i64, spec: &Specification<T>) -> CatalogResult<T> {
        self.get_one(spec).await.map_err(|err| match err {
            CatalogError::NotFound { resource, .. } => CatalogError::NotFound {
                resource,
                id: Some(id),
            },
            other => other,
        })
    }

    /// List every entity matching a specification, materialized and already
    /// bounded by the specification's paging window
    pub async fn list(&self, spec: &Specification<T>) -> CatalogResult<Vec<T>> {
        let rows = evaluator::evaluate(self.store.as_ref(), spec).await?;
        tracing::debug!(
            resource = T::resource_name(),
            rows = rows.len(),
            "listed by specification"
        );
        Ok(rows)
    }

    /// Count entities matching a specification's criteria, ignoring its
    /// paging window; no relations are attached and no ordering is applied
    pub async fn count(&self, spec: &Specification<T>) -> CatalogResult<usize> {
        let count = evaluator::count(self.store.as_ref(), spec).await?;
        tracing::debug!(resource = T::resource_name(), count, "counted by specification");
        Ok(count)
    }

    /// Every entity in the store, unfiltered and unpaged.
    ///
    /// Meant for small reference collections where pagination is noise.
    pub async fn list_all(&self) -> CatalogResult<Vec<T>> {
        self.list(&Specification::all()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::StoreError;
    use crate::core::field::SortValue;
    use crate::core::spec::OrderKey;
    use crate::storage::InMemoryStore;

    #[derive(Clone, Debug, PartialEq)]
    struct Gadget {
        id: i64,
        name: String,
    }

    impl Entity for Gadget {
        fn resource_name() -> &'static str {
            "gadgets"
        }

        fn id(&self) -> i64 {
            self.id
        }
    }

    fn store() -> Arc<InMemoryStore<Gadget>> {
        let store = InMemoryStore::new();
        for (id, name) in [(1, "widget"), (2, "sprocket"), (3, "cog"), (4, "spanner")] {
            store.insert(Gadget {
                id,
                name: name.to_string(),
            });
        }
        Arc::new(store)
    }

    fn by_id(id: i64) -> Specification<Gadget> {
        Specification::builder().criteria(move |g: &Gadget| g.id == id).build()
    }

    #[tokio::test]
    async fn test_get_one_returns_match() {
        let repo = Repository::new(store());
        let gadget = repo.get_one(&by_id(2)).await.unwrap();
        assert_eq!(gadget.name, "sprocket");
    }

    #[tokio::test]
    async fn test_get_one_zero_matches_is_not_found() {
        let repo = Repository::new(store());
        let err = repo.get_by_id(99, &by_id(99)).await.unwrap_err();
        match err {
            CatalogError::NotFound { resource, id } => {
                assert_eq!(resource, "gadgets");
                assert_eq!(id, Some(99));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_count_ignores_paging() {
        let repo = Repository::new(store());
        let paged = Specification::<Gadget>::builder()
            .criteria(|g| g.name.starts_with('s'))
            .page(0, 1)
            .build();
        assert_eq!(repo.count(&paged).await.unwrap(), 2);
        assert_eq!(repo.list(&paged).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_all_returns_everything() {
        let repo = Repository::new(store());
        assert_eq!(repo.list_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_list_applies_ordering() {
        let repo = Repository::new(store());
        let spec = Specification::<Gadget>::builder()
            .order_by(OrderKey::asc(|g: &Gadget| SortValue::from(g.name.clone())))
            .build();
        let names: Vec<String> = repo
            .list(&spec)
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(names, vec!["cog", "spanner", "sprocket", "widget"]);
    }

    #[tokio::test]
    async fn test_unknown_include_propagates_as_store_failure() {
        let repo = Repository::new(store());
        let spec = Specification::<Gadget>::builder().include("vendor").build();
        let err = repo.list(&spec).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Store(StoreError::UnknownInclude { .. })
        ));
    }
}
