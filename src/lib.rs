//! # catalog-rs
//!
//! A specification-driven generic repository for catalog-style read APIs.
//!
//! Callers describe *what* data they want — filter, sort order, related
//! data to attach, paging window — as an immutable [`core::Specification`]
//! value, and a single generic execution engine turns that description into
//! a materialized result set or a count against an arbitrary store. No
//! imperative query code per entity type.
//!
//! ## Architecture
//!
//! - **Specification**: an immutable query description, built once
//! - **Builders**: per-entity functions turning request parameters into a
//!   page spec and a criteria-equivalent count spec
//! - **Evaluator**: applies a specification's stages in a fixed order
//!   (includes, criteria, ordering, paging)
//! - **Repository**: the sole read-access point — get one, list, count,
//!   list all — over any [`core::EntityStore`] backend
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catalog::prelude::*;
//!
//! let catalog = Catalog::new(products, brands, types);
//!
//! let params = ProductParams {
//!     search: Some("boot".to_string()),
//!     brand_id: Some(2),
//!     sort: ProductSort::PriceAsc,
//!     page_index: 1,
//!     page_size: 5,
//!     ..Default::default()
//! };
//!
//! let page = catalog.list_products(&params).await?;
//! println!("{} of {} products", page.data.len(), page.count);
//!
//! match catalog.get_product(42).await {
//!     Ok(product) => println!("{}", product.name),
//!     Err(CatalogError::NotFound { .. }) => println!("no such product"),
//!     Err(other) => return Err(other),
//! }
//! ```

pub mod catalog;
pub mod core;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        entity::Entity,
        error::{CatalogError, CatalogResult, StoreError},
        field::SortValue,
        query::Pagination,
        repository::Repository,
        spec::{Direction, OrderKey, Paging, SpecBuilder, Specification},
        store::EntityStore,
    };

    // === Catalog ===
    pub use crate::catalog::{
        Brand, Catalog, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Product, ProductParams, ProductSort,
        ProductType,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
}
