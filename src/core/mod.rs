//! Core module containing the specification and repository machinery

pub mod entity;
pub mod error;
pub mod evaluator;
pub mod field;
pub mod query;
pub mod repository;
pub mod spec;
pub mod store;

pub use entity::Entity;
pub use error::{CatalogError, CatalogResult, StoreError};
pub use field::SortValue;
pub use query::Pagination;
pub use repository::Repository;
pub use spec::{Criteria, Direction, OrderKey, Paging, SpecBuilder, Specification};
pub use store::EntityStore;
