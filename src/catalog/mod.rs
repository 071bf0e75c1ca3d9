//! Product catalog: entities, parameters, specification builders, facade

pub mod entity;
pub mod params;
pub mod service;
pub mod specs;

pub use entity::{Brand, Product, ProductType};
pub use params::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, ProductParams, ProductSort};
pub use service::Catalog;
