//! Entity trait defining the minimal contract for queryable types

/// Base trait for every type a repository can serve.
///
/// Entities here are read-only projections: the storage engine owns and
/// mutates them, this crate only describes and executes queries over them.
/// All an entity needs to expose is:
/// - a resource name used in errors and logs
/// - a positive numeric identifier
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in errors and logs (e.g., "products")
    fn resource_name() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> i64;
}
