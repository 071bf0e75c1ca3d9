//! Store trait: the opaque ordered collection specifications run against

use crate::core::entity::Entity;
use crate::core::error::StoreError;
use async_trait::async_trait;

/// Read contract a storage backend must offer for entities of type `T`.
///
/// The backend is treated as an opaque ordered collection — a relational
/// engine, an in-memory collection, a document store. The evaluator drives
/// it through exactly two capabilities: scanning rows in natural order and
/// attaching one navigation path to a batch of rows.
///
/// Implementations must be safe for concurrent read access; each call is an
/// independent unit of work with no shared mutable state. A backend that
/// observes its caller's cancellation must surface it as
/// [`StoreError::Cancelled`], never as a partial result.
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    /// All rows in the store's natural order
    async fn scan(&self) -> Result<Vec<T>, StoreError>;

    /// Attach one navigation path on every row in place.
    ///
    /// A path the store does not know is [`StoreError::UnknownInclude`].
    async fn attach(&self, path: &str, rows: &mut [T]) -> Result<(), StoreError>;
}
