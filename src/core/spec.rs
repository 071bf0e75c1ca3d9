//! Specification values: immutable descriptions of a single query
//!
//! A [`Specification`] says *what* data a caller wants — predicate, sort
//! order, related data to attach, paging window — without saying how to
//! fetch it. It is assembled once through [`SpecBuilder`] and carries no
//! mutating methods afterwards: changing a query means building a new
//! specification, which is what keeps a count spec and a page spec
//! provably criteria-equivalent when both come from the same inputs.
//!
//! Because a specification is immutable and its closures are `Send + Sync`,
//! sharing one across concurrent repository calls is safe by construction.

use crate::core::field::SortValue;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Predicate over an entity; every returned row must satisfy it
pub type Criteria<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Key extractor feeding the multi-key sort
pub type KeyExtractor<T> = Arc<dyn Fn(&T) -> SortValue + Send + Sync>;

/// Sort direction for a single order key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// One ordering key: an extractor plus a direction.
///
/// Keys are applied left-to-right; ties under one key fall through to the
/// next one in the sequence.
#[derive(Clone)]
pub struct OrderKey<T> {
    extractor: KeyExtractor<T>,
    direction: Direction,
}

impl<T> OrderKey<T> {
    /// Ascending order on the extracted key
    pub fn asc(extractor: impl Fn(&T) -> SortValue + Send + Sync + 'static) -> Self {
        Self {
            extractor: Arc::new(extractor),
            direction: Direction::Ascending,
        }
    }

    /// Descending order on the extracted key
    pub fn desc(extractor: impl Fn(&T) -> SortValue + Send + Sync + 'static) -> Self {
        Self {
            extractor: Arc::new(extractor),
            direction: Direction::Descending,
        }
    }

    /// Extract the sort key from one entity
    pub fn key_of(&self, entity: &T) -> SortValue {
        (self.extractor)(entity)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl<T> fmt::Debug for OrderKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderKey")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

/// A paging window: skip then take.
///
/// `take` is strictly positive when produced by a builder; the evaluator
/// treats a zero take as "zero rows" rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub skip: usize,
    pub take: usize,
}

/// An immutable description of one query over entities of type `T`
#[derive(Clone)]
pub struct Specification<T> {
    criteria: Option<Criteria<T>>,
    order_keys: Vec<OrderKey<T>>,
    includes: BTreeSet<String>,
    paging: Option<Paging>,
}

impl<T> Specification<T> {
    /// Start building a specification
    pub fn builder() -> SpecBuilder<T> {
        SpecBuilder::new()
    }

    /// A match-all specification: no criteria, no ordering, no includes,
    /// no paging window
    pub fn all() -> Self {
        Self::builder().build()
    }

    /// Whether one entity satisfies the criteria (absent criteria match all)
    pub fn matches(&self, entity: &T) -> bool {
        match &self.criteria {
            Some(criteria) => criteria(entity),
            None => true,
        }
    }

    pub fn has_criteria(&self) -> bool {
        self.criteria.is_some()
    }

    pub fn order_keys(&self) -> &[OrderKey<T>] {
        &self.order_keys
    }

    /// Navigation paths to attach, deduplicated and order-free
    pub fn includes(&self) -> impl Iterator<Item = &str> {
        self.includes.iter().map(String::as_str)
    }

    pub fn paging(&self) -> Option<Paging> {
        self.paging
    }
}

impl<T> fmt::Debug for Specification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification")
            .field("has_criteria", &self.criteria.is_some())
            .field("order_keys", &self.order_keys.len())
            .field("includes", &self.includes)
            .field("paging", &self.paging)
            .finish()
    }
}

/// Builder for [`Specification`]; consumed by `build`
pub struct SpecBuilder<T> {
    criteria: Option<Criteria<T>>,
    order_keys: Vec<OrderKey<T>>,
    includes: BTreeSet<String>,
    paging: Option<Paging>,
}

impl<T> SpecBuilder<T> {
    fn new() -> Self {
        Self {
            criteria: None,
            order_keys: Vec::new(),
            includes: BTreeSet::new(),
            paging: None,
        }
    }

    /// Set the predicate every returned row must satisfy
    pub fn criteria(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.criteria = Some(Arc::new(predicate));
        self
    }

    /// Set an already-shared predicate.
    ///
    /// Used by builders that hand the same criteria closure to a page spec
    /// and a count spec, so the two agree by construction.
    pub fn shared_criteria(mut self, predicate: Criteria<T>) -> Self {
        self.criteria = Some(predicate);
        self
    }

    /// Append one order key; keys apply left-to-right
    pub fn order_by(mut self, key: OrderKey<T>) -> Self {
        self.order_keys.push(key);
        self
    }

    /// Request a navigation path; duplicates collapse
    pub fn include(mut self, path: impl Into<String>) -> Self {
        self.includes.insert(path.into());
        self
    }

    /// Set the paging window
    pub fn page(mut self, skip: usize, take: usize) -> Self {
        self.paging = Some(Paging { skip, take });
        self
    }

    pub fn build(self) -> Specification<T> {
        Specification {
            criteria: self.criteria,
            order_keys: self.order_keys,
            includes: self.includes,
            paging: self.paging,
        }
    }
}

impl<T> Default for SpecBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
