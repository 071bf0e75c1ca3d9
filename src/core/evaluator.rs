//! Specification evaluation in a fixed stage order
//!
//! The evaluator is the one place that turns a [`Specification`] into rows.
//! Stages always apply in the same order — includes, criteria, ordering,
//! paging — so combined filter+sort+page semantics match what a relational
//! engine would produce. Varying that order is not an option: paging before
//! sorting, or sorting before filtering, silently changes which rows come
//! back.
//!
//! An empty result is a value, not an error; nothing at this layer fails
//! except the store itself.

use crate::core::entity::Entity;
use crate::core::error::StoreError;
use crate::core::spec::{Direction, Specification};
use crate::core::store::EntityStore;
use std::cmp::Ordering;

/// Run the full pipeline: scan, attach includes, filter, sort, page.
///
/// Includes are attached first, unconditionally, so a predicate or order key
/// over attached data sees it populated. Builders are responsible for not
/// producing specifications where that matters across backends.
pub async fn evaluate<T, S>(store: &S, spec: &Specification<T>) -> Result<Vec<T>, StoreError>
where
    T: Entity,
    S: EntityStore<T> + ?Sized,
{
    let mut rows = store.scan().await?;
    for path in spec.includes() {
        store.attach(path, &mut rows).await?;
    }
    Ok(refine(rows, spec))
}

/// Count matching rows: scan and filter only.
///
/// Counting never attaches includes, never sorts and never pages — paying
/// for relations or ordering to produce a cardinality is exactly what the
/// count path exists to avoid.
pub async fn count<T, S>(store: &S, spec: &Specification<T>) -> Result<usize, StoreError>
where
    T: Entity,
    S: EntityStore<T> + ?Sized,
{
    let rows = store.scan().await?;
    Ok(rows.iter().filter(|row| spec.matches(row)).count())
}

/// The pure tail of the pipeline: criteria, ordering, paging.
///
/// Split out so the stage order is testable without a store.
pub(crate) fn refine<T: Entity>(rows: Vec<T>, spec: &Specification<T>) -> Vec<T> {
    let mut rows: Vec<T> = rows.into_iter().filter(|row| spec.matches(row)).collect();

    if !spec.order_keys().is_empty() {
        // sort_by is stable, so ties under the whole key sequence keep the
        // store's natural order
        rows.sort_by(|a, b| compare(spec, a, b));
    }

    if let Some(paging) = spec.paging() {
        rows = rows
            .into_iter()
            .skip(paging.skip)
            .take(paging.take)
            .collect();
    }

    rows
}

fn compare<T: Entity>(spec: &Specification<T>, a: &T, b: &T) -> Ordering {
    for key in spec.order_keys() {
        let ordering = key.key_of(a).cmp(&key.key_of(b));
        let ordering = match key.direction() {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
