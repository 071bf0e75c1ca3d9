//! Typed error handling for catalog queries
//!
//! Three kinds of failure leave this crate, and they are never conflated:
//!
//! - [`CatalogError::NotFound`]: a single-entity lookup matched zero rows.
//!   This is a first-class, recoverable outcome — callers match on it, they
//!   do not inspect a null placeholder.
//! - [`CatalogError::InvalidParameters`]: input that has no safe default.
//!   Builders clamp everything that can be clamped (page index, page size,
//!   unknown sort tokens), so only genuinely unrecoverable input — such as a
//!   non-positive id filter — surfaces here.
//! - [`CatalogError::Store`]: the underlying store failed during evaluation
//!   or materialization. Always propagated, never retried or masked here;
//!   retry policy belongs to the caller.

use thiserror::Error;

/// The main error type for catalog read operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A single-entity lookup found zero matching rows
    #[error("{}", not_found_message(.resource, .id))]
    NotFound {
        resource: &'static str,
        id: Option<i64>,
    },

    /// Caller-supplied parameters that cannot be normalized to a safe default
    #[error("invalid parameters: {message}")]
    InvalidParameters { message: String },

    /// The storage backend failed; distinct from NotFound by construction
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn not_found_message(resource: &str, id: &Option<i64>) -> String {
    match id {
        Some(id) => format!("{resource} with id '{id}' not found"),
        None => format!("{resource} matching the specification not found"),
    }
}

impl CatalogError {
    /// Shorthand for the NotFound outcome of an id lookup
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        CatalogError::NotFound {
            resource,
            id: Some(id),
        }
    }

    /// Shorthand for rejecting unrecoverable input
    pub fn invalid(message: impl Into<String>) -> Self {
        CatalogError::InvalidParameters {
            message: message.into(),
        }
    }
}

/// Errors raised by storage backends
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend failed while reading or materializing rows
    #[error("{backend} backend error: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },

    /// A specification asked for a navigation path this store cannot attach
    #[error("unknown include path '{path}' for {resource}")]
    UnknownInclude {
        resource: &'static str,
        path: String,
    },

    /// The caller's request scope was cancelled before the store call finished
    #[error("operation cancelled before completion")]
    Cancelled,
}

/// A specialized Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = CatalogError::not_found("products", 42);
        assert!(err.to_string().contains("products"));
        assert!(err.to_string().contains("42"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_invalid_parameters_display() {
        let err = CatalogError::invalid("brand_id must be positive");
        assert!(err.to_string().contains("brand_id must be positive"));
    }

    #[test]
    fn test_store_error_conversion() {
        let store_err = StoreError::Backend {
            backend: "in-memory",
            message: "lock poisoned".to_string(),
        };
        let err: CatalogError = store_err.into();
        assert!(matches!(err, CatalogError::Store(_)));
        assert!(err.to_string().contains("in-memory"));
    }

    #[test]
    fn test_unknown_include_display() {
        let err = StoreError::UnknownInclude {
            resource: "products",
            path: "warehouse".to_string(),
        };
        assert!(err.to_string().contains("warehouse"));
        assert!(err.to_string().contains("products"));
    }

    #[test]
    fn test_not_found_is_distinct_from_store_failure() {
        let not_found = CatalogError::not_found("products", 1);
        let store = CatalogError::Store(StoreError::Cancelled);
        assert!(matches!(not_found, CatalogError::NotFound { .. }));
        assert!(!matches!(store, CatalogError::NotFound { .. }));
    }
}
