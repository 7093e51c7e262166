//! Error taxonomy shared by every Engram crate.
//!
//! Three categories cover the whole core: malformed input, missing
//! entities, and opaque failures of a backing store. Backends return
//! these synchronously; the coordinator never retries or compensates.

use thiserror::Error;

/// Result alias used throughout the workspace.
pub type EngramResult<T> = Result<T, EngramError>;

/// Unified error type for store and coordinator operations.
#[derive(Debug, Error)]
pub enum EngramError {
    /// Malformed input: a vector dimension mismatch, or an embedding
    /// referencing a memory id that was never created.
    #[error("validation: {message}")]
    Validation {
        /// Human-readable description of what failed to validate.
        message: String,
    },

    /// A referenced entity does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Kind of entity that was looked up (e.g. "memory").
        entity: String,
        /// The id that missed.
        id: String,
    },

    /// The backing store failed for reasons opaque to this core.
    ///
    /// Always preserves the underlying failure for diagnostics when one
    /// is available.
    #[error("backend: {message}")]
    Backend {
        /// What the store reported.
        message: String,
        /// The original failure, when the adapter had one to wrap.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl EngramError {
    /// Build a validation error from any displayable message.
    pub fn validation(message: impl Into<String>) -> Self {
        EngramError::Validation {
            message: message.into(),
        }
    }

    /// Build a not-found error for an entity kind and id.
    pub fn not_found(entity: impl Into<String>, id: impl std::fmt::Display) -> Self {
        EngramError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Build a backend error with no underlying cause.
    pub fn backend(message: impl Into<String>) -> Self {
        EngramError::Backend {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying failure reported by a backing store.
    pub fn backend_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        EngramError::Backend {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// True for the `Validation` variant.
    pub fn is_validation(&self) -> bool {
        matches!(self, EngramError::Validation { .. })
    }

    /// True for the `NotFound` variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EngramError::NotFound { .. })
    }

    /// True for the `Backend` variant.
    pub fn is_backend(&self) -> bool {
        matches!(self, EngramError::Backend { .. })
    }
}
