//! Store adapter error model.

use thiserror::Error;

/// Error from a credential store backend.
///
/// Deliberately opaque: callers treat any store failure as an internal error
/// and never surface backend details to clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend failed (connection, query, serialization, ...).
    #[error("store backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
