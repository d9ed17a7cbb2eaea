//! Auth boundary error model.

use thiserror::Error;

/// Error produced by the pure auth boundary.
///
/// Token failures deliberately collapse into [`AuthError::InvalidCredentials`]
/// so a caller cannot tell a bad signature from an expired or malformed token.
/// The specific cause is traced server-side before erasure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Credential was supplied but rejected (bad token, wrong password,
    /// unknown identifier). Indistinguishable by design.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Authenticated, but the role does not permit the operation.
    #[error("not enough permissions")]
    Forbidden,

    /// A cryptographic primitive failed (e.g. hashing setup).
    ///
    /// Never surfaced to callers verbatim; the transport layer maps this to
    /// an opaque internal error.
    #[error("crypto failure: {0}")]
    Crypto(String),
}
