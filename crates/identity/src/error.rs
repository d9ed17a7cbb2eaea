//! Identity flow error taxonomy.
//!
//! Every variant is terminal for the request: no retries inside the core.
//! The transport layer maps variants to status codes; internal causes are
//! logged server-side and erased before reaching the wire.

use thiserror::Error;

use passgate_auth::AuthError;
use passgate_store::StoreError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// Malformed input shape, surfaced with per-field detail.
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// Role string outside the closed set.
    #[error("invalid role")]
    InvalidRole,

    /// Email already registered.
    #[error("email already registered")]
    DuplicateEmail,

    /// Mobile number already registered.
    #[error("mobile number already registered")]
    DuplicateMobile,

    /// Mobile number does not match `+?[0-9]{10,15}`.
    #[error("invalid mobile number format")]
    InvalidMobileFormat,

    /// Unknown identifier, wrong password, or rejected token.
    /// Deliberately indistinguishable.
    #[error("incorrect email/mobile or password")]
    InvalidCredentials,

    /// Password verified, but the account is deactivated.
    #[error("account is inactive")]
    AccountInactive,

    /// Authenticated but insufficient role.
    #[error("not enough permissions")]
    Forbidden,

    /// No bearer credential supplied at all (distinct from a rejected one).
    #[error("missing credentials")]
    Unauthenticated,

    /// Unexpected infrastructure failure; opaque to callers.
    #[error("internal error")]
    Internal(String),
}

impl IdentityError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<AuthError> for IdentityError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => IdentityError::InvalidCredentials,
            AuthError::Forbidden => IdentityError::Forbidden,
            AuthError::Crypto(msg) => IdentityError::Internal(msg),
        }
    }
}

impl From<StoreError> for IdentityError {
    fn from(err: StoreError) -> Self {
        IdentityError::Internal(err.to_string())
    }
}
