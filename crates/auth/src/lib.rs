//! `passgate-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: password
//! hashing, token issuance/validation, the closed role set, and the
//! role-membership guard. Identity resolution against the credential store
//! lives one layer up, in `passgate-identity`.

pub mod error;
pub mod guard;
pub mod password;
pub mod role;
pub mod token;

pub use error::AuthError;
pub use guard::require_role;
pub use password::{hash_password, verify_password};
pub use role::{InvalidRole, Role};
pub use token::{TokenService, session_ttl};
