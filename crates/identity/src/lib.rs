//! `passgate-identity` — registration, login, and identity resolution flows.
//!
//! Orchestrates the pure auth boundary (`passgate-auth`) against the
//! credential store (`passgate-store`). This is the application service
//! layer; HTTP mapping lives in `passgate-api`.

pub mod error;
pub mod service;
pub mod view;

pub use error::IdentityError;
pub use service::{AuthenticatedSession, DEFAULT_COMPANY_NAME, IdentityService, Registration};
pub use view::UserView;
