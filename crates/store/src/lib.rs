//! `passgate-store` — credential store adapter boundary.
//!
//! Defines the persistence interface the gateway core consumes, the record
//! types that cross it, and an in-memory reference implementation used by
//! tests and local development. Production backends implement
//! [`CredentialStore`] externally.

pub mod error;
pub mod memory;
pub mod records;
pub mod traits;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use records::{CompanyRecord, NewCompany, NewUser, UserRecord};
pub use traits::CredentialStore;
