//! Role-membership guard.

use crate::error::AuthError;
use crate::role::Role;

/// Require that `role` is one of `allowed`.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
///
/// Composes in front of any handler needing role gating; returns
/// [`AuthError::Forbidden`] when the role is not a member.
pub fn require_role(role: Role, allowed: &[Role]) -> Result<(), AuthError> {
    if allowed.contains(&role) {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}
