//! Closed role set for role-based access control.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role granted to a user at registration.
///
/// The set is closed: role strings are validated once at the boundary and an
/// unrecognized value stored alongside a user is treated as an
/// internal-consistency error, never an implicit grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Sales,
    Buyer,
}

/// A role string outside the closed set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid role: {0}")]
pub struct InvalidRole(pub String);

impl Role {
    /// Canonical string form, as stored and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Sales => "Sales",
            Role::Buyer => "Buyer",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Role {
    type Err = InvalidRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Sales" => Ok(Role::Sales),
            "Buyer" => Ok(Role::Buyer),
            other => Err(InvalidRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_strings_round_trip() {
        for role in [Role::Admin, Role::Sales, Role::Buyer] {
            let parsed: Role = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn role_matching_is_case_sensitive() {
        assert!("admin".parse::<Role>().is_err());
        assert!("ADMIN".parse::<Role>().is_err());
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = "Superuser".parse::<Role>().unwrap_err();
        assert_eq!(err.0, "Superuser");
    }

    #[test]
    fn serializes_as_canonical_string() {
        let json = serde_json::to_string(&Role::Buyer).unwrap();
        assert_eq!(json, "\"Buyer\"");
    }
}
