//! Record types crossing the store boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use passgate_auth::Role;
use passgate_core::{CompanyId, UserId};

/// Persisted user identity record.
///
/// # Invariants
/// - `email` and `mobile` are each globally unique across all users
///   (enforced by the registration flow, exact-match lookups here).
/// - `password_hash` never leaves the process in serialized form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub mobile: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub role: Role,
    pub company_id: CompanyId,
    /// Denormalized from the company record at registration time.
    pub company_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for inserting a new user. The store assigns the id and timestamp.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub mobile: String,
    pub password_hash: String,
    pub name: String,
    pub role: Role,
    pub company_id: CompanyId,
    pub company_name: String,
}

/// Persisted tenant record.
///
/// `name` is the natural dedup key: first writer wins, no uniqueness index
/// beyond the registration flow's find-or-create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub id: CompanyId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Input for inserting a new company.
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_never_serialized() {
        let record = UserRecord {
            id: UserId::new(),
            email: "a@x.com".to_string(),
            mobile: "+19995550000".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            name: "Ann".to_string(),
            role: Role::Buyer,
            company_id: CompanyId::new(),
            company_name: "Acme".to_string(),
            is_active: true,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2"));
    }
}
