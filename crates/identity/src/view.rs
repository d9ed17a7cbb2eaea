//! Public projection of a user record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use passgate_auth::Role;
use passgate_core::{CompanyId, UserId};
use passgate_store::UserRecord;

/// What callers see of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: UserId,
    pub email: String,
    pub mobile: String,
    pub name: String,
    pub role: Role,
    pub company_id: CompanyId,
    pub company_name: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<&UserRecord> for UserView {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            email: record.email.clone(),
            mobile: record.mobile.clone(),
            name: record.name.clone(),
            role: record.role,
            company_id: record.company_id,
            company_name: record.company_name.clone(),
            created_at: record.created_at,
            is_active: record.is_active,
        }
    }
}
