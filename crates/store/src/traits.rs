//! Abstract credential store interface.
//!
//! All lookups are case-sensitive exact matches on the stored field. Each
//! operation is its own atomic unit at the store level; there is no
//! cross-operation transaction.

use async_trait::async_trait;

use passgate_core::{CompanyId, UserId};

use crate::error::StoreError;
use crate::records::{CompanyRecord, NewCompany, NewUser, UserRecord};

/// Persistence operations the gateway core needs.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    async fn find_user_by_mobile(&self, mobile: &str) -> Result<Option<UserRecord>, StoreError>;

    async fn find_user_by_id(&self, id: UserId) -> Result<Option<UserRecord>, StoreError>;

    /// Single-query OR semantics: matches `value` against either field.
    async fn find_user_by_email_or_mobile(
        &self,
        value: &str,
    ) -> Result<Option<UserRecord>, StoreError>;

    async fn insert_user(&self, user: NewUser) -> Result<UserRecord, StoreError>;

    async fn find_users_by_company(
        &self,
        company_id: CompanyId,
    ) -> Result<Vec<UserRecord>, StoreError>;

    async fn find_company_by_name(&self, name: &str)
    -> Result<Option<CompanyRecord>, StoreError>;

    async fn insert_company(&self, company: NewCompany) -> Result<CompanyRecord, StoreError>;
}
