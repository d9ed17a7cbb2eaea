//! In-memory credential store for tests and local development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use passgate_core::{CompanyId, UserId};

use crate::error::StoreError;
use crate::records::{CompanyRecord, NewCompany, NewUser, UserRecord};
use crate::traits::CredentialStore;

/// `RwLock`-guarded maps keyed by id. Locks are held only for the duration of
/// a synchronous map operation, never across an await point.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<UserId, UserRecord>>,
    companies: RwLock<HashMap<CompanyId, CompanyRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_users(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<UserId, UserRecord>>, StoreError> {
        self.users
            .read()
            .map_err(|_| StoreError::backend("user map lock poisoned"))
    }

    fn read_companies(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<CompanyId, CompanyRecord>>, StoreError> {
        self.companies
            .read()
            .map_err(|_| StoreError::backend("company map lock poisoned"))
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.read_users()?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_mobile(&self, mobile: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.read_users()?;
        Ok(users.values().find(|u| u.mobile == mobile).cloned())
    }

    async fn find_user_by_id(&self, id: UserId) -> Result<Option<UserRecord>, StoreError> {
        let users = self.read_users()?;
        Ok(users.get(&id).cloned())
    }

    async fn find_user_by_email_or_mobile(
        &self,
        value: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        let users = self.read_users()?;
        Ok(users
            .values()
            .find(|u| u.email == value || u.mobile == value)
            .cloned())
    }

    async fn insert_user(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let record = UserRecord {
            id: UserId::new(),
            email: user.email,
            mobile: user.mobile,
            password_hash: user.password_hash,
            name: user.name,
            role: user.role,
            company_id: user.company_id,
            company_name: user.company_name,
            is_active: true,
            created_at: Utc::now(),
        };

        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::backend("user map lock poisoned"))?;
        users.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_users_by_company(
        &self,
        company_id: CompanyId,
    ) -> Result<Vec<UserRecord>, StoreError> {
        let users = self.read_users()?;
        let mut matches: Vec<UserRecord> = users
            .values()
            .filter(|u| u.company_id == company_id)
            .cloned()
            .collect();
        // Stable output order for callers and tests (ids are time-ordered).
        matches.sort_by_key(|u| u.id.as_uuid().as_bytes().to_owned());
        Ok(matches)
    }

    async fn find_company_by_name(
        &self,
        name: &str,
    ) -> Result<Option<CompanyRecord>, StoreError> {
        let companies = self.read_companies()?;
        Ok(companies.values().find(|c| c.name == name).cloned())
    }

    async fn insert_company(&self, company: NewCompany) -> Result<CompanyRecord, StoreError> {
        let record = CompanyRecord {
            id: CompanyId::new(),
            name: company.name,
            created_at: Utc::now(),
        };

        let mut companies = self
            .companies
            .write()
            .map_err(|_| StoreError::backend("company map lock poisoned"))?;
        companies.insert(record.id, record.clone());
        Ok(record)
    }
}

/// Test helper: flip a user's active flag in place.
///
/// Administrative deactivation flows are out of scope for the gateway core,
/// but tests need to exercise the inactive-account paths.
impl MemoryStore {
    pub fn set_active(&self, id: UserId, is_active: bool) -> Result<(), StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::backend("user map lock poisoned"))?;
        match users.get_mut(&id) {
            Some(user) => {
                user.is_active = is_active;
                Ok(())
            }
            None => Err(StoreError::backend("no such user")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passgate_auth::Role;

    fn new_user(email: &str, mobile: &str, company_id: CompanyId) -> NewUser {
        NewUser {
            email: email.to_string(),
            mobile: mobile.to_string(),
            password_hash: "$argon2id$stub".to_string(),
            name: "Test User".to_string(),
            role: Role::Buyer,
            company_id,
            company_name: "Acme".to_string(),
        }
    }

    #[tokio::test]
    async fn inserted_user_is_findable_by_every_key() {
        let store = MemoryStore::new();
        let company = store
            .insert_company(NewCompany {
                name: "Acme".to_string(),
            })
            .await
            .unwrap();

        let record = store
            .insert_user(new_user("a@x.com", "+19995550000", company.id))
            .await
            .unwrap();

        assert!(record.is_active);
        assert_eq!(
            store.find_user_by_id(record.id).await.unwrap().unwrap().id,
            record.id
        );
        assert_eq!(
            store
                .find_user_by_email("a@x.com")
                .await
                .unwrap()
                .unwrap()
                .id,
            record.id
        );
        assert_eq!(
            store
                .find_user_by_mobile("+19995550000")
                .await
                .unwrap()
                .unwrap()
                .id,
            record.id
        );
    }

    #[tokio::test]
    async fn email_or_mobile_lookup_matches_either_field() {
        let store = MemoryStore::new();
        let company = store
            .insert_company(NewCompany {
                name: "Acme".to_string(),
            })
            .await
            .unwrap();
        let record = store
            .insert_user(new_user("a@x.com", "+19995550000", company.id))
            .await
            .unwrap();

        for key in ["a@x.com", "+19995550000"] {
            let found = store.find_user_by_email_or_mobile(key).await.unwrap();
            assert_eq!(found.unwrap().id, record.id);
        }
        assert!(store
            .find_user_by_email_or_mobile("b@x.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn lookups_are_case_sensitive() {
        let store = MemoryStore::new();
        let company = store
            .insert_company(NewCompany {
                name: "Acme".to_string(),
            })
            .await
            .unwrap();
        store
            .insert_user(new_user("a@x.com", "+19995550000", company.id))
            .await
            .unwrap();

        assert!(store.find_user_by_email("A@X.COM").await.unwrap().is_none());
        assert!(store.find_company_by_name("acme").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn company_listing_is_scoped_to_the_company_id() {
        let store = MemoryStore::new();
        let acme = store
            .insert_company(NewCompany {
                name: "Acme".to_string(),
            })
            .await
            .unwrap();
        let rival = store
            .insert_company(NewCompany {
                name: "Rival".to_string(),
            })
            .await
            .unwrap();

        store
            .insert_user(new_user("a@x.com", "+19995550000", acme.id))
            .await
            .unwrap();
        store
            .insert_user(new_user("b@x.com", "+19995550001", acme.id))
            .await
            .unwrap();
        store
            .insert_user(new_user("c@x.com", "+19995550002", rival.id))
            .await
            .unwrap();

        let acme_users = store.find_users_by_company(acme.id).await.unwrap();
        assert_eq!(acme_users.len(), 2);
        assert!(acme_users.iter().all(|u| u.company_id == acme.id));
    }
}
