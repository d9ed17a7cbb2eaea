//! Registration, login, and token-to-identity resolution.

use std::sync::Arc;

use passgate_auth::{Role, TokenService, hash_password, require_role, verify_password};
use passgate_core::UserId;
use passgate_store::{CredentialStore, NewCompany, NewUser, UserRecord};

use crate::error::IdentityError;
use crate::view::UserView;

/// Company name used when a registration supplies none.
pub const DEFAULT_COMPANY_NAME: &str = "Default Company";

/// Registration input. `role` arrives as a raw string and is validated
/// against the closed set inside [`IdentityService::register`].
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub name: String,
    pub role: String,
    pub company_name: Option<String>,
}

/// Outcome of a successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub access_token: String,
    pub user: UserView,
}

/// Orchestrates credential verification, token issuance, and role-gated,
/// tenant-scoped access. Shared state is read-only after construction.
#[derive(Clone)]
pub struct IdentityService {
    store: Arc<dyn CredentialStore>,
    tokens: TokenService,
}

impl IdentityService {
    pub fn new(store: Arc<dyn CredentialStore>, tokens: TokenService) -> Self {
        Self { store, tokens }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Registration
    // ─────────────────────────────────────────────────────────────────────

    /// Register a new user, creating their company on first reference.
    ///
    /// Validation is fail-fast in a fixed order: field shapes, role, email
    /// uniqueness, mobile uniqueness, mobile format. Exactly one user record
    /// and at most one company record are created per successful call.
    pub async fn register(
        &self,
        registration: Registration,
    ) -> Result<AuthenticatedSession, IdentityError> {
        if !is_valid_email(&registration.email) {
            return Err(IdentityError::validation("email", "invalid email address"));
        }

        let role: Role = registration
            .role
            .parse()
            .map_err(|_| IdentityError::InvalidRole)?;

        if self
            .store
            .find_user_by_email(&registration.email)
            .await?
            .is_some()
        {
            return Err(IdentityError::DuplicateEmail);
        }

        let mobile = normalize_mobile(&registration.mobile);
        if self.store.find_user_by_mobile(&mobile).await?.is_some() {
            return Err(IdentityError::DuplicateMobile);
        }

        if !is_valid_mobile(&mobile) {
            return Err(IdentityError::InvalidMobileFormat);
        }

        let company_name = registration
            .company_name
            .unwrap_or_else(|| DEFAULT_COMPANY_NAME.to_string());
        let company = self.find_or_create_company(&company_name).await?;

        // CPU-bound; keep it off the I/O scheduler.
        let password = registration.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| IdentityError::internal(format!("hashing task failed: {e}")))?
            .map_err(IdentityError::from)?;

        let user = self
            .store
            .insert_user(NewUser {
                email: registration.email,
                mobile,
                password_hash,
                name: registration.name,
                role,
                company_id: company.id,
                company_name: company.name,
            })
            .await?;

        tracing::info!(user_id = %user.id, company_id = %user.company_id, "user registered");
        self.issue_session(&user)
    }

    /// Look up the company by name, inserting it when absent.
    ///
    /// Lookup-then-insert is not atomic across calls: two concurrent
    /// registrations racing on a brand-new name can create two rows with the
    /// same name. First writer wins for all later registrations.
    async fn find_or_create_company(
        &self,
        name: &str,
    ) -> Result<passgate_store::CompanyRecord, IdentityError> {
        if let Some(existing) = self.store.find_company_by_name(name).await? {
            return Ok(existing);
        }

        let created = self
            .store
            .insert_company(NewCompany {
                name: name.to_string(),
            })
            .await?;
        tracing::info!(company_id = %created.id, "company created");
        Ok(created)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Login
    // ─────────────────────────────────────────────────────────────────────

    /// Authenticate by email or mobile plus password.
    ///
    /// Unknown identifier and wrong password yield the identical
    /// [`IdentityError::InvalidCredentials`]; the inactive-account check runs
    /// only after the password has verified, so its more specific status
    /// leaks nothing about credentials.
    pub async fn login(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<AuthenticatedSession, IdentityError> {
        let user = self
            .store
            .find_user_by_email_or_mobile(identifier)
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        let stored_hash = user.password_hash.clone();
        let password = password.to_string();
        let verified =
            tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
                .await
                .map_err(|e| IdentityError::internal(format!("verify task failed: {e}")))?;

        if !verified {
            return Err(IdentityError::InvalidCredentials);
        }

        if !user.is_active {
            return Err(IdentityError::AccountInactive);
        }

        tracing::info!(user_id = %user.id, "login succeeded");
        self.issue_session(&user)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Resolution
    // ─────────────────────────────────────────────────────────────────────

    /// Validate a bearer token and load its subject fresh from the store.
    ///
    /// Deactivated users still resolve here: token validity is purely
    /// time-based, so a prior session stays authenticated until expiry. Only
    /// login checks the active flag.
    pub async fn authenticate(&self, token: &str) -> Result<UserRecord, IdentityError> {
        let subject = self.tokens.validate(token)?;
        self.resolve(subject).await
    }

    /// Load a user by token subject. A missing record is indistinguishable
    /// from a malformed subject to prevent enumeration via error shape.
    pub async fn resolve(&self, subject: UserId) -> Result<UserRecord, IdentityError> {
        self.store
            .find_user_by_id(subject)
            .await?
            .ok_or(IdentityError::InvalidCredentials)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tenant-scoped listing
    // ─────────────────────────────────────────────────────────────────────

    /// List all users sharing the caller's company. Admin only.
    pub async fn list_company_users(
        &self,
        actor: &UserRecord,
    ) -> Result<Vec<UserView>, IdentityError> {
        require_role(actor.role, &[Role::Admin])?;

        let users = self.store.find_users_by_company(actor.company_id).await?;
        Ok(users.iter().map(UserView::from).collect())
    }

    fn issue_session(&self, user: &UserRecord) -> Result<AuthenticatedSession, IdentityError> {
        let access_token = self
            .tokens
            .issue(user.id, Some(passgate_auth::session_ttl()))?;
        Ok(AuthenticatedSession {
            access_token,
            user: UserView::from(user),
        })
    }
}

/// Strip internal whitespace before format matching.
fn normalize_mobile(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Optional leading `+`, then 10–15 digits.
fn is_valid_mobile(mobile: &str) -> bool {
    let digits = mobile.strip_prefix('+').unwrap_or(mobile);
    (10..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

/// Minimal syntactic check: one `@`, non-empty local part, dotted domain.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
        && !domain.contains('@')
}
