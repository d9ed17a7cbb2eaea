//! Bearer token issuance and validation (HS256 JWT).
//!
//! Tokens are stateless: a signed `{sub, exp}` claim set, verified purely by
//! signature and expiry. There is no revocation list; expiry requires
//! re-login.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use passgate_core::UserId;

use crate::error::AuthError;

/// Session lifetime granted at login/registration: 7 days.
pub fn session_ttl() -> Duration {
    Duration::days(7)
}

/// Fallback lifetime when a caller issues a token without an explicit TTL.
fn fallback_ttl() -> Duration {
    Duration::minutes(15)
}

/// Claims embedded in every issued token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject: the user id, as a UUID string.
    sub: String,
    /// Expiry, seconds since the Unix epoch.
    exp: i64,
}

/// Issues and validates signed, time-bound bearer tokens.
///
/// Holds the process-wide symmetric signing key; read-only after startup.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a token for `subject`, valid for `ttl` (15 minutes when `None`).
    pub fn issue(&self, subject: UserId, ttl: Option<Duration>) -> Result<String, AuthError> {
        let expires_at = Utc::now() + ttl.unwrap_or_else(fallback_ttl);
        let claims = Claims {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Crypto(format!("token encoding failed: {e}")))
    }

    /// Verify signature and expiry, returning the subject id.
    ///
    /// Invalid signature, unparseable structure, missing or malformed subject
    /// claim, and expiry all collapse to [`AuthError::InvalidCredentials`].
    pub fn validate(&self, token: &str) -> Result<UserId, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|e| {
                tracing::debug!(cause = %e, "token rejected");
                AuthError::InvalidCredentials
            })?;

        data.claims.sub.parse::<UserId>().map_err(|e| {
            tracing::debug!(cause = %e, "token subject rejected");
            AuthError::InvalidCredentials
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str) -> TokenService {
        TokenService::new(secret.as_bytes())
    }

    #[test]
    fn issued_token_validates_to_its_subject() {
        let svc = service("test-secret");
        let subject = UserId::new();

        let token = svc.issue(subject, Some(session_ttl())).unwrap();
        assert_eq!(svc.validate(&token).unwrap(), subject);
    }

    #[test]
    fn fallback_ttl_applies_without_explicit_ttl() {
        let svc = service("test-secret");
        let token = svc.issue(UserId::new(), None).unwrap();
        // Still valid now; the 15-minute window has not elapsed.
        assert!(svc.validate(&token).is_ok());
    }

    #[test]
    fn expired_token_is_rejected() {
        let svc = service("test-secret");
        let token = svc
            .issue(UserId::new(), Some(Duration::seconds(-120)))
            .unwrap();

        assert_eq!(svc.validate(&token).unwrap_err(), AuthError::InvalidCredentials);
    }

    #[test]
    fn tampered_token_is_rejected_with_same_error_as_expired() {
        let svc = service("test-secret");
        let token = svc.issue(UserId::new(), Some(session_ttl())).unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push('x');

        assert_eq!(svc.validate(&tampered).unwrap_err(), AuthError::InvalidCredentials);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = service("secret-a");
        let verifier = service("secret-b");

        let token = issuer.issue(UserId::new(), Some(session_ttl())).unwrap();
        assert_eq!(
            verifier.validate(&token).unwrap_err(),
            AuthError::InvalidCredentials
        );
    }

    #[test]
    fn garbage_token_is_rejected() {
        let svc = service("test-secret");
        assert_eq!(
            svc.validate("not.a.jwt").unwrap_err(),
            AuthError::InvalidCredentials
        );
    }

    #[test]
    fn non_uuid_subject_is_rejected() {
        // Mint a structurally valid token whose sub is not a valid store key.
        #[derive(Serialize)]
        struct BadClaims {
            sub: String,
            exp: i64,
        }

        let claims = BadClaims {
            sub: "definitely-not-a-uuid".to_string(),
            exp: (Utc::now() + Duration::minutes(10)).timestamp(),
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let svc = service("test-secret");
        assert_eq!(svc.validate(&token).unwrap_err(), AuthError::InvalidCredentials);
    }
}
