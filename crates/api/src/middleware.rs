//! Bearer authentication middleware.
//!
//! Extracts the `Authorization: Bearer` credential, validates the token, and
//! resolves the subject fresh from the store before any protected handler
//! runs. A missing or unparseable header is `unauthenticated`; a supplied but
//! rejected credential maps through the identity error taxonomy.

use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use passgate_identity::{IdentityError, IdentityService};

use crate::app::errors::identity_error_to_response;
use crate::context::CurrentUser;

#[derive(Clone)]
pub struct AuthState {
    pub identity: Arc<IdentityService>,
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let token = match extract_bearer(req.headers()) {
        Ok(token) => token.to_string(),
        Err(err) => return identity_error_to_response(err),
    };

    let user = match state.identity.authenticate(&token).await {
        Ok(user) => user,
        Err(err) => return identity_error_to_response(err),
    };

    req.extensions_mut().insert(CurrentUser::new(user));
    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, IdentityError> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(IdentityError::Unauthenticated)?;

    let header = header
        .to_str()
        .map_err(|_| IdentityError::Unauthenticated)?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or(IdentityError::Unauthenticated)?;

    let token = header.trim();
    if token.is_empty() {
        return Err(IdentityError::Unauthenticated);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_str(value).unwrap(),
        );
        headers
    }

    #[test]
    fn missing_header_is_unauthenticated() {
        let err = extract_bearer(&HeaderMap::new()).unwrap_err();
        assert_eq!(err, IdentityError::Unauthenticated);
    }

    #[test]
    fn non_bearer_scheme_is_unauthenticated() {
        let headers = headers_with("Basic dXNlcjpwdw==");
        assert_eq!(
            extract_bearer(&headers).unwrap_err(),
            IdentityError::Unauthenticated
        );
    }

    #[test]
    fn empty_bearer_value_is_unauthenticated() {
        let headers = headers_with("Bearer   ");
        assert_eq!(
            extract_bearer(&headers).unwrap_err(),
            IdentityError::Unauthenticated
        );
    }

    #[test]
    fn bearer_token_is_extracted_and_trimmed() {
        let headers = headers_with("Bearer  abc.def.ghi ");
        assert_eq!(extract_bearer(&headers).unwrap(), "abc.def.ghi");
    }
}
