//! HTTP application wiring (axum router + service wiring).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use passgate_auth::TokenService;
use passgate_identity::IdentityService;
use passgate_store::CredentialStore;

use crate::config::Config;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests). The store is injected so tests and production can wire
/// different backends.
pub fn build_app(config: &Config, store: Arc<dyn CredentialStore>) -> Router {
    let tokens = TokenService::new(config.jwt_secret.as_bytes());
    let identity = Arc::new(IdentityService::new(store, tokens));

    let auth_state = middleware::AuthState {
        identity: identity.clone(),
    };

    // Protected routes: bearer token required, identity resolved per request.
    let protected = routes::protected_router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Router::new()
        .merge(routes::public_router())
        .merge(protected)
        .layer(axum::Extension(identity))
        .layer(ServiceBuilder::new().layer(cors_layer(&config.allowed_origins)))
}

/// Cross-origin policy from the configured origin list. `*` (the dev default)
/// allows any origin; otherwise only the listed origins are offered, and an
/// entry that is not a valid header value is skipped with a warning.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let origins = allowed_origins.iter().filter_map(|origin| {
        match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparseable allowed origin");
                None
            }
        }
    });
    cors.allow_origin(AllowOrigin::list(origins))
}
