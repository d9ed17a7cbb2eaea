//! Routing tree. All routes live under the `/api` prefix.

use axum::{
    Router,
    routing::{get, post},
};

pub mod auth;
pub mod dashboard;
pub mod system;
pub mod users;

/// Routes reachable without a bearer token.
pub fn public_router() -> Router {
    Router::new()
        .route("/api/", get(system::root))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
}

/// Routes behind the bearer-auth middleware.
pub fn protected_router() -> Router {
    Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/dashboard/stats", get(dashboard::stats))
        .route("/api/users", get(users::list_users))
}
