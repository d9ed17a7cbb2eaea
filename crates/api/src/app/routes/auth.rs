//! Registration, login, and self-view handlers.

use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use passgate_identity::{IdentityService, Registration, UserView};

use crate::app::dto::{LoginRequest, RegisterRequest, SessionResponse};
use crate::app::errors::identity_error_to_response;
use crate::context::CurrentUser;

pub async fn register(
    Extension(identity): Extension<Arc<IdentityService>>,
    Json(body): Json<RegisterRequest>,
) -> axum::response::Response {
    let registration = Registration {
        email: body.email,
        mobile: body.mobile,
        password: body.password,
        name: body.name,
        role: body.role,
        company_name: body.company_name,
    };

    match identity.register(registration).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(session))).into_response(),
        Err(err) => identity_error_to_response(err),
    }
}

pub async fn login(
    Extension(identity): Extension<Arc<IdentityService>>,
    Json(body): Json<LoginRequest>,
) -> axum::response::Response {
    match identity.login(&body.login, &body.password).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(session))).into_response(),
        Err(err) => identity_error_to_response(err),
    }
}

/// GET /api/auth/me — project the authenticated identity.
pub async fn me(Extension(user): Extension<CurrentUser>) -> axum::response::Response {
    (StatusCode::OK, Json(UserView::from(user.record()))).into_response()
}
