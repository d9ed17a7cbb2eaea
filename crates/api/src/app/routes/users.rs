//! Tenant-scoped user management. Admin only.

use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use passgate_identity::IdentityService;

use crate::app::errors::identity_error_to_response;
use crate::context::CurrentUser;

/// GET /api/users — all users sharing the caller's company.
pub async fn list_users(
    Extension(identity): Extension<Arc<IdentityService>>,
    Extension(user): Extension<CurrentUser>,
) -> axum::response::Response {
    match identity.list_company_users(user.record()).await {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(err) => identity_error_to_response(err),
    }
}
