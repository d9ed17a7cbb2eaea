//! Dashboard statistics. Values are stubs until the order/product/vendor
//! modules land.

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::dto::DashboardStats;
use crate::context::CurrentUser;

/// GET /api/dashboard/stats — all-zero counters for the caller's company.
pub async fn stats(Extension(_user): Extension<CurrentUser>) -> axum::response::Response {
    (StatusCode::OK, Json(DashboardStats::default())).into_response()
}
