//! Request/response DTOs.

use serde::{Deserialize, Serialize};

use passgate_identity::{AuthenticatedSession, UserView};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub name: String,
    /// Validated against the closed role set by the registration flow, so an
    /// unknown value surfaces as `invalid_role` rather than a decode error.
    pub role: String,
    pub company_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email or mobile number.
    pub login: String,
    pub password: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: UserView,
}

impl From<AuthenticatedSession> for SessionResponse {
    fn from(session: AuthenticatedSession) -> Self {
        Self {
            access_token: session.access_token,
            token_type: "bearer",
            user: session.user,
        }
    }
}

/// Dashboard counters. All values are stubs until the order/product/vendor
/// modules land; the shape is stable for clients.
#[derive(Debug, Default, Serialize)]
pub struct DashboardStats {
    pub total_orders: u64,
    pub pending_orders: u64,
    pub completed_orders: u64,
    pub total_products: u64,
    pub low_stock_products: u64,
    pub total_vendors: u64,
    pub pending_payments: u64,
    pub total_revenue: f64,
}
