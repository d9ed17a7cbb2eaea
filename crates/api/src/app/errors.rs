//! Identity error → HTTP response mapping.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use passgate_identity::IdentityError;

/// Map an identity error to a JSON error response.
///
/// Internal causes are logged here and replaced with an opaque message; no
/// hash, token, or backend detail ever reaches the wire.
pub fn identity_error_to_response(err: IdentityError) -> axum::response::Response {
    match err {
        IdentityError::Validation { field, message } => json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            format!("{field}: {message}"),
        ),
        IdentityError::InvalidRole => {
            json_error(StatusCode::BAD_REQUEST, "invalid_role", "Invalid role")
        }
        IdentityError::DuplicateEmail => json_error(
            StatusCode::BAD_REQUEST,
            "duplicate_email",
            "Email already registered",
        ),
        IdentityError::DuplicateMobile => json_error(
            StatusCode::BAD_REQUEST,
            "duplicate_mobile",
            "Mobile number already registered",
        ),
        IdentityError::InvalidMobileFormat => json_error(
            StatusCode::BAD_REQUEST,
            "invalid_mobile_format",
            "Invalid mobile number format",
        ),
        IdentityError::InvalidCredentials => json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "Incorrect email/mobile or password",
        ),
        IdentityError::AccountInactive => json_error(
            StatusCode::FORBIDDEN,
            "account_inactive",
            "Account is inactive",
        ),
        IdentityError::Forbidden => json_error(
            StatusCode::FORBIDDEN,
            "forbidden",
            "Not enough permissions",
        ),
        IdentityError::Unauthenticated => json_error(
            StatusCode::UNAUTHORIZED,
            "unauthenticated",
            "Missing credentials",
        ),
        IdentityError::Internal(cause) => {
            tracing::error!(%cause, "internal error while handling request");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error",
            )
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
