//! Unified error handling
//!
//! Application error enum and API response structure:
//! - [`AppError`] - application error enum
//! - [`AppResponse`] - API response wrapper
//!
//! # Guard-facing surface
//!
//! Two invariants protect field-facing responses:
//! - An unknown PIN is never distinguishable from other denial causes.
//! - All budget denials carry one uniform message; the sub-reason is
//!   only emitted to the admin diagnostic log.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shared::models::DenyReason;
use tracing::{error, warn};

/// Uniform guard-facing message for a PIN that resolves to nothing
const MSG_INVALID_PIN: &str = "Invalid PIN. Please check with your supervisor.";

/// Uniform guard-facing message for every budget denial sub-reason
const MSG_BUDGET_DENIED: &str =
    "This site's allocation is not currently active or has been used. Please contact your manager.";

/// API response wrapper
///
/// ```json
/// { "success": true, "data": { ... } }
/// { "success": false, "error": "message" }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct AppResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Authentication errors (401) ==========
    #[error("Authentication required")]
    Unauthorized,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    // ========== Business errors (4xx) ==========
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource already exists: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Budget denied the spend. The reason stays internal.
    #[error("Budget denied: {reason:?}")]
    BudgetDenied { reason: DenyReason },

    // ========== System errors (5xx) ==========
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired".to_string()),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token".to_string()),

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            AppError::BudgetDenied { reason } => {
                // Sub-reason for admin diagnostics only
                warn!(target: "budget", reason = ?reason, "Budget denied a submission");
                (StatusCode::FORBIDDEN, MSG_BUDGET_DENIED.to_string())
            }

            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(AppResponse::<()> {
            success: false,
            data: None,
            error: Some(message),
        });

        (status, body).into_response()
    }
}

impl From<crate::db::repository::RepoError> for AppError {
    fn from(e: crate::db::repository::RepoError) -> Self {
        use crate::db::repository::RepoError;
        match e {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Unknown PIN, surfaced with the uniform guard-facing message.
    /// Deliberately a `NotFound` internally but indistinguishable from
    /// other causes on the wire.
    pub fn invalid_pin() -> Self {
        Self::NotFound(MSG_INVALID_PIN.to_string())
    }

    pub fn budget_denied(reason: DenyReason) -> Self {
        Self::BudgetDenied { reason }
    }

    /// Unified login failure message, prevents username enumeration
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized
    }
}

// ========== Helper functions ==========

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<AppResponse<T>> {
    Json(AppResponse {
        success: true,
        data: Some(data),
        error: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(err: AppError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_budget_denials_share_one_wire_message() {
        let reasons = [
            DenyReason::Inactive,
            DenyReason::OutOfWindow,
            DenyReason::Insufficient,
        ];
        for reason in reasons {
            let (status, body) = body_text(AppError::budget_denied(reason)).await;
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert!(body.contains(MSG_BUDGET_DENIED));
            // No sub-reason on the wire, in any casing
            let lower = body.to_lowercase();
            assert!(!lower.contains("inactive"));
            assert!(!lower.contains("window"));
            assert!(!lower.contains("insufficient"));
        }
    }

    #[tokio::test]
    async fn test_invalid_pin_message_names_no_cause() {
        let (status, body) = body_text(AppError::invalid_pin()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains(MSG_INVALID_PIN));
        assert!(!body.to_lowercase().contains("not found"));
    }
}
