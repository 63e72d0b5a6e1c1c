//! Admin login handler

use std::time::Duration;

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::security_log;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models::{LoginRequest, LoginResponse};

/// Fixed delay on every attempt to blunt timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/login
///
/// Checks the configured admin credentials and issues a bearer token.
/// Failures share one message so usernames cannot be enumerated.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AppResponse<LoginResponse>>> {
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let config = &state.config;

    // An unset password disables admin login outright
    if config.admin_password.is_empty() {
        security_log!(
            "WARN",
            "login_disabled",
            username = req.username.clone()
        );
        return Err(AppError::invalid_credentials());
    }

    if req.username != config.admin_username || req.password != config.admin_password {
        security_log!("WARN", "login_failed", username = req.username.clone());
        tracing::warn!(username = %req.username, "Login failed");
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(&req.username)
        .map_err(|e| AppError::internal(format!("Token generation failed: {}", e)))?;

    security_log!("INFO", "login_success", username = req.username.clone());

    Ok(ok(LoginResponse {
        token,
        username: req.username,
        expires_in: config.jwt.expiration_minutes * 60,
    }))
}
