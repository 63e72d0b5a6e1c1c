//! Authentication middleware
//!
//! Bearer-token gate for the admin surface. Guard routes
//! (`/api/guard/*`), login, and the health probe stay public; guards
//! carry a site PIN instead of an identity.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::JwtService;
use crate::core::ServerState;
use crate::utils::AppError;
use crate::{auth::jwt::JwtError, security_log};

/// Require a valid admin token on `/api/admin/*` paths
pub async fn require_admin(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // CORS preflight skips auth
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Only the admin surface is gated
    if !path.starts_with("/api/admin") {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or(AppError::InvalidToken)?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::Unauthorized);
        }
    };

    match state.jwt_service.validate_token(token) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        Err(JwtError::ExpiredToken) => Err(AppError::TokenExpired),
        Err(e) => {
            security_log!("WARN", "auth_invalid", error = e.to_string());
            Err(AppError::InvalidToken)
        }
    }
}
