//! Admin Authentication Routes
//!
//! Login only. There is a single admin identity configured through
//! the environment; guards never log in.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// `/api/auth/login` is public; everything under `/api/admin` is
/// gated by the router-level `require_admin` middleware.
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/auth/login", post(handler::login))
}
