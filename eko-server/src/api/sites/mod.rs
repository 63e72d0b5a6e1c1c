//! Site Administration Routes
//!
//! Sites carry the guard-facing PIN, the pricing table and the
//! optional budget. Budget usage is a derived read over the ticket
//! ledger.

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::core::ServerState;

/// Gated by the router-level admin middleware
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/sites", get(handler::list))
        .route("/api/admin/sites", post(handler::create))
        .route("/api/admin/sites/{id}", get(handler::get_by_id))
        .route("/api/admin/sites/{id}", put(handler::update))
        .route("/api/admin/sites/{id}", delete(handler::delete))
        .route("/api/admin/sites/{id}/budget-usage", get(handler::budget_usage))
}
