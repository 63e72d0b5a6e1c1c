//! Company Administration Routes

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::core::ServerState;

/// Gated by the router-level admin middleware
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/companies", get(handler::list))
        .route("/api/admin/companies", post(handler::create))
        .route("/api/admin/companies/{id}", get(handler::get_by_id))
        .route("/api/admin/companies/{id}", put(handler::update))
        .route("/api/admin/companies/{id}", delete(handler::delete))
}
