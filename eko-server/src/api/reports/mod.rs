//! Admin Reporting Routes

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Gated by the router-level admin middleware
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/reports/monthly", get(handler::monthly))
        .route("/api/admin/reports/monthly/export", get(handler::monthly_csv))
}
