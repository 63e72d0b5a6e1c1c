//! Admin Ticket Routes
//!
//! Read-only: tickets are append-only and only ever created through
//! the guard surface.
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /api/admin/tickets | GET | filtered listing |
//! | /api/admin/tickets/export | GET | same filters, CSV download |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Gated by the router-level admin middleware
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/tickets", get(handler::list))
        .route("/api/admin/tickets/export", get(handler::export_csv))
}
