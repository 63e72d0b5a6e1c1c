//! Guard-Facing Routes
//!
//! The field surface: no accounts, no tokens. A site PIN is the only
//! credential, and every denial comes back with a uniform message.
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /api/guard/pin | POST | PIN → site identity, pricing, budget status |
//! | /api/guard/tickets | POST | submit a ticket |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/guard/pin", post(handler::resolve_pin))
        .route("/api/guard/tickets", post(handler::submit_ticket))
}
