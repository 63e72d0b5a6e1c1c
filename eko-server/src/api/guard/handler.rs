//! Guard API Handlers
//!
//! Thin wrappers over [`TicketService`]; the submission transaction
//! and its per-site serialization live there, not here.

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::utils::{AppResponse, AppResult, ok};
use shared::models::{PinRequest, PinResolution, SubmittedTicket, TicketSubmitRequest};

/// POST /api/guard/pin
pub async fn resolve_pin(
    State(state): State<ServerState>,
    Json(req): Json<PinRequest>,
) -> AppResult<Json<AppResponse<PinResolution>>> {
    let resolution = state.ticket_service().resolve_pin(&req.pin).await?;
    Ok(ok(resolution))
}

/// POST /api/guard/tickets
pub async fn submit_ticket(
    State(state): State<ServerState>,
    Json(req): Json<TicketSubmitRequest>,
) -> AppResult<Json<AppResponse<SubmittedTicket>>> {
    let submitted = state.ticket_service().submit(req).await?;
    Ok(ok(submitted))
}
