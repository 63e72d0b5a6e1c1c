//! Admin Ticket Handlers

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::api::convert::millis_to_datetime;
use crate::core::ServerState;
use crate::db::repository::{TicketFilter, TicketRepository, record_id};
use crate::utils::csv::csv_field;
use crate::utils::time::{day_end_millis, day_start_millis, parse_date};
use crate::utils::{AppResponse, AppResult, ok};
use shared::GARMENT_KEYS;
use shared::models::Ticket;

/// Shared by the listing and the export. Dates are whole UTC days,
/// both ends inclusive.
#[derive(Debug, Default, Deserialize)]
pub struct TicketQuery {
    /// YYYY-MM-DD
    pub start: Option<String>,
    /// YYYY-MM-DD
    pub end: Option<String>,
    pub company_id: Option<String>,
    pub site_id: Option<String>,
    /// Case-insensitive substring over guard, site and company names
    pub search: Option<String>,
}

impl TicketQuery {
    fn into_filter(self) -> AppResult<TicketFilter> {
        let start = match self.start.as_deref() {
            Some(d) => Some(day_start_millis(parse_date(d)?)),
            None => None,
        };
        let end = match self.end.as_deref() {
            Some(d) => Some(day_end_millis(parse_date(d)?)),
            None => None,
        };
        Ok(TicketFilter {
            start,
            end,
            company: self.company_id.as_deref().map(|id| record_id("company", id)),
            site: self.site_id.as_deref().map(|id| record_id("site", id)),
            search: self.search.filter(|s| !s.trim().is_empty()),
        })
    }
}

/// GET /api/admin/tickets
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<TicketQuery>,
) -> AppResult<Json<AppResponse<Vec<Ticket>>>> {
    let filter = query.into_filter()?;
    let tickets = TicketRepository::new(state.get_db())
        .list_filtered(filter)
        .await?;
    Ok(ok(tickets.into_iter().map(Into::into).collect()))
}

/// GET /api/admin/tickets/export
///
/// CSV with one column per garment key, suitable for spreadsheets.
pub async fn export_csv(
    State(state): State<ServerState>,
    Query(query): Query<TicketQuery>,
) -> AppResult<Response> {
    let filter = query.into_filter()?;
    let tickets = TicketRepository::new(state.get_db())
        .list_filtered(filter)
        .await?;

    let mut csv = String::new();
    csv.push_str("ref,created_at,company,site,guard_name,phone,email");
    for key in GARMENT_KEYS {
        csv.push(',');
        csv.push_str(&csv_field(key));
    }
    csv.push_str(",notes,total_cost\n");

    for t in &tickets {
        csv.push_str(&csv_field(&t.ref_code));
        csv.push(',');
        csv.push_str(&millis_to_datetime(t.created_at).to_rfc3339());
        csv.push(',');
        csv.push_str(&csv_field(&t.company_name));
        csv.push(',');
        csv.push_str(&csv_field(&t.site_name));
        csv.push(',');
        csv.push_str(&csv_field(&t.guard_name));
        csv.push(',');
        csv.push_str(&csv_field(&t.phone));
        csv.push(',');
        csv.push_str(&csv_field(&t.email));
        for key in GARMENT_KEYS {
            let qty = t.items.get(*key).copied().unwrap_or(0);
            csv.push(',');
            csv.push_str(&qty.to_string());
        }
        csv.push(',');
        csv.push_str(&csv_field(t.notes.as_deref().unwrap_or("")));
        csv.push(',');
        csv.push_str(&format!("{:.2}", t.total_cost));
        csv.push('\n');
    }

    Ok((
        [
            (http::header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                http::header::CONTENT_DISPOSITION,
                "attachment; filename=\"tickets.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}
