//! Admin Report Handlers
//!
//! Aggregation itself lives in [`crate::reporting`]; these handlers
//! load the rows and shape the response.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::{
    CompanyRepository, SiteRepository, TicketFilter, TicketRepository,
};
use crate::reporting::monthly_report;
use crate::utils::csv::csv_field;
use crate::utils::{AppResponse, AppResult, ok};
use shared::models::SiteMonthlyReport;

#[derive(Debug, Deserialize)]
pub struct MonthlyQuery {
    /// 1-12
    pub month: u32,
    pub year: i32,
}

async fn build_rows(
    state: &ServerState,
    query: &MonthlyQuery,
) -> AppResult<Vec<SiteMonthlyReport>> {
    let db = state.get_db();
    let companies = CompanyRepository::new(db.clone()).find_all().await?;
    let sites = SiteRepository::new(db.clone()).find_all(None).await?;
    let tickets = TicketRepository::new(db)
        .list_filtered(TicketFilter::default())
        .await?;

    monthly_report(query.month, query.year, &companies, &sites, &tickets)
}

/// GET /api/admin/reports/monthly?month=&year=
pub async fn monthly(
    State(state): State<ServerState>,
    Query(query): Query<MonthlyQuery>,
) -> AppResult<Json<AppResponse<Vec<SiteMonthlyReport>>>> {
    let rows = build_rows(&state, &query).await?;
    Ok(ok(rows))
}

/// GET /api/admin/reports/monthly/export
///
/// One CSV row per site, one column per garment key.
pub async fn monthly_csv(
    State(state): State<ServerState>,
    Query(query): Query<MonthlyQuery>,
) -> AppResult<Response> {
    let rows = build_rows(&state, &query).await?;

    let mut csv = String::new();
    csv.push_str("company,site,ticket_count");
    for key in shared::GARMENT_KEYS {
        csv.push(',');
        csv.push_str(&csv_field(key));
    }
    csv.push_str(",total_amount,budget_amount,budget_remaining\n");

    for row in &rows {
        csv.push_str(&csv_field(&row.company));
        csv.push(',');
        csv.push_str(&csv_field(&row.site));
        csv.push(',');
        csv.push_str(&row.ticket_count.to_string());
        for key in shared::GARMENT_KEYS {
            let qty = row.garments.get(*key).copied().unwrap_or(0);
            csv.push(',');
            csv.push_str(&qty.to_string());
        }
        csv.push(',');
        csv.push_str(&format!("{:.2}", row.total_amount));
        csv.push(',');
        if let Some(budget) = &row.budget {
            csv.push_str(&format!("{:.2}", budget.amount));
        }
        csv.push(',');
        if let Some(remaining) = row.budget_remaining {
            csv.push_str(&format!("{:.2}", remaining));
        }
        csv.push('\n');
    }

    let filename = format!(
        "attachment; filename=\"report-{:04}-{:02}.csv\"",
        query.year, query.month
    );
    Ok((
        [
            (http::header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (http::header::CONTENT_DISPOSITION, filename),
        ],
        csv,
    )
        .into_response())
}
