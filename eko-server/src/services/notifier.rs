//! Ticket Notification Service
//!
//! Notification is best-effort: the submission transaction reports
//! success once the ticket is persisted, and a failed dispatch is
//! logged, never surfaced to the guard. The trait is the seam for a
//! real mail transport; the default implementation renders the same
//! summary a mail body would carry and emits it to the log.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use shared::garments::GARMENT_KEYS;
use thiserror::Error;

use crate::db::models::Ticket;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notification dispatch failed: {0}")]
    Dispatch(String),
}

/// Outbound notification seam
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Notify the submitter and the internal operations address about
    /// a persisted ticket.
    async fn notify(
        &self,
        ticket: &Ticket,
        site_address: &str,
        recipients: &[String],
    ) -> Result<(), NotifyError>;
}

/// Plain-text ticket summary, shared by every transport
pub fn render_ticket_summary(ticket: &Ticket, site_address: &str) -> String {
    let created: DateTime<Utc> = Utc
        .timestamp_millis_opt(ticket.created_at)
        .single()
        .unwrap_or_else(Utc::now);

    let mut out = String::new();
    out.push_str(&format!("Ticket {}\n", ticket.ref_code));
    out.push_str(&format!("Date: {}\n", created.to_rfc3339()));
    out.push_str(&format!("Company: {}\n", ticket.company_name));
    out.push_str(&format!("Site: {}\n", ticket.site_name));
    out.push_str(&format!("Address: {site_address}\n"));
    out.push_str(&format!(
        "Guard: {} ({}, {})\n",
        ticket.guard_name, ticket.email, ticket.phone
    ));
    out.push_str("Items:\n");
    for key in GARMENT_KEYS {
        if let Some(qty) = ticket.items.get(*key)
            && *qty > 0
        {
            out.push_str(&format!("- {key}: {qty}\n"));
        }
    }
    if let Some(notes) = &ticket.notes {
        out.push_str(&format!("Notes: {notes}\n"));
    }
    out.push_str(&format!("Total: {:.2}\n", ticket.total_cost));
    out.push_str("Please print and include the ticket with the garments.\n");
    out
}

/// Log-backed notifier (default transport)
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(
        &self,
        ticket: &Ticket,
        site_address: &str,
        recipients: &[String],
    ) -> Result<(), NotifyError> {
        let summary = render_ticket_summary(ticket, site_address);
        tracing::info!(
            target: "notify",
            ref_code = %ticket.ref_code,
            to = %recipients.join(","),
            "Ticket notification:\n{summary}"
        );
        Ok(())
    }
}
