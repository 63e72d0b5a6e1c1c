//! Ticket Submission Transaction
//!
//! Orchestrates the guard write path in four steps, each an abort
//! point: resolve PIN, price, authorize against the budget, commit.
//! The read-evaluate-insert sequence for one site runs under that
//! site's lock so at most one ticket is admitted when budget remains
//! for only one. Notification dispatch is best-effort and runs after
//! the lock is released.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::models::{
    BudgetStatus, DenyReason, GuardInfo, PinResolution, SubmittedTicket, TicketSubmitRequest,
};

use crate::budget::{evaluate, ticket_total};
use crate::db::models::{Site, Ticket};
use crate::db::repository::{CompanyRepository, SiteRepository, TicketRepository};
use crate::services::Notifier;
use crate::tickets::{SiteLocks, generate_ref};
use crate::utils::validation::{validate_pin, validate_submission};
use crate::utils::{AppError, AppResult};

/// Fallback company name when the owning company row has been removed
/// between site creation and submission
const UNKNOWN_COMPANY: &str = "Unknown company";

/// Guard-facing ticket operations
#[derive(Clone)]
pub struct TicketService {
    sites: SiteRepository,
    companies: CompanyRepository,
    tickets: TicketRepository,
    locks: Arc<SiteLocks>,
    notifier: Arc<dyn Notifier>,
    /// Internal operations address, always CC'd on submissions
    internal_email: String,
}

impl TicketService {
    pub fn new(
        db: Surreal<Db>,
        locks: Arc<SiteLocks>,
        notifier: Arc<dyn Notifier>,
        internal_email: String,
    ) -> Self {
        Self {
            sites: SiteRepository::new(db.clone()),
            companies: CompanyRepository::new(db.clone()),
            tickets: TicketRepository::new(db),
            locks,
            notifier,
            internal_email,
        }
    }

    /// Resolve a PIN for the drop-off form: site identity, pricing and
    /// a zero-cost budget check. Read-only, so no site lock is taken.
    pub async fn resolve_pin(&self, pin: &str) -> AppResult<PinResolution> {
        validate_pin(pin)?;

        let site = self
            .sites
            .find_by_pin(pin)
            .await?
            .ok_or_else(AppError::invalid_pin)?;

        let status = self.evaluate_site(&site, 0.0).await?;
        if !status.allowed {
            return Err(AppError::budget_denied(
                status.reason.unwrap_or(DenyReason::Inactive),
            ));
        }

        let company_name = self.company_name(&site).await?;
        Ok(PinResolution {
            company_name,
            site_name: site.site_name,
            site_address: site.site_address,
            pricing: site.pricing,
            budget_status: status,
        })
    }

    /// Submit a ticket. See the module docs for the transaction shape.
    pub async fn submit(&self, req: TicketSubmitRequest) -> AppResult<SubmittedTicket> {
        // Step 0: pure validation, before any I/O
        validate_submission(&req)?;

        // Step 1: resolve - also gives us the lock key
        let site = self
            .sites
            .find_by_pin(&req.pin)
            .await?
            .ok_or_else(AppError::invalid_pin)?;
        let site_id = site
            .id
            .as_ref()
            .ok_or_else(|| AppError::internal("site row without id"))?
            .to_string();

        let lock = self.locks.lock_for(&site_id);
        let (persisted, site_address) = {
            let _guard = lock.lock().await;

            // Re-resolve under the lock so pricing and budget are
            // current relative to concurrent admin edits
            let site = self
                .sites
                .find_by_pin(&req.pin)
                .await?
                .ok_or_else(AppError::invalid_pin)?;
            let site_rid = site
                .id
                .clone()
                .ok_or_else(|| AppError::internal("site row without id"))?;

            // Step 2: price with the site's current table
            let total_cost = ticket_total(&site.pricing, &req.items);

            // Step 3: authorize
            let status = self.evaluate_site(&site, total_cost).await?;
            if !status.allowed {
                return Err(AppError::budget_denied(
                    status.reason.unwrap_or(DenyReason::Inactive),
                ));
            }

            // Step 4: commit the denormalized snapshot
            let company_name = self.company_name(&site).await?;
            let now = Utc::now();
            let created_at = now.timestamp_millis();
            let ticket = Ticket {
                id: None,
                ref_code: generate_ref(&req.email, created_at),
                created_at,
                company_id: site.company.clone(),
                company_name,
                site_id: site_rid,
                site_name: site.site_name.clone(),
                guard_name: req.guard_name.clone(),
                phone: req.phone.clone(),
                email: req.email.clone(),
                items: req.items.clone(),
                notes: req.notes.clone(),
                total_cost,
            };
            let persisted = self.tickets.insert(ticket).await?;

            tracing::info!(
                target: "tickets",
                ref_code = %persisted.ref_code,
                site = %persisted.site_name,
                cost = persisted.total_cost,
                remaining_before = status.remaining,
                "Ticket admitted"
            );
            (persisted, site.site_address)
        };

        // Lock released; notification must not serialize other guards
        self.dispatch_notification(persisted.clone(), site_address.clone());

        Ok(SubmittedTicket {
            ref_code: persisted.ref_code,
            created_at: Utc
                .timestamp_millis_opt(persisted.created_at)
                .single()
                .unwrap_or_else(Utc::now),
            company: persisted.company_name,
            site: persisted.site_name,
            site_address,
            guard: GuardInfo {
                name: persisted.guard_name,
                phone: persisted.phone,
                email: persisted.email,
            },
            items: persisted.items,
            notes: persisted.notes,
            total_cost: persisted.total_cost,
        })
    }

    /// Load the site's ledger and evaluate a prospective spend
    async fn evaluate_site(&self, site: &Site, prospective_cost: f64) -> AppResult<BudgetStatus> {
        let site_rid = site
            .id
            .clone()
            .ok_or_else(|| AppError::internal("site row without id"))?;
        let ledger = self.tickets.list_for_site(site_rid).await?;
        Ok(evaluate(
            site.budget.as_ref(),
            &ledger,
            prospective_cost,
            Utc::now().timestamp_millis(),
        ))
    }

    async fn company_name(&self, site: &Site) -> AppResult<String> {
        let company = self
            .companies
            .find_by_id(&site.company.to_string())
            .await?;
        Ok(company.map(|c| c.name).unwrap_or_else(|| UNKNOWN_COMPANY.to_string()))
    }

    /// Fire-and-forget notification to the submitter and operations
    fn dispatch_notification(&self, ticket: Ticket, site_address: String) {
        let notifier = self.notifier.clone();
        let recipients = vec![ticket.email.clone(), self.internal_email.clone()];
        tokio::spawn(async move {
            if let Err(e) = notifier.notify(&ticket, &site_address, &recipients).await {
                tracing::warn!(
                    target: "notify",
                    ref_code = %ticket.ref_code,
                    error = %e,
                    "Ticket notification failed (submission already persisted)"
                );
            }
        });
    }
}
