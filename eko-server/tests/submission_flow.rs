//! End-to-end submission flow over the in-memory database:
//! PIN resolution, pricing, budget authorization and the per-site
//! serialization that keeps concurrent guards from overspending.

use std::collections::HashMap;

use chrono::{Duration, Utc};

use eko_server::db::models::Site;
use eko_server::db::repository::{CompanyRepository, SiteRepository, TicketRepository};
use eko_server::{AppError, Config, ServerState, TicketService};
use shared::models::{Budget, DenyReason, TicketSubmitRequest};

const PIN: &str = "4321";

async fn state_with_site(budget: Option<Budget>) -> (ServerState, TicketService) {
    let config = Config::with_overrides("/tmp/eko-test-unused", 0);
    let state = ServerState::initialize_in_memory(&config)
        .await
        .expect("in-memory state");

    let db = state.get_db();
    let company = CompanyRepository::new(db.clone())
        .create("Acme Security".to_string())
        .await
        .expect("create company");

    let mut pricing = HashMap::new();
    pricing.insert("shirt".to_string(), 30.0);
    pricing.insert("trousers".to_string(), 12.5);

    SiteRepository::new(db)
        .create(Site {
            id: None,
            company: company.id.expect("company id"),
            site_name: "North Gate".to_string(),
            site_address: "1 Dock Road".to_string(),
            pin: PIN.to_string(),
            pricing,
            budget,
        })
        .await
        .expect("create site");

    let service = state.ticket_service();
    (state, service)
}

fn active_budget(amount: f64) -> Budget {
    let today = Utc::now().date_naive();
    Budget {
        is_active: true,
        amount,
        start_date: today - Duration::days(7),
        end_date: today + Duration::days(7),
    }
}

fn submission(qty_shirts: u32) -> TicketSubmitRequest {
    let mut items = HashMap::new();
    items.insert("shirt".to_string(), qty_shirts);
    TicketSubmitRequest {
        pin: PIN.to_string(),
        guard_name: "Dana".to_string(),
        phone: "0700000000".to_string(),
        email: "dana@example.com".to_string(),
        items,
        notes: None,
    }
}

#[tokio::test]
async fn resolve_pin_returns_site_and_pricing() {
    let (_state, service) = state_with_site(Some(active_budget(100.0))).await;

    let resolution = service.resolve_pin(PIN).await.expect("resolve");
    assert_eq!(resolution.company_name, "Acme Security");
    assert_eq!(resolution.site_name, "North Gate");
    assert_eq!(resolution.pricing.get("shirt"), Some(&30.0));
    assert!(resolution.budget_status.allowed);
    assert_eq!(resolution.budget_status.remaining, 100.0);
}

#[tokio::test]
async fn unknown_pin_is_rejected() {
    let (_state, service) = state_with_site(Some(active_budget(100.0))).await;

    let err = service.resolve_pin("9999").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn submit_persists_ticket_and_freezes_cost() {
    let (state, service) = state_with_site(Some(active_budget(100.0))).await;

    let submitted = service.submit(submission(2)).await.expect("submit");
    assert_eq!(submitted.total_cost, 60.0);
    assert_eq!(submitted.company, "Acme Security");
    assert_eq!(submitted.ref_code.len(), 4);
    assert!(submitted.ref_code.chars().all(|c| c.is_ascii_digit()));

    let tickets = TicketRepository::new(state.get_db())
        .list_filtered(Default::default())
        .await
        .expect("list");
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].total_cost, 60.0);
    assert_eq!(tickets[0].guard_name, "Dana");
}

#[tokio::test]
async fn submission_over_remaining_budget_is_denied() {
    let (_state, service) = state_with_site(Some(active_budget(100.0))).await;

    service.submit(submission(2)).await.expect("first fits");

    // 60 spent, 40 left: another 60 must be denied
    let err = service.submit(submission(2)).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::BudgetDenied {
            reason: DenyReason::Insufficient
        }
    ));
}

#[tokio::test]
async fn inactive_budget_denies_even_zero_cost_resolution() {
    let mut budget = active_budget(100.0);
    budget.is_active = false;
    let (_state, service) = state_with_site(Some(budget)).await;

    let err = service.resolve_pin(PIN).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::BudgetDenied {
            reason: DenyReason::Inactive
        }
    ));
}

#[tokio::test]
async fn site_without_budget_denies_submission() {
    let (_state, service) = state_with_site(None).await;

    let err = service.submit(submission(1)).await.unwrap_err();
    assert!(matches!(err, AppError::BudgetDenied { .. }));
}

/// The core consistency property: when the remaining budget fits only
/// one of two concurrent tickets, exactly one is admitted.
#[tokio::test]
async fn concurrent_submissions_admit_exactly_one_when_one_fits() {
    let (state, service) = state_with_site(Some(active_budget(100.0))).await;

    let a = service.clone();
    let b = service.clone();
    let (ra, rb) = tokio::join!(a.submit(submission(2)), b.submit(submission(2)));

    let admitted = [&ra, &rb].iter().filter(|r| r.is_ok()).count();
    assert_eq!(admitted, 1, "one 60-cost ticket fits a 100 budget, not two");

    let denied = if ra.is_err() { ra.unwrap_err() } else { rb.unwrap_err() };
    assert!(matches!(
        denied,
        AppError::BudgetDenied {
            reason: DenyReason::Insufficient
        }
    ));

    let tickets = TicketRepository::new(state.get_db())
        .list_filtered(Default::default())
        .await
        .expect("list");
    assert_eq!(tickets.len(), 1);
}

#[tokio::test]
async fn exact_fit_is_admitted_then_budget_is_exhausted() {
    let (_state, service) = state_with_site(Some(active_budget(60.0))).await;

    service.submit(submission(2)).await.expect("exact fit");

    // Resolution is a zero-cost check: 0 remaining still covers cost 0,
    // so the PIN stays usable and reports the exhaustion
    let resolution = service.resolve_pin(PIN).await.expect("resolve");
    assert!(resolution.budget_status.allowed);
    assert_eq!(resolution.budget_status.remaining, 0.0);

    // But any priced ticket is now over budget
    let err = service.submit(submission(1)).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::BudgetDenied {
            reason: DenyReason::Insufficient
        }
    ));
}
