//! Budget Evaluator
//!
//! Decides whether a prospective spend is admitted by a site's budget.
//! Pure over in-memory data: callers load the site's ticket ledger and
//! pass it in; the evaluator filters to the active window and derives
//! the spend-to-date.
//!
//! Callers that need the decision to hold under concurrency must run
//! load-evaluate-insert under the site's lock (see `tickets::submission`).

use rust_decimal::Decimal;
use shared::models::{Budget, BudgetStatus, DenyReason};

use super::calculator::{to_decimal, to_f64};
use crate::db::models::Ticket;
use crate::utils::time::{in_window, window_millis};

/// Sum of `total_cost` over the tickets whose `created_at` falls
/// inside the budget window (inclusive calendar days, UTC).
///
/// `tickets` must already be scoped to one site.
pub fn used_in_window(budget: &Budget, tickets: &[Ticket]) -> f64 {
    let (start, end) = window_millis(budget.start_date, budget.end_date);
    let used = tickets
        .iter()
        .filter(|t| in_window(t.created_at, start, end))
        .map(|t| to_decimal(t.total_cost))
        .sum::<Decimal>();
    to_f64(used)
}

/// Remaining budget for admin views: `amount - used`, or `None` when
/// the site has no budget or it is inactive.
pub fn remaining_budget(budget: Option<&Budget>, tickets: &[Ticket]) -> Option<f64> {
    let budget = budget.filter(|b| b.is_active)?;
    let used = used_in_window(budget, tickets);
    Some(to_f64(to_decimal(budget.amount) - to_decimal(used)))
}

/// Evaluate a prospective spend against a site's budget.
///
/// `now_millis` is the wall-clock evaluation time: it decides whether
/// *new* spend is permitted, independent of where individual ledger
/// entries fall. The reported `remaining` is pre-deduction - the state
/// before this spend, not after.
pub fn evaluate(
    budget: Option<&Budget>,
    tickets: &[Ticket],
    prospective_cost: f64,
    now_millis: i64,
) -> BudgetStatus {
    let Some(budget) = budget else {
        return BudgetStatus {
            allowed: false,
            remaining: 0.0,
            reason: Some(DenyReason::Inactive),
        };
    };

    if !budget.is_active {
        return BudgetStatus {
            allowed: false,
            remaining: budget.amount,
            reason: Some(DenyReason::Inactive),
        };
    }

    let (start, end) = window_millis(budget.start_date, budget.end_date);
    if !in_window(now_millis, start, end) {
        return BudgetStatus {
            allowed: false,
            remaining: budget.amount,
            reason: Some(DenyReason::OutOfWindow),
        };
    }

    let used = used_in_window(budget, tickets);
    let remaining = to_f64(to_decimal(budget.amount) - to_decimal(used));
    // Admitted iff remaining covers the cost, so an exact fit passes
    // and a zero-cost inquiry passes even at exhaustion.
    if remaining < prospective_cost {
        return BudgetStatus {
            allowed: false,
            remaining,
            reason: Some(DenyReason::Insufficient),
        };
    }

    BudgetStatus {
        allowed: true,
        remaining,
        reason: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::collections::HashMap;
    use surrealdb::RecordId;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn millis(y: i32, mo: u32, d: u32, h: u32) -> i64 {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    fn january_budget(active: bool) -> Budget {
        Budget {
            is_active: active,
            amount: 100.0,
            start_date: date("2024-01-01"),
            end_date: date("2024-01-31"),
        }
    }

    fn ticket(created_at: i64, total_cost: f64) -> Ticket {
        Ticket {
            id: None,
            ref_code: "0001".to_string(),
            created_at,
            company_id: RecordId::from_table_key("company", "c1"),
            company_name: "Acme".to_string(),
            site_id: RecordId::from_table_key("site", "s1"),
            site_name: "Depot".to_string(),
            guard_name: "Sam".to_string(),
            phone: "07".to_string(),
            email: "sam@example.com".to_string(),
            items: HashMap::new(),
            notes: None,
            total_cost,
        }
    }

    #[test]
    fn test_spend_within_remaining_allowed() {
        let budget = january_budget(true);
        let ledger = vec![ticket(millis(2024, 1, 15, 12), 50.0)];
        let status = evaluate(Some(&budget), &ledger, 40.0, millis(2024, 1, 20, 12));
        assert!(status.allowed);
        // Remaining is pre-deduction: 100 - 50, not 100 - 90
        assert_eq!(status.remaining, 50.0);
        assert_eq!(status.reason, None);
    }

    #[test]
    fn test_spend_over_remaining_denied() {
        let budget = january_budget(true);
        let ledger = vec![ticket(millis(2024, 1, 15, 12), 50.0)];
        let status = evaluate(Some(&budget), &ledger, 60.0, millis(2024, 1, 20, 12));
        assert!(!status.allowed);
        assert_eq!(status.remaining, 50.0);
        assert_eq!(status.reason, Some(DenyReason::Insufficient));
    }

    #[test]
    fn test_inactive_budget_denied_with_full_amount() {
        let budget = january_budget(false);
        let ledger = vec![ticket(millis(2024, 1, 15, 12), 50.0)];
        let status = evaluate(Some(&budget), &ledger, 1.0, millis(2024, 1, 20, 12));
        assert!(!status.allowed);
        assert_eq!(status.remaining, 100.0);
        assert_eq!(status.reason, Some(DenyReason::Inactive));
    }

    #[test]
    fn test_no_budget_denied() {
        let status = evaluate(None, &[], 0.0, millis(2024, 1, 20, 12));
        assert!(!status.allowed);
        assert_eq!(status.remaining, 0.0);
        assert_eq!(status.reason, Some(DenyReason::Inactive));
    }

    #[test]
    fn test_now_outside_window_denied() {
        let budget = january_budget(true);
        let status = evaluate(Some(&budget), &[], 1.0, millis(2024, 2, 1, 0));
        assert!(!status.allowed);
        assert_eq!(status.reason, Some(DenyReason::OutOfWindow));
    }

    #[test]
    fn test_end_date_is_fully_inclusive() {
        let budget = january_budget(true);
        let status = evaluate(Some(&budget), &[], 1.0, millis(2024, 1, 31, 23));
        assert!(status.allowed);
    }

    #[test]
    fn test_tickets_outside_window_not_counted() {
        let budget = january_budget(true);
        let ledger = vec![
            ticket(millis(2023, 12, 31, 12), 80.0),
            ticket(millis(2024, 1, 10, 12), 30.0),
            ticket(millis(2024, 2, 2, 12), 80.0),
        ];
        let status = evaluate(Some(&budget), &ledger, 40.0, millis(2024, 1, 20, 12));
        assert!(status.allowed);
        assert_eq!(status.remaining, 70.0);
    }

    #[test]
    fn test_zero_cost_inquiry() {
        // PIN resolution evaluates with cost 0: 0 >= 0 holds, so it
        // succeeds even at exact exhaustion. Only an overspent ledger
        // pushes remaining below zero and denies.
        let budget = january_budget(true);
        let now = millis(2024, 1, 20, 12);
        assert!(evaluate(Some(&budget), &[], 0.0, now).allowed);

        let spent = vec![ticket(millis(2024, 1, 5, 12), 100.0)];
        let status = evaluate(Some(&budget), &spent, 0.0, now);
        assert!(status.allowed);
        assert_eq!(status.remaining, 0.0);

        let overspent = vec![ticket(millis(2024, 1, 5, 12), 101.0)];
        let status = evaluate(Some(&budget), &overspent, 0.0, now);
        assert!(!status.allowed);
        assert_eq!(status.reason, Some(DenyReason::Insufficient));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let budget = january_budget(true);
        let ledger = vec![ticket(millis(2024, 1, 15, 12), 50.0)];
        let now = millis(2024, 1, 20, 12);
        let first = evaluate(Some(&budget), &ledger, 40.0, now);
        let second = evaluate(Some(&budget), &ledger, 40.0, now);
        assert_eq!(first, second);
    }

    #[test]
    fn test_remaining_budget_helper() {
        let budget = january_budget(true);
        let ledger = vec![ticket(millis(2024, 1, 15, 12), 50.0)];
        assert_eq!(remaining_budget(Some(&budget), &ledger), Some(50.0));
        assert_eq!(remaining_budget(None, &ledger), None);

        let inactive = january_budget(false);
        assert_eq!(remaining_budget(Some(&inactive), &ledger), None);
    }

    #[test]
    fn test_exact_fit_allowed() {
        let budget = january_budget(true);
        let ledger = vec![ticket(millis(2024, 1, 15, 12), 50.0)];
        // remaining == cost is admitted (denial is remaining < cost)
        let status = evaluate(Some(&budget), &ledger, 50.0, millis(2024, 1, 20, 12));
        assert!(status.allowed);
    }
}
