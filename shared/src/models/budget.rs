//! Budget Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Site budget - one active window, one amount.
///
/// Spend accounting is derived from the ticket ledger at read time;
/// there is no stored counter. Window bounds are inclusive calendar
/// dates: the end date covers its full day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub is_active: bool,
    /// Amount in the same currency scale as site pricing
    pub amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Why a spend was denied against a budget.
///
/// Never shown to guards verbatim; they get one uniform message
/// regardless of the sub-reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    Inactive,
    OutOfWindow,
    Insufficient,
}

/// Result of evaluating a prospective spend against a budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub allowed: bool,
    /// Remaining budget before deducting the prospective cost
    pub remaining: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<DenyReason>,
}
