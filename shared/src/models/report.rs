//! Reporting Models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::budget::Budget;

/// One row of the admin monthly report: a site's tickets aggregated
/// over a calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMonthlyReport {
    pub company: String,
    pub site: String,
    pub ticket_count: usize,
    /// Garment key → total quantity across the month's tickets
    pub garments: HashMap<String, u32>,
    pub total_amount: f64,
    pub budget: Option<Budget>,
    /// Derived from the full budget window, not just this month.
    /// `None` when the site has no active budget.
    pub budget_remaining: Option<f64>,
}
