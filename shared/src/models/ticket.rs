//! Ticket Model
//!
//! Tickets are append-only: created exactly once by the submission
//! transaction, never updated through the guard-facing surface.
//! Company and site fields are point-in-time snapshots so historical
//! tickets stay stable when a company or site is renamed.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::budget::BudgetStatus;
use super::site::Pricing;

/// Garment key → quantity
pub type TicketItems = HashMap<String, u32>;

/// Ticket entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Option<String>,
    /// 4-digit display code. Human-facing label, not unique.
    pub ref_code: String,
    pub created_at: DateTime<Utc>,
    pub company_id: String,
    pub company_name: String,
    pub site_id: String,
    pub site_name: String,
    pub guard_name: String,
    pub phone: String,
    pub email: String,
    pub items: TicketItems,
    pub notes: Option<String>,
    /// Frozen at submission; later price changes never touch it
    pub total_cost: f64,
}

/// Guard PIN resolution request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinRequest {
    pub pin: String,
}

/// Guard PIN resolution response - everything the drop-off form needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinResolution {
    pub company_name: String,
    pub site_name: String,
    pub site_address: String,
    pub pricing: Pricing,
    pub budget_status: BudgetStatus,
}

/// Guard ticket submission request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketSubmitRequest {
    pub pin: String,
    pub guard_name: String,
    pub phone: String,
    pub email: String,
    pub items: TicketItems,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Guard identity echoed back in the submission response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Successful submission response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedTicket {
    #[serde(rename = "ref")]
    pub ref_code: String,
    pub created_at: DateTime<Utc>,
    pub company: String,
    pub site: String,
    pub site_address: String,
    pub guard: GuardInfo,
    pub items: TicketItems,
    pub notes: Option<String>,
    pub total_cost: f64,
}
