//! Ticket Model
//!
//! Append-only. Company and site fields are point-in-time snapshots
//! captured at submission; they are never re-joined, so renames leave
//! historical tickets untouched. `total_cost` is frozen at creation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Ticket entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Option<RecordId>,
    /// 4-digit display code, not unique
    pub ref_code: String,
    /// Unix millis (UTC)
    pub created_at: i64,
    pub company_id: RecordId,
    pub company_name: String,
    pub site_id: RecordId,
    pub site_name: String,
    pub guard_name: String,
    pub phone: String,
    pub email: String,
    /// Garment key → quantity
    pub items: HashMap<String, u32>,
    pub notes: Option<String>,
    pub total_cost: f64,
}
