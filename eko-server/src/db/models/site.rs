//! Site Model

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shared::models::Budget;
use surrealdb::RecordId;

/// Site entity. The PIN is the guard-facing lookup key and must stay
/// unique across sites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub id: Option<RecordId>,
    pub company: RecordId,
    pub site_name: String,
    #[serde(default)]
    pub site_address: String,
    pub pin: String,
    /// Garment key → unit price
    pub pricing: HashMap<String, f64>,
    pub budget: Option<Budget>,
}
