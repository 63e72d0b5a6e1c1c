//! Site Model

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::budget::Budget;

/// Garment key → unit price
pub type Pricing = HashMap<String, f64>;

/// Site entity - a physical location guards submit tickets against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub id: Option<String>,
    pub company_id: String,
    pub site_name: String,
    #[serde(default)]
    pub site_address: String,
    /// Shared secret used by guards instead of individual accounts.
    /// Unique across sites.
    pub pin: String,
    pub pricing: Pricing,
    pub budget: Option<Budget>,
}

/// Create site payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteCreate {
    pub company_id: String,
    pub site_name: String,
    #[serde(default)]
    pub site_address: String,
    pub pin: String,
    pub pricing: Pricing,
    pub budget: Option<Budget>,
}

/// Update site payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteUpdate {
    pub company_id: Option<String>,
    pub site_name: Option<String>,
    pub site_address: Option<String>,
    pub pin: Option<String>,
    pub pricing: Option<Pricing>,
    /// `Some(None)` clears the budget, `None` leaves it untouched
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub budget: Option<Option<Budget>>,
}

/// Admin view of a site's budget consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetUsage {
    pub budget: Budget,
    pub used: f64,
    pub remaining: f64,
}

/// Distinguishes an absent field from an explicit `null` in JSON
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
