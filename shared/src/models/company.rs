//! Company Model

use serde::{Deserialize, Serialize};

/// Company entity - owns zero or more sites
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: Option<String>,
    pub name: String,
}

/// Create company payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyCreate {
    pub name: String,
}

/// Update company payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyUpdate {
    pub name: Option<String>,
}
