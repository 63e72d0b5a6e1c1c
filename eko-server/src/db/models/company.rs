//! Company Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Company entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: Option<RecordId>,
    pub name: String,
}
