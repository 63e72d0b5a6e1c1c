//! Admin Authentication Models

use serde::{Deserialize, Serialize};

/// Admin login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Admin login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}
