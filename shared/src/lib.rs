//! Shared types for the EKO laundry ticket system
//!
//! API-facing models and the garment vocabulary, used by the server
//! and by any client that talks to its HTTP API.

pub mod garments;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use garments::{GARMENT_KEYS, is_garment_key};
