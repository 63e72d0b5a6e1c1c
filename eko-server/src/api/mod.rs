//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`auth`] - admin login
//! - [`guard`] - guard-facing PIN resolution and ticket submission
//! - [`companies`] - company administration
//! - [`sites`] - site administration, pricing and budgets
//! - [`tickets`] - admin ticket listing and CSV export
//! - [`reports`] - monthly aggregation

pub mod convert;

pub mod auth;
pub mod guard;
pub mod health;

pub mod companies;
pub mod reports;
pub mod sites;
pub mod tickets;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
