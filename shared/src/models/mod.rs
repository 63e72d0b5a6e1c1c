//! Data models
//!
//! API-facing entities shared between the server and its clients.
//! IDs are strings in `table:key` form; the server converts from its
//! database record ids at the API boundary.

pub mod auth;
pub mod budget;
pub mod company;
pub mod report;
pub mod site;
pub mod ticket;

// Re-exports
pub use auth::*;
pub use budget::*;
pub use company::*;
pub use report::*;
pub use site::*;
pub use ticket::*;
