//! Database models
//!
//! Server-side entities with SurrealDB record ids. Converted to the
//! API models in `shared::models` at the handler boundary
//! (see `api/convert.rs`).

pub mod company;
pub mod site;
pub mod ticket;

pub use company::*;
pub use site::*;
pub use ticket::*;
