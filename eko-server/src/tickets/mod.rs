//! Ticket Submission
//!
//! The guard-facing write path: PIN resolution and the four-step
//! submission transaction (resolve → price → authorize → commit),
//! serialized per site so concurrent submissions cannot both slip
//! past a nearly-exhausted budget.

pub mod locks;
pub mod reference;
pub mod submission;

pub use locks::SiteLocks;
pub use reference::generate_ref;
pub use submission::TicketService;
