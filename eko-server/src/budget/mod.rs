//! Budget Module
//!
//! The consistency core of the system: pricing a ticket and deciding
//! whether a site's time-windowed budget admits the spend.
//!
//! Usage is always derived from the ticket ledger at evaluation time,
//! never kept as a running counter - a counter could drift from the
//! ledger, a derived sum cannot.

pub mod calculator;
pub mod evaluator;

pub use calculator::ticket_total;
pub use evaluator::{evaluate, remaining_budget, used_in_window};
