//! Eko Server - laundry ticket intake and administration backend
//!
//! Guards at customer sites drop off garments against a site PIN;
//! admins manage companies, sites, pricing, budgets and reporting.
//!
//! # Module structure
//!
//! ```text
//! eko-server/src/
//! ├── core/       # configuration, state, HTTP server
//! ├── auth/       # admin JWT issuance and the bearer gate
//! ├── api/        # HTTP routes and handlers
//! ├── budget/     # pricing and budget evaluation
//! ├── tickets/    # per-site locks, ref codes, the submission transaction
//! ├── reporting/  # monthly aggregation
//! ├── services/   # outbound notifications
//! ├── db/         # embedded SurrealDB models and repositories
//! └── utils/      # errors, logging, validation, time helpers
//! ```

pub mod api;
pub mod auth;
pub mod budget;
pub mod core;
pub mod db;
pub mod reporting;
pub mod services;
pub mod tickets;
pub mod utils;

// Re-export common types
pub use auth::JwtService;
pub use core::{Config, Server, ServerState};
pub use tickets::TicketService;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

// Security logging macro - supports tracing format specifiers
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
    ________
   / ____/ /______
  / __/ / //_/ __ \
 / /___/ ,< / /_/ /
/_____/_/|_|\____/
    "#
    );
}
