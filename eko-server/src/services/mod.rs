//! Service Layer

pub mod notifier;

pub use notifier::{LogNotifier, Notifier, NotifyError, render_ticket_summary};
