//! Utility module - common types and helpers
//!
//! - [`AppError`] / [`AppResult`] - application error type and result alias
//! - [`logger`] - tracing setup
//! - [`validation`] - input validation helpers
//! - [`time`] - date/window conversions

pub mod csv;
pub mod error;
pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

pub use error::{AppError, AppResponse, ok};
pub use result::AppResult;
