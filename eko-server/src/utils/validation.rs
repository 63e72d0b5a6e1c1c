//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! CRUD and guard-facing handlers.

use shared::garments::GARMENT_KEYS;
use shared::models::{Budget, TicketItems, TicketSubmitRequest};

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: company, site, guard, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Free-text notes on tickets
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Site PINs are 1-10 characters
pub const MAX_PIN_LEN: usize = 10;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate a site PIN: non-empty, at most [`MAX_PIN_LEN`] characters.
pub fn validate_pin(pin: &str) -> Result<(), AppError> {
    if pin.is_empty() || pin.len() > MAX_PIN_LEN {
        return Err(AppError::validation("Invalid request".to_string()));
    }
    Ok(())
}

/// Validate budget configuration on site create/update.
///
/// The window must not be inverted and the amount must not be
/// negative; an inverted window would silently deny all spend.
pub fn validate_budget(budget: &Budget) -> Result<(), AppError> {
    if budget.start_date > budget.end_date {
        return Err(AppError::validation(format!(
            "Budget window is inverted: {} > {}",
            budget.start_date, budget.end_date
        )));
    }
    if budget.amount < 0.0 {
        return Err(AppError::validation("Budget amount must not be negative"));
    }
    Ok(())
}

/// Count the total quantity across known garment keys.
///
/// Unknown keys are ignored here, matching the pricing rule that
/// zero-prices them: a ticket of only unknown keys is an empty ticket.
pub fn known_item_count(items: &TicketItems) -> u64 {
    GARMENT_KEYS
        .iter()
        .filter_map(|key| items.get(*key))
        .map(|qty| *qty as u64)
        .sum()
}

/// Validate a guard ticket submission before any I/O is attempted.
pub fn validate_submission(req: &TicketSubmitRequest) -> Result<(), AppError> {
    validate_pin(&req.pin)?;
    validate_required_text(&req.guard_name, "guard_name", MAX_NAME_LEN)?;
    validate_required_text(&req.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&req.email, "email", MAX_EMAIL_LEN)?;
    if !req.email.contains('@') {
        return Err(AppError::validation("email is not a valid address"));
    }
    validate_optional_text(&req.notes, "notes", MAX_NOTE_LEN)?;
    if known_item_count(&req.items) == 0 {
        return Err(AppError::validation("At least one item is required"));
    }
    Ok(())
}
