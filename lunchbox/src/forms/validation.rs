//! Input validation helpers
//!
//! Every check runs before the network call and names the offending field.

use rust_decimal::Decimal;
use shared::money::{decimal_places, format_gbp, parse_lenient};

use crate::core::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Person and entity names (contact name, job title)
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Descriptions, notes, rejection reasons
pub const MAX_NOTE_LEN: usize = 500;

/// Contact message body, in characters
pub const MIN_MESSAGE_LEN: usize = 10;
pub const MAX_MESSAGE_LEN: usize = 1000;

// ── Amount limits (pounds) ──────────────────────────────────────────

pub const MIN_TOP_UP: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
pub const MAX_TOP_UP: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);
pub const MIN_WITHDRAWAL: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

// ── Text ────────────────────────────────────────────────────────────

/// Required string: non-blank and within `max_len` characters
pub fn validate_required_text(value: &str, field: &'static str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(field, format!("{} is required", label(field))));
    }
    validate_max_len(value, field, max_len)
}

/// Optional string: within `max_len` characters if present
pub fn validate_optional_text(value: Option<&str>, field: &'static str, max_len: usize) -> AppResult<()> {
    if let Some(v) = value {
        validate_max_len(v, field, max_len)?;
    }
    Ok(())
}

pub fn validate_email(value: &str, field: &'static str) -> AppResult<()> {
    validate_required_text(value, field, MAX_EMAIL_LEN)?;
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(AppError::validation(field, "Enter a valid email address")),
    }
}

/// Character count within `min..=max`
pub fn validate_text_range(value: &str, field: &'static str, min: usize, max: usize) -> AppResult<()> {
    let count = value.trim().chars().count();
    if count < min {
        return Err(AppError::validation(
            field,
            format!("{} must be at least {min} characters", label(field)),
        ));
    }
    if count > max {
        return Err(AppError::validation(
            field,
            format!("{} must be at most {max} characters", label(field)),
        ));
    }
    Ok(())
}

/// Identifier picked from a list (employee, job title)
pub fn validate_id(value: &str, field: &'static str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(field, format!("{} is required", label(field))));
    }
    Ok(())
}

fn validate_max_len(value: &str, field: &'static str, max_len: usize) -> AppResult<()> {
    let count = value.chars().count();
    if count > max_len {
        return Err(AppError::validation(
            field,
            format!("{} is too long ({count} chars, max {max_len})", label(field)),
        ));
    }
    Ok(())
}

// ── Money ───────────────────────────────────────────────────────────

/// Parse a user-entered amount (`12`, `12.50`, `£12.50`, `£1,250`)
pub fn parse_amount(raw: &str, field: &'static str) -> AppResult<Decimal> {
    match parse_lenient(field, raw) {
        Ok(Some(amount)) => Ok(amount),
        Ok(None) => Err(AppError::validation(field, format!("{} is required", label(field)))),
        Err(_) => Err(AppError::validation(field, "Enter a valid amount")),
    }
}

/// Amount within `min..=max` with at most two decimal places
pub fn validate_amount(amount: Decimal, field: &'static str, min: Decimal, max: Decimal) -> AppResult<()> {
    if decimal_places(amount) > 2 {
        return Err(AppError::validation(field, "Amount can have at most 2 decimal places"));
    }
    if amount < min {
        return Err(AppError::validation(field, format!("Minimum amount is {}", format_gbp(min))));
    }
    if amount > max {
        return Err(AppError::validation(field, format!("Maximum amount is {}", format_gbp(max))));
    }
    Ok(())
}

/// Non-negative amount with at most two decimal places
pub fn validate_non_negative(amount: Decimal, field: &'static str) -> AppResult<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AppError::validation(field, format!("{} cannot be negative", label(field))));
    }
    if decimal_places(amount) > 2 {
        return Err(AppError::validation(field, "Amount can have at most 2 decimal places"));
    }
    Ok(())
}

/// `approval_threshold` -> `Approval threshold`
fn label(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
