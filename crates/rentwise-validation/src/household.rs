//! Rules for household setup and member profile fields.

use crate::result::{NameField, ValidationIssue, ValidationResult};

/// Largest monthly rent accepted before the amount is treated as a typo.
pub const MAX_RENT_AMOUNT: f64 = 1_000_000.0;
/// First selectable due day.
pub const MIN_DUE_DAY: i64 = 1;
/// Last selectable due day; 28 exists in every month, February included.
pub const MAX_DUE_DAY: i64 = 28;
/// Character limit for household names.
pub const MAX_HOUSEHOLD_NAME_CHARS: usize = 100;
/// Character limit for display names.
pub const MAX_DISPLAY_NAME_CHARS: usize = 50;

/// Check a monthly rent amount.
#[must_use]
pub fn validate_rent_amount(amount: f64) -> ValidationResult {
    check_rent_amount(amount).into()
}

/// Check a rent due day of month.
#[must_use]
pub fn validate_due_day(day: i64) -> ValidationResult {
    if (MIN_DUE_DAY..=MAX_DUE_DAY).contains(&day) {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(ValidationIssue::DueDayOutOfRange)
    }
}

/// Check a household name: non-empty and at most 100 characters once trimmed.
#[must_use]
pub fn validate_household_name(name: &str) -> ValidationResult {
    check_name(name, NameField::Household).into()
}

/// Check a display name: non-empty and at most 50 characters once trimmed.
#[must_use]
pub fn validate_display_name(name: &str) -> ValidationResult {
    check_name(name, NameField::Display).into()
}

fn check_rent_amount(amount: f64) -> Result<(), ValidationIssue> {
    if amount.is_nan() {
        return Err(ValidationIssue::RentNotANumber);
    }
    if amount <= 0.0 {
        return Err(ValidationIssue::RentNotPositive);
    }
    if amount > MAX_RENT_AMOUNT {
        return Err(ValidationIssue::RentTooHigh);
    }
    Ok(())
}

const fn name_limit(field: NameField) -> usize {
    match field {
        NameField::Household => MAX_HOUSEHOLD_NAME_CHARS,
        NameField::Display => MAX_DISPLAY_NAME_CHARS,
    }
}

fn check_name(name: &str, field: NameField) -> Result<(), ValidationIssue> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationIssue::NameEmpty { field });
    }
    let max = name_limit(field);
    if trimmed.chars().count() > max {
        return Err(ValidationIssue::NameTooLong { field, max });
    }
    Ok(())
}
