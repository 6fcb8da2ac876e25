//! Validation outcomes handed to presentation components.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use thiserror::Error;

/// Which free-text name field a name rule was applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameField {
    /// Name of a household.
    Household,
    /// Public display name of a member.
    Display,
}

impl NameField {
    /// Stable identifier used in translation keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Household => "household_name",
            Self::Display => "display_name",
        }
    }
}

impl Display for NameField {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Household => "Household name",
            Self::Display => "Display name",
        })
    }
}

/// Reason a single field failed validation.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Rent amount was NaN.
    #[error("Rent amount must be a valid number")]
    RentNotANumber,
    /// Rent amount was zero or negative.
    #[error("Rent amount must be greater than zero")]
    RentNotPositive,
    /// Rent amount exceeded the plausibility ceiling.
    #[error("Rent amount seems unreasonably high")]
    RentTooHigh,
    /// Due day fell outside the range valid in every month.
    #[error("Due day must be between 1 and 28")]
    DueDayOutOfRange,
    /// Name was empty after trimming.
    #[error("{field} cannot be empty")]
    NameEmpty {
        /// Field the rule was applied to.
        field: NameField,
    },
    /// Name exceeded its character limit after trimming.
    #[error("{field} must be {max} characters or less")]
    NameTooLong {
        /// Field the rule was applied to.
        field: NameField,
        /// Maximum number of characters allowed.
        max: usize,
    },
    /// Email did not have the `local@domain.tld` shape.
    #[error("Please enter a valid email address")]
    InvalidEmail,
    /// Phone number did not have a dialable shape.
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

impl ValidationIssue {
    /// Translation key for this issue, resolved against the UI bundles.
    #[must_use]
    pub const fn i18n_key(&self) -> &'static str {
        match self {
            Self::RentNotANumber => "validation.rent_not_a_number",
            Self::RentNotPositive => "validation.rent_not_positive",
            Self::RentTooHigh => "validation.rent_too_high",
            Self::DueDayOutOfRange => "validation.due_day_out_of_range",
            Self::NameEmpty {
                field: NameField::Household,
            } => "validation.household_name_empty",
            Self::NameEmpty {
                field: NameField::Display,
            } => "validation.display_name_empty",
            Self::NameTooLong {
                field: NameField::Household,
                ..
            } => "validation.household_name_too_long",
            Self::NameTooLong {
                field: NameField::Display,
                ..
            } => "validation.display_name_too_long",
            Self::InvalidEmail => "validation.invalid_email",
            Self::InvalidPhone => "validation.invalid_phone",
        }
    }
}

/// Pass/fail flag paired with a human-readable reason on failure.
///
/// The fields are private so `error` is present exactly when the result is
/// not valid. Serialises as `{"isValid": bool, "error"?: string}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip)]
    issue: Option<ValidationIssue>,
}

impl ValidationResult {
    /// A passing result.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
            issue: None,
        }
    }

    /// A failing result carrying the issue's message.
    #[must_use]
    pub fn invalid(issue: ValidationIssue) -> Self {
        Self {
            is_valid: false,
            error: Some(issue.to_string()),
            issue: Some(issue),
        }
    }

    /// Whether the checked value may be submitted.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Message to render next to the field, present only on failure.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Typed reason behind a failure.
    #[must_use]
    pub const fn issue(&self) -> Option<ValidationIssue> {
        self.issue
    }
}

impl From<Result<(), ValidationIssue>> for ValidationResult {
    fn from(outcome: Result<(), ValidationIssue>) -> Self {
        match outcome {
            Ok(()) => Self::valid(),
            Err(issue) => Self::invalid(issue),
        }
    }
}
