//! Aggregate validation for whole forms.
//!
//! # Design
//! - A report lists every failing field in form order so the view can
//!   decorate all of them at once.
//! - Submission is allowed only when the report is empty.

use serde::{Deserialize, Serialize};

use crate::contact::{validate_email, validate_phone_number};
use crate::household::{
    validate_display_name, validate_due_day, validate_household_name, validate_rent_amount,
};
use crate::result::{ValidationIssue, ValidationResult};
use crate::sanitize::sanitize_input;

/// One failing field in a form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field identifier (matches the serialized form key).
    pub field: &'static str,
    /// Translation key for the message.
    pub key: &'static str,
    /// English message for the failure.
    pub message: String,
}

/// Ordered collection of field failures for a form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormReport {
    errors: Vec<FieldError>,
}

impl FormReport {
    /// Whether the form may be submitted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All failures in form order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// First failure, for single-message banners.
    #[must_use]
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// Failure recorded for `field`, if any.
    #[must_use]
    pub fn error_for(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == field)
    }

    fn record(&mut self, field: &'static str, result: &ValidationResult) {
        if let Some(issue) = result.issue() {
            self.push(field, issue);
        }
    }

    fn push(&mut self, field: &'static str, issue: ValidationIssue) {
        self.errors.push(FieldError {
            field,
            key: issue.i18n_key(),
            message: issue.to_string(),
        });
    }
}

/// Household creation/edit form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HouseholdForm {
    /// Household name.
    pub name: String,
    /// Monthly rent.
    pub rent_amount: f64,
    /// Day of month rent is due.
    pub due_day: i64,
}

impl HouseholdForm {
    /// Validate every field.
    #[must_use]
    pub fn validate(&self) -> FormReport {
        let mut report = FormReport::default();
        report.record("name", &validate_household_name(&self.name));
        report.record("rent_amount", &validate_rent_amount(self.rent_amount));
        report.record("due_day", &validate_due_day(self.due_day));
        report
    }

    /// Copy with free-text fields sanitised for submission.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            name: sanitize_input(&self.name),
            ..self.clone()
        }
    }
}

/// Member profile form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    /// Public display name.
    pub display_name: String,
    /// Account email.
    pub email: String,
    /// Optional contact number; blank means not provided.
    #[serde(default)]
    pub phone: Option<String>,
}

impl ProfileForm {
    /// Validate every field.
    #[must_use]
    pub fn validate(&self) -> FormReport {
        let mut report = FormReport::default();
        report.record("display_name", &validate_display_name(&self.display_name));
        if !validate_email(&self.email) {
            report.push("email", ValidationIssue::InvalidEmail);
        }
        if let Some(phone) = self.phone.as_deref().filter(|phone| !phone.trim().is_empty()) {
            if !validate_phone_number(phone) {
                report.push("phone", ValidationIssue::InvalidPhone);
            }
        }
        report
    }

    /// Copy with free-text fields sanitised and blank phone dropped.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            display_name: sanitize_input(&self.display_name),
            email: self.email.trim().to_string(),
            phone: self
                .phone
                .as_deref()
                .map(sanitize_input)
                .filter(|phone| !phone.is_empty()),
        }
    }
}
