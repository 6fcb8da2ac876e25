//! Shape checks for contact details.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").expect("phone pattern compiles"));

/// Whether `text` looks like `local@domain.tld`.
///
/// Surrounding whitespace is ignored for the check; the input is not modified.
#[must_use]
pub fn validate_email(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text.trim())
}

/// Whether `text` looks like a phone number: an optional leading `+` followed
/// by at least ten digits, spaces, hyphens, or parentheses.
///
/// Dialing plans are not checked.
#[must_use]
pub fn validate_phone_number(text: &str) -> bool {
    PHONE_PATTERN.is_match(text.trim())
}
