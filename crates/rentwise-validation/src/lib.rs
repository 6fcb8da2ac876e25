#![forbid(unsafe_code)]
#![deny(
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Client-side validators for Rentwise forms.
//!
//! Layout:
//! - `result.rs`: `ValidationResult` and the typed `ValidationIssue` behind it
//! - `contact.rs`: email and phone shape checks
//! - `household.rs`: rent amount, due day, and name rules
//! - `sanitize.rs`: minimal markup stripping for free text
//! - `form.rs`: aggregate reports used to gate form submission
//!
//! Every function here is pure: identical input yields identical output and
//! no input, however malformed, makes a call fail.

pub mod contact;
pub mod form;
pub mod household;
pub mod result;
pub mod sanitize;

pub use contact::{validate_email, validate_phone_number};
pub use form::{FieldError, FormReport, HouseholdForm, ProfileForm};
pub use household::{
    MAX_DISPLAY_NAME_CHARS, MAX_DUE_DAY, MAX_HOUSEHOLD_NAME_CHARS, MAX_RENT_AMOUNT, MIN_DUE_DAY,
    validate_display_name, validate_due_day, validate_household_name, validate_rent_amount,
};
pub use result::{NameField, ValidationIssue, ValidationResult};
pub use sanitize::sanitize_input;
