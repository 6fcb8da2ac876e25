//! Command handlers grouped by concern.

pub(crate) mod form;
pub(crate) mod prefs;
pub(crate) mod validate;

use crate::cli::CommandOutput;
use crate::error::EXIT_VALIDATION;

/// Wrap rendered output, exiting with the validation code when `valid` is false.
pub(crate) const fn checked_output(text: String, valid: bool) -> CommandOutput {
    if valid {
        CommandOutput::success(text)
    } else {
        CommandOutput::with_code(text, EXIT_VALIDATION)
    }
}
