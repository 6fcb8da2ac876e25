//! Single-field validation and text sanitising.

use rentwise_validation::{
    ValidationIssue, ValidationResult, sanitize_input, validate_display_name, validate_due_day,
    validate_email, validate_household_name, validate_phone_number, validate_rent_amount,
};
use tracing::debug;

use crate::cli::{AppContext, CommandOutput, SanitizeArgs, ValidateCommand};
use crate::commands::checked_output;
use crate::error::CliResult;
use crate::output::{render_sanitized, render_validation};

pub(crate) fn handle_validate(
    ctx: &AppContext,
    command: &ValidateCommand,
) -> CliResult<CommandOutput> {
    let (field, input, result) = match command {
        ValidateCommand::Email(args) => (
            "email",
            args.value.clone(),
            flag_result(validate_email(&args.value), ValidationIssue::InvalidEmail),
        ),
        ValidateCommand::Phone(args) => (
            "phone",
            args.value.clone(),
            flag_result(
                validate_phone_number(&args.value),
                ValidationIssue::InvalidPhone,
            ),
        ),
        ValidateCommand::Rent(args) => (
            "rent",
            args.amount.to_string(),
            validate_rent_amount(args.amount),
        ),
        ValidateCommand::DueDay(args) => (
            "due-day",
            args.day.to_string(),
            validate_due_day(args.day),
        ),
        ValidateCommand::Household(args) => (
            "household",
            args.value.clone(),
            validate_household_name(&args.value),
        ),
        ValidateCommand::DisplayName(args) => (
            "display-name",
            args.value.clone(),
            validate_display_name(&args.value),
        ),
    };
    debug!(field, valid = result.is_valid(), "validated field");

    let text = render_validation(field, &input, &result, &ctx.bundle(), ctx.output)?;
    Ok(checked_output(text, result.is_valid()))
}

pub(crate) fn handle_sanitize(ctx: &AppContext, args: &SanitizeArgs) -> CliResult<CommandOutput> {
    let sanitized = sanitize_input(&args.text);
    let text = render_sanitized(&args.text, &sanitized, ctx.output)?;
    Ok(CommandOutput::success(text))
}

fn flag_result(valid: bool, issue: ValidationIssue) -> ValidationResult {
    if valid {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(issue)
    }
}
