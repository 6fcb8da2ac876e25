//! Whole-form checks for the household and profile forms.

use rentwise_validation::{HouseholdForm, ProfileForm};
use tracing::debug;

use crate::cli::{AppContext, CommandOutput, HouseholdArgs, ProfileArgs};
use crate::commands::checked_output;
use crate::error::CliResult;
use crate::output::render_form_report;

pub(crate) fn handle_household_form(
    ctx: &AppContext,
    args: &HouseholdArgs,
) -> CliResult<CommandOutput> {
    let form = HouseholdForm {
        name: args.name.clone(),
        rent_amount: args.rent,
        due_day: args.due_day,
    }
    .sanitized();
    let report = form.validate();
    debug!(errors = report.errors().len(), "checked household form");

    let text = render_form_report("household", &report, &ctx.bundle(), ctx.output)?;
    Ok(checked_output(text, report.is_valid()))
}

pub(crate) fn handle_profile_form(
    ctx: &AppContext,
    args: &ProfileArgs,
) -> CliResult<CommandOutput> {
    let form = ProfileForm {
        display_name: args.display_name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
    }
    .sanitized();
    let report = form.validate();
    debug!(errors = report.errors().len(), "checked profile form");

    let text = render_form_report("profile", &report, &ctx.bundle(), ctx.output)?;
    Ok(checked_output(text, report.is_valid()))
}
