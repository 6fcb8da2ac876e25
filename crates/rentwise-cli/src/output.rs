//! Output renderers and formatting helpers for CLI commands.

use std::fmt::Write as _;

use anyhow::anyhow;
use rentwise_ui::presentation::DARK_CLASS;
use rentwise_ui::{Direction, DocumentSnapshot, LocaleCode, ThemeMode, TranslationBundle};
use rentwise_validation::{FormReport, ValidationResult};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldView<'a> {
    field: &'a str,
    input: &'a str,
    is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SanitizedView<'a> {
    input: &'a str,
    sanitized: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FormView<'a> {
    form: &'a str,
    is_valid: bool,
    errors: Vec<FormErrorView<'a>>,
}

#[derive(Serialize)]
struct FormErrorView<'a> {
    field: &'a str,
    key: &'a str,
    error: &'a str,
    message: String,
}

/// Persisted preferences together with the document state they produce.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PreferencesView {
    pub(crate) theme: ThemeMode,
    pub(crate) language: &'static str,
    pub(crate) language_label: &'static str,
    pub(crate) direction: Direction,
    pub(crate) document: DocumentSnapshot,
}

impl PreferencesView {
    pub(crate) const fn new(
        theme: ThemeMode,
        locale: LocaleCode,
        document: DocumentSnapshot,
    ) -> Self {
        Self {
            theme,
            language: locale.code(),
            language_label: locale.label(),
            direction: locale.direction(),
            document,
        }
    }
}

pub(crate) fn render_validation(
    field: &str,
    input: &str,
    result: &ValidationResult,
    bundle: &TranslationBundle,
    format: OutputFormat,
) -> CliResult<String> {
    let message = localized_message(result, bundle);
    match format {
        OutputFormat::Json => to_json(&FieldView {
            field,
            input,
            is_valid: result.is_valid(),
            error: result.error(),
            message,
        }),
        OutputFormat::Table => {
            let mut text = String::new();
            match message {
                None => push_line(&mut text, format_args!("{field}: valid")),
                Some(message) => {
                    push_line(&mut text, format_args!("{field}: invalid"));
                    push_line(&mut text, format_args!("reason: {message}"));
                }
            }
            Ok(text)
        }
    }
}

pub(crate) fn render_sanitized(
    input: &str,
    sanitized: &str,
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(&SanitizedView { input, sanitized }),
        OutputFormat::Table => Ok(format!("{sanitized}\n")),
    }
}

pub(crate) fn render_form_report(
    form: &str,
    report: &FormReport,
    bundle: &TranslationBundle,
    format: OutputFormat,
) -> CliResult<String> {
    let errors = report
        .errors()
        .iter()
        .map(|error| FormErrorView {
            field: error.field,
            key: error.key,
            error: &error.message,
            message: bundle.text(error.key, &error.message),
        })
        .collect::<Vec<_>>();

    match format {
        OutputFormat::Json => to_json(&FormView {
            form,
            is_valid: report.is_valid(),
            errors,
        }),
        OutputFormat::Table => {
            let mut text = String::new();
            if errors.is_empty() {
                push_line(&mut text, format_args!("{form}: valid"));
                return Ok(text);
            }
            push_line(&mut text, format_args!("{:<14} MESSAGE", "FIELD"));
            for error in &errors {
                push_line(
                    &mut text,
                    format_args!("{:<14} {}", error.field, error.message),
                );
            }
            Ok(text)
        }
    }
}

pub(crate) fn render_preferences(
    view: &PreferencesView,
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(view),
        OutputFormat::Table => {
            let mut text = String::new();
            push_line(&mut text, format_args!("theme: {}", view.theme.as_str()));
            push_line(
                &mut text,
                format_args!("language: {} ({})", view.language, view.language_label),
            );
            push_line(
                &mut text,
                format_args!("direction: {}", view.direction.as_str()),
            );
            push_line(
                &mut text,
                format_args!("dark: {}", view.document.has_class(DARK_CLASS)),
            );
            push_line(
                &mut text,
                format_args!("style overrides: {}", view.document.style_len()),
            );
            Ok(text)
        }
    }
}

fn localized_message(result: &ValidationResult, bundle: &TranslationBundle) -> Option<String> {
    let issue = result.issue()?;
    Some(bundle.text(issue.i18n_key(), &issue.to_string()))
}

fn to_json(value: &impl Serialize) -> CliResult<String> {
    let mut text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    text.push('\n');
    Ok(text)
}

fn push_line(text: &mut String, line: std::fmt::Arguments<'_>) {
    let _ = writeln!(text, "{line}");
}
