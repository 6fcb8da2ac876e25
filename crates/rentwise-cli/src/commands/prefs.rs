//! Persisted theme and language preferences.

use anyhow::Error;
use rentwise_ui::{
    DocumentSnapshot, FileStorage, LocaleCode, PreferenceError, PreferenceStore, ThemeMode, apply,
};
use tracing::info;

use crate::cli::{AppContext, CommandOutput};
use crate::error::{CliError, CliResult};
use crate::output::{PreferencesView, render_preferences};

pub(crate) fn handle_prefs_show(ctx: &AppContext) -> CliResult<CommandOutput> {
    render_store(ctx, &ctx.preference_store())
}

pub(crate) fn handle_prefs_theme(ctx: &AppContext, theme: ThemeMode) -> CliResult<CommandOutput> {
    let mut store = ctx.preference_store();
    store
        .set_theme(theme)
        .map_err(|err| map_preference_error(err, "theme"))?;
    info!(theme = theme.as_str(), "theme updated");
    render_store(ctx, &store)
}

pub(crate) fn handle_prefs_language(ctx: &AppContext, code: &str) -> CliResult<CommandOutput> {
    let mut store = ctx.preference_store();
    store
        .set_language(code)
        .map_err(|err| map_preference_error(err, "language"))?;
    info!(language = store.locale().code(), "language updated");
    render_store(ctx, &store)
}

pub(crate) fn handle_prefs_reset(ctx: &AppContext) -> CliResult<CommandOutput> {
    let mut store = ctx.preference_store();
    store
        .reset()
        .map_err(|err| map_preference_error(err, "preferences"))?;
    info!("preferences reset");
    render_store(ctx, &store)
}

fn render_store(
    ctx: &AppContext,
    store: &PreferenceStore<FileStorage>,
) -> CliResult<CommandOutput> {
    let mut document = DocumentSnapshot::new();
    apply(&store.presentation(), &mut document);
    let view = PreferencesView::new(store.theme(), store.locale(), document);
    let text = render_preferences(&view, ctx.output)?;
    Ok(CommandOutput::success(text))
}

fn map_preference_error(err: PreferenceError, what: &str) -> CliError {
    match err {
        PreferenceError::UnknownLanguage { code } => {
            let known = LocaleCode::all()
                .into_iter()
                .map(LocaleCode::code)
                .collect::<Vec<_>>()
                .join(", ");
            CliError::validation(format!(
                "unknown language code '{code}' (expected one of {known})"
            ))
        }
        err @ PreferenceError::Persistence { .. } => {
            CliError::failure(Error::new(err).context(format!("failed to persist {what}")))
        }
    }
}
