//! Argument parsing and command dispatch for the `rentwise` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rentwise_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
use rentwise_ui::{FileStorage, PreferenceStore, ThemeMode, TranslationBundle};

use crate::commands::form::{handle_household_form, handle_profile_form};
use crate::commands::prefs::{
    handle_prefs_language, handle_prefs_reset, handle_prefs_show, handle_prefs_theme,
};
use crate::commands::validate::{handle_sanitize, handle_validate};
use crate::error::{CliResult, EXIT_OK};

const DEFAULT_PREFS_FILE: &str = "rentwise-prefs.json";

/// Parses CLI arguments, executes the requested command, and prints its
/// output. Returns the process exit code.
#[must_use]
pub fn run() -> i32 {
    let cli = Cli::parse();
    install_logging(&cli);

    match dispatch(cli) {
        Ok(output) => {
            print!("{}", output.text);
            output.exit_code
        }
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

fn install_logging(cli: &Cli) {
    let config = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.map_or_else(LogFormat::infer, LogFormat::from),
        build_id: env!("CARGO_PKG_VERSION"),
    };
    if let Err(err) = init_logging(&config) {
        eprintln!("warning: {err:#}");
    }
}

pub(crate) fn dispatch(cli: Cli) -> CliResult<CommandOutput> {
    let ctx = AppContext {
        prefs_file: cli.prefs_file,
        output: cli.output,
    };

    match cli.command {
        Command::Validate(command) => handle_validate(&ctx, &command),
        Command::Sanitize(args) => handle_sanitize(&ctx, &args),
        Command::Form(form) => match form {
            FormCommand::Household(args) => handle_household_form(&ctx, &args),
            FormCommand::Profile(args) => handle_profile_form(&ctx, &args),
        },
        Command::Prefs(prefs) => match prefs {
            PrefsCommand::Show => handle_prefs_show(&ctx),
            PrefsCommand::Theme(args) => handle_prefs_theme(&ctx, args.theme.into()),
            PrefsCommand::Language(args) => handle_prefs_language(&ctx, &args.code),
            PrefsCommand::Reset => handle_prefs_reset(&ctx),
        },
    }
}

/// Shared state handed to every command handler.
pub(crate) struct AppContext {
    pub(crate) prefs_file: PathBuf,
    pub(crate) output: OutputFormat,
}

impl AppContext {
    pub(crate) fn preference_store(&self) -> PreferenceStore<FileStorage> {
        PreferenceStore::load(FileStorage::new(&self.prefs_file))
    }

    /// Bundle for the persisted language, used to localise messages.
    pub(crate) fn bundle(&self) -> TranslationBundle {
        TranslationBundle::new(self.preference_store().locale())
    }
}

/// Rendered command output and the exit code it implies.
#[derive(Debug)]
pub(crate) struct CommandOutput {
    pub(crate) text: String,
    pub(crate) exit_code: i32,
}

impl CommandOutput {
    pub(crate) const fn success(text: String) -> Self {
        Self {
            text,
            exit_code: EXIT_OK,
        }
    }

    pub(crate) const fn with_code(text: String, exit_code: i32) -> Self {
        Self { text, exit_code }
    }
}

#[derive(Parser)]
#[command(
    name = "rentwise",
    about = "Validate Rentwise form input and manage UI preferences"
)]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "RENTWISE_PREFS_FILE",
        default_value = DEFAULT_PREFS_FILE
    )]
    pub(crate) prefs_file: PathBuf,
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub(crate) output: OutputFormat,
    #[arg(long, global = true, env = "RENTWISE_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub(crate) log_level: String,
    #[arg(long, global = true, value_enum)]
    pub(crate) log_format: Option<LogFormatArg>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Check a single field value.
    #[command(subcommand)]
    Validate(ValidateCommand),
    /// Strip angle brackets and surrounding whitespace from text.
    Sanitize(SanitizeArgs),
    /// Check a complete form and report every failing field.
    #[command(subcommand)]
    Form(FormCommand),
    /// Inspect or change the persisted theme and language.
    #[command(subcommand)]
    Prefs(PrefsCommand),
}

#[derive(Subcommand)]
pub(crate) enum ValidateCommand {
    Email(TextArgs),
    Phone(TextArgs),
    Rent(RentArgs),
    DueDay(DueDayArgs),
    Household(TextArgs),
    DisplayName(TextArgs),
}

#[derive(Args)]
pub(crate) struct TextArgs {
    pub(crate) value: String,
}

#[derive(Args)]
pub(crate) struct RentArgs {
    #[arg(allow_negative_numbers = true)]
    pub(crate) amount: f64,
}

#[derive(Args)]
pub(crate) struct DueDayArgs {
    #[arg(allow_negative_numbers = true)]
    pub(crate) day: i64,
}

#[derive(Args)]
pub(crate) struct SanitizeArgs {
    pub(crate) text: String,
}

#[derive(Subcommand)]
pub(crate) enum FormCommand {
    Household(HouseholdArgs),
    Profile(ProfileArgs),
}

#[derive(Args)]
pub(crate) struct HouseholdArgs {
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) rent: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) due_day: i64,
}

#[derive(Args)]
pub(crate) struct ProfileArgs {
    #[arg(long)]
    pub(crate) display_name: String,
    #[arg(long)]
    pub(crate) email: String,
    #[arg(long)]
    pub(crate) phone: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum PrefsCommand {
    Show,
    Theme(ThemeArgs),
    Language(LanguageArgs),
    Reset,
}

#[derive(Args)]
pub(crate) struct ThemeArgs {
    #[arg(value_enum)]
    pub(crate) theme: ThemeArg,
}

#[derive(Args)]
pub(crate) struct LanguageArgs {
    pub(crate) code: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ThemeArg {
    Light,
    Dark,
    CoffeeCrash,
}

impl From<ThemeArg> for ThemeMode {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
            ThemeArg::CoffeeCrash => Self::CoffeeCrash,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Json => Self::Json,
        }
    }
}
