// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info, warn};

use translated_models::checks::{CheckContext, CheckRegistry, Tag};
use translated_models::language_utils::{
    iso_language_name, is_language_in_reference_catalog,
};
use translated_models::model_loader::load_models;
use translated_models::{LogLevel, Settings};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for check tags
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliTag {
    Translation,
    Models,
}

impl From<CliTag> for Tag {
    fn from(cli_tag: CliTag) -> Self {
        match cli_tag {
            CliTag::Translation => Tag::Translation,
            CliTag::Models => Tag::Models,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the registered checks and report every failure
    Check {
        /// Settings file path
        #[arg(short, long, default_value = "settings.json")]
        settings: PathBuf,

        /// Model declarations file path
        #[arg(short, long)]
        models: Option<PathBuf>,

        /// Only run checks registered under these tags
        #[arg(short, long, value_enum)]
        tag: Vec<CliTag>,

        /// Print messages as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved translated fields and languages of every model
    Resolve {
        /// Settings file path
        #[arg(short, long, default_value = "settings.json")]
        settings: PathBuf,

        /// Model declarations file path
        #[arg(short, long)]
        models: PathBuf,
    },

    /// List the configured languages
    Languages {
        /// Settings file path
        #[arg(short, long, default_value = "settings.json")]
        settings: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Validate translatable model declarations.
///
/// Checks the `translated_fields`, `languages` and `original_language`
/// attributes of every declared model, plus the active language settings.
#[derive(Parser, Debug)]
#[command(name = "translated-models")]
#[command(version)]
#[command(about = "Validate translatable model declarations")]
#[command(long_about = "Validates translatable model declarations against the host settings.

EXAMPLES:
    translated-models check -s settings.json -m models.json
    translated-models check -s settings.json -t translation
    translated-models resolve -s settings.json -m models.json
    translated-models languages -s settings.json
    translated-models completions bash > translated-models.bash")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: Logger that filters records above the given level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger::new(level)))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<ExitCode> {
    let cli = CommandLineOptions::parse();
    let cli_level = cli.log_level.clone().map(LogLevel::from);

    match cli.command {
        Commands::Check {
            settings,
            models,
            tag,
            json,
        } => {
            let settings = load_settings(&settings, cli_level)?;
            run_check(&settings, models.as_deref(), &tag, json)
        }
        Commands::Resolve { settings, models } => {
            let settings = load_settings(&settings, cli_level)?;
            run_resolve(&settings, &models)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Languages { settings } => {
            let settings = load_settings(&settings, cli_level)?;
            run_languages(&settings);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Completions { shell } => {
            CustomLogger::init(cli_level.unwrap_or_default().into())?;
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "translated-models", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load settings, falling back to defaults when the file doesn't exist.
///
/// The logger is installed once the level is known: the command line level
/// wins over the one in the settings file.
fn load_settings(path: &Path, cli_level: Option<LogLevel>) -> Result<Settings> {
    let found = path.exists();
    let settings = if found {
        Settings::from_file(path)
            .with_context(|| format!("Failed to load settings: {}", path.display()))?
    } else {
        Settings::default()
    };

    CustomLogger::init(cli_level.unwrap_or(settings.log_level).into())?;
    if !found {
        warn!(
            "Settings file not found at '{}', using built-in defaults.",
            path.display()
        );
    }
    Ok(settings)
}

fn run_check(
    settings: &Settings,
    models_path: Option<&Path>,
    tags: &[CliTag],
    json: bool,
) -> Result<ExitCode> {
    let models = match models_path {
        Some(path) => load_models(path)?,
        None => Vec::new(),
    };
    debug!("Checking {} model(s)", models.len());

    let registry = CheckRegistry::with_defaults();
    let context = CheckContext::new(settings, &models);
    let tags: Vec<Tag> = tags.iter().map(|tag| Tag::from(*tag)).collect();
    let messages = registry.run_checks(&context, (!tags.is_empty()).then_some(tags.as_slice()));

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&messages).context("Failed to serialize messages")?
        );
    } else {
        for message in &messages {
            println!("{}", message);
        }
    }

    if messages.is_empty() {
        info!("System check identified no issues.");
        Ok(ExitCode::SUCCESS)
    } else {
        info!("System check identified {} issue(s).", messages.len());
        Ok(ExitCode::FAILURE)
    }
}

fn run_resolve(settings: &Settings, models_path: &Path) -> Result<()> {
    for model in load_models(models_path)? {
        println!("{}", model.label());
        println!(
            "  translated_fields: {}",
            model.get_translated_fields(settings).join(", ")
        );
        println!("  languages: {}", model.get_languages(settings).join(", "));
    }
    Ok(())
}

fn run_languages(settings: &Settings) {
    if settings.is_default_languages() {
        warn!("The LANGUAGES setting is the built-in default.");
    }
    for (code, name) in settings.active_languages() {
        let known = if is_language_in_reference_catalog(code) {
            "known"
        } else {
            "unknown"
        };
        let iso_name = iso_language_name(code).unwrap_or("-");
        println!("{:<10} {:<28} {:<8} {}", code, name, known, iso_name);
    }
}
