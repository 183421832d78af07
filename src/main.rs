// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use srclate::app_config::{self, Config, TranslationProvider};
use srclate::app_controller::Controller;

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    LlamaCpp,
    Ollama,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::LlamaCpp => TranslationProvider::LlamaCpp,
            CliTranslationProvider::Ollama => TranslationProvider::Ollama,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn to_level_filter(level: app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a project directory (default command)
    #[command(alias = "translate")]
    Translate(TranslateArgs),

    /// Generate shell completions for srclate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input project directory to process
    #[arg(value_name = "INPUT_DIR")]
    input_dir: PathBuf,

    /// Output directory for the translated project
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Model name, alias, or tag to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Endpoint URL override for the active provider
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Source language code (e.g. 'ru', 'en', 'zh')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g. 'en', 'tr', 'ru')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Number of parallel worker tasks
    #[arg(short, long)]
    workers: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// srclate - translate the human-readable text in source files with a local LLM
///
/// Scans each source file into opaque and translatable zones, translates only
/// string literals and comments, and reassembles the file with its code
/// structure untouched.
#[derive(Parser, Debug)]
#[command(name = "srclate")]
#[command(version = "0.3.0")]
#[command(about = "LLM-powered source-code text translation")]
#[command(long_about = "srclate translates string literals and comments in source files using a
local LLM, leaving all code structure byte-for-byte unchanged.

EXAMPLES:
    srclate ./project ./project-en                 # Translate using default config
    srclate -p ollama -m qwen2.5:7b in/ out/       # Use Ollama with a specific model
    srclate -s ru -t en in/ out/                   # Translate from Russian to English
    srclate -w 8 in/ out/                          # Use 8 parallel workers
    srclate --log-level debug in/ out/             # Verbose logging
    srclate completions bash > srclate.bash        # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.

SUPPORTED PROVIDERS:
    llama-cpp - llama.cpp server, OpenAI-compatible chat endpoint
                (default: http://localhost:8080/v1/chat/completions)
    ollama    - Ollama generate endpoint
                (default: http://localhost:11434/api/generate)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input project directory to process
    #[arg(value_name = "INPUT_DIR")]
    input_dir: Option<PathBuf>,

    /// Output directory for the translated project
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Model name, alias, or tag to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Endpoint URL override for the active provider
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Source language code (e.g. 'ru', 'en', 'zh')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g. 'en', 'tr', 'ru')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Number of parallel worker tasks
    #[arg(short, long)]
    workers: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} [{}] {}\x1B[0m",
                color,
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

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize once at info; the level is raised or lowered after the
    // config is loaded.
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "srclate", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_dir = cli
                .input_dir
                .ok_or_else(|| anyhow!("INPUT_DIR is required when no subcommand is specified"))?;
            let output_dir = cli
                .output_dir
                .ok_or_else(|| anyhow!("OUTPUT_DIR is required when no subcommand is specified"))?;

            let translate_args = TranslateArgs {
                input_dir,
                output_dir,
                provider: cli.provider,
                model: cli.model,
                endpoint: cli.endpoint,
                source_language: cli.source_language,
                target_language: cli.target_language,
                workers: cli.workers,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_translate(translate_args).await
        }
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(to_level_filter(level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config
            .save_to_file(config_path)
            .context(format!("Failed to write default config to: {}", config_path))?;
        config
    };

    // Override config with CLI options if provided
    if let Some(provider) = &options.provider {
        config.translation.provider = provider.clone().into();
    }
    let provider_str = config.translation.provider.to_lowercase_string();
    if let Some(model) = &options.model {
        if let Some(provider_config) = config
            .translation
            .available_providers
            .iter_mut()
            .find(|p| p.provider_type == provider_str)
        {
            provider_config.model = model.clone();
        }
    }
    if let Some(endpoint) = &options.endpoint {
        if let Some(provider_config) = config
            .translation
            .available_providers
            .iter_mut()
            .find(|p| p.provider_type == provider_str)
        {
            provider_config.endpoint = endpoint.clone();
        }
    }
    if let Some(source_language) = &options.source_language {
        config.source_language = source_language.clone();
    }
    if let Some(target_language) = &options.target_language {
        config.target_language = target_language.clone();
    }
    if let Some(workers) = options.workers {
        config.workers = workers;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;

    if options.log_level.is_none() {
        log::set_max_level(to_level_filter(config.log_level));
    }

    let controller = Controller::with_config(config)?;
    let snapshot = controller
        .run(options.input_dir, options.output_dir)
        .await?;

    if snapshot.error_files > 0 {
        warn!("Run finished with {} failed file(s)", snapshot.error_files);
    }
    Ok(())
}
