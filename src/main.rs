// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};
use log::{LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod providers;
mod text;
mod translation;

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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a document with back-translation verification (default command)
    #[command(alias = "translate")]
    Translate(TranslateArgs),

    /// Generate shell completions for backtrip
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input text file to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output file for the translated transcript
    #[arg(short, long, default_value = "translated_output.txt")]
    output_path: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Words per chunk
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Beam width of the first translation attempt
    #[arg(long)]
    baseline_effort: Option<u32>,

    /// Beam width of the retry attempt
    #[arg(long)]
    escalated_effort: Option<u32>,

    /// Translation server endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// backtrip - Back-Translation Verified Machine Translation
///
/// Translates a source document chunk by chunk and verifies every chunk by
/// reverse-translating the tail of its translation back to the source
/// language. Chunks that fail verification are retried once at higher beam
/// width; chunks that still fail are emitted with a diagnostic annotation.
#[derive(Parser, Debug)]
#[command(name = "backtrip")]
#[command(version = "1.0.0")]
#[command(about = "Back-translation verified machine translation")]
#[command(long_about = "backtrip translates a document through an external translation server and \
verifies every chunk by round-tripping the tail of its translation.

EXAMPLES:
    backtrip dataset.txt                          # Translate using default config
    backtrip -o out.txt dataset.txt               # Write the transcript to out.txt
    backtrip --chunk-size 7 dataset.txt           # Use 7-word chunks
    backtrip --baseline-effort 3 --escalated-effort 8 dataset.txt
    backtrip --log-level debug dataset.txt        # Show per-chunk state transitions
    backtrip completions bash > backtrip.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, built-in
    defaults are used. Command-line flags override the config file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input text file to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output file for the translated transcript
    #[arg(short, long, default_value = "translated_output.txt")]
    output_path: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Words per chunk
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Beam width of the first translation attempt
    #[arg(long)]
    baseline_effort: Option<u32>,

    /// Beam width of the retry attempt
    #[arg(long)]
    escalated_effort: Option<u32>,

    /// Translation server endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,

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

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
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
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "backtrip", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            let translate_args = TranslateArgs {
                input_path,
                output_path: cli.output_path,
                config_path: cli.config_path,
                chunk_size: cli.chunk_size,
                baseline_effort: cli.baseline_effort,
                escalated_effort: cli.escalated_effort,
                endpoint: cli.endpoint,
                log_level: cli.log_level,
            };
            run_translate(translate_args).await
        }
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader::<_, Config>(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        Config::default()
    };

    // Override config with CLI options if provided
    if let Some(chunk_size) = options.chunk_size {
        config.chunk_size = chunk_size;
    }
    if let Some(baseline_effort) = options.baseline_effort {
        config.translation.baseline_effort = baseline_effort;
    }
    if let Some(escalated_effort) = options.escalated_effort {
        config.translation.escalated_effort = escalated_effort;
    }
    if let Some(endpoint) = &options.endpoint {
        config.translation.endpoint = endpoint.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Apply the configured log level unless the CLI already set one
    if options.log_level.is_none() {
        log::set_max_level(level_filter_for(&config.log_level));
    }

    let controller = Controller::with_config(config)?;
    controller.run(&options.input_path, &options.output_path).await
}

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
