// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use log::{error, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::PathBuf;
use std::io::Write;
use clap::{Args, Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use archdocx::app_config::{self, Config};
use archdocx::Controller;

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
    /// Generate the architecture document (default command)
    Generate(GenerateArgs),

    /// Generate shell completions for archdocx
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
struct GenerateArgs {
    /// Output .docx file (defaults to ChatBot_RAG_Flutter_Arquitectura.docx)
    #[arg(short, long, env = "ARCHDOCX_OUTPUT")]
    output: Option<PathBuf>,

    /// JSON configuration file path
    #[arg(short, long = "config", env = "ARCHDOCX_CONFIG")]
    config_path: Option<PathBuf>,

    /// Do not open the document after writing it
    #[arg(long)]
    no_open: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// archdocx - Architecture document generator
///
/// Writes the ChatBot RAG Flutter architecture documentation as a Word document.
#[derive(Parser, Debug)]
#[command(name = "archdocx")]
#[command(args_conflicts_with_subcommands = true)]
#[command(author = "archdocx Team")]
#[command(version)]
#[command(about = "Generates the ChatBot RAG Flutter architecture document (.docx)")]
#[command(long_about = "archdocx writes the architecture documentation of the ChatBot RAG Flutter
application as a Word document and opens it with the default application.

EXAMPLES:
    archdocx                                   # Write ChatBot_RAG_Flutter_Arquitectura.docx and open it
    archdocx --no-open                         # Write the document only
    archdocx -o docs/arquitectura.docx         # Write to a different file
    archdocx -c archdocx.json                  # Read project facts from a config file
    archdocx completions bash > archdocx.bash  # Generate bash completions

CONFIGURATION:
    The optional JSON config accepts output_file, open_after_generate,
    log_level and a project object (name, architecture, technology, version,
    author). Command line options take precedence over the config file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    args: GenerateArgs,
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

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌",
            Level::Warn => "🚧",
            Level::Info => "✅",
            Level::Debug => "🔍",
            Level::Trace => "📋",
        }
    }

    // @returns: ANSI color for log level
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
        metadata.level() <= self.level.max(log::max_level())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let level = record.level();

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                Self::get_color_for_level(level),
                now,
                Self::get_emoji_for_level(level),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Info until the config says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    let options = match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "archdocx", &mut std::io::stdout());
            return Ok(());
        }
        Some(Commands::Generate(args)) => args,
        None => cli.args,
    };

    if let Err(e) = run_generate(options) {
        error!("Error generando documentación: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run_generate(options: GenerateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    // Config files are only read when given, never created
    let mut config = match &options.config_path {
        Some(config_path) => Config::load(config_path)
            .with_context(|| format!("Failed to load config file: {:?}", config_path))?,
        None => Config::default(),
    };

    // Override config with CLI options if provided
    if let Some(output) = &options.output {
        config.output_file = output.to_string_lossy().to_string();
    }

    if options.no_open {
        config.open_after_generate = false;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let controller = Controller::with_config(config)?;
    controller.run()?;
    Ok(())
}
