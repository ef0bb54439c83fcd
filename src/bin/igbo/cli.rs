//! Command-line argument parsing for the `igbo` binary.

use clap::{Parser, ValueEnum};

/// Struct containing the CLI configuration for the interpreter.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the Igbo-keyword source file to run.
    pub file: std::path::PathBuf,

    /// Log level for the interpreter's own operational logging. This is
    /// unrelated to language diagnostics (undefined variables, parse
    /// errors, ...), which always print regardless of this setting.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    pub verbosity: LogLevel,
}

/// Enum for specifying the operational log level of the interpreter.
#[derive(ValueEnum, Clone, Copy, Default, Debug)]
pub enum LogLevel {
    /// The default log level. Only critical errors are logged.
    #[default]
    Error,
    /// Also logs warnings.
    Warn,
    /// Logs which file is read, how many tokens/statements were produced.
    Info,
    /// Logs internal interpreter state in detail.
    Debug,
    /// Logs everything, including per-token/per-statement tracing.
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}
