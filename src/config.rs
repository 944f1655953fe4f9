//! Command-line configuration and logging setup.

use crate::domain::ExportFormat;
use clap::{Parser, ValueEnum};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "timestable")]
#[command(about = "Terminal multiplication table generator")]
#[command(version)]
pub struct Args {
    /// Prefill the "Number" field
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub number: String,

    /// Prefill the "Multiply till" field
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub upto: String,

    /// Submit the form once and print the result instead of opening the UI
    #[arg(long)]
    pub print: bool,

    /// Output format for --print
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: Level,

    /// Write logs to this file (the interactive UI logs nothing without one)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
    Tsv,
    Json,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ExportFormat::Text,
            OutputFormat::Csv => ExportFormat::Csv,
            OutputFormat::Tsv => ExportFormat::Tsv,
            OutputFormat::Json => ExportFormat::Json,
        }
    }
}

/// Installs the global tracing subscriber.
///
/// With a log file, logs are appended there without ANSI colors. Without
/// one, the interactive UI stays silent because it owns the terminal, and
/// print mode logs to stderr so stdout carries only the table.
pub fn init_logging(level: Level, log_file: Option<&Path>, interactive: bool) -> io::Result<()> {
    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}
