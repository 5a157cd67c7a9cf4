//! CLI argument parsing for rundown
//!
//! This module contains the CLI argument definitions and parsing logic
//! using the clap crate.

use crate::config::{
    Config, DEFAULT_CSV_PATH, DEFAULT_NAME_COLUMN, DEFAULT_SCHEDULE_PATH, DEFAULT_SEPARATOR,
    DEFAULT_SESSION_DIGITS, DEFAULT_SESSION_PREFIX, DEFAULT_SHARE_ORIGIN,
    DEFAULT_TICK_INTERVAL_MS,
};
use crate::schedule::ImportVariant;
use crate::utils::time::DiffStrategy;
use clap::{Args, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// A broadcast rundown schedule converter and live timing viewer
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level
    #[arg(long, value_name = "LEVEL", global = true, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// The command to execute
    #[command(subcommand)]
    pub command: super::Commands,
}

impl Cli {
    /// Build a Config from CLI arguments and the active command
    pub fn build_config(&self, import: Option<&Import>, view: Option<&View>) -> Config {
        let mut config = Config::new().with_log_level(self.log_level);

        if let Some(import) = import {
            config = config
                .with_separator(import.separator)
                .with_name_column(import.name_column)
                .with_import_variant(import.variant);
            if let Some(duration) = &import.default_duration {
                config = config.with_default_duration(duration);
            }
        }

        if let Some(view) = view {
            config = config
                .with_diff_strategy(view.diff_strategy)
                .with_tick_interval(view.tick_interval)
                .with_session_prefix(&view.session_prefix)
                .with_session_digits(view.session_digits)
                .with_embed_year(view.embed_year)
                .with_share_origin(&view.origin);
        }

        config
    }
}

/// Import command arguments
#[derive(Args)]
pub struct Import {
    /// The CSV running-order export to read
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CSV_PATH)]
    pub input: PathBuf,

    /// The JSON schedule document to write
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_SCHEDULE_PATH)]
    pub output: PathBuf,

    /// Output variant controlling JSON field order and fallback duration
    #[arg(long, default_value_t = ImportVariant::default())]
    pub variant: ImportVariant,

    /// Fallback duration for rows without a usable length (the variant default applies when omitted)
    #[arg(long, value_name = "M:SS")]
    pub default_duration: Option<String>,

    /// Field separator of the spreadsheet export
    #[arg(long, default_value_t = DEFAULT_SEPARATOR)]
    pub separator: char,

    /// Zero-based column holding the item name
    #[arg(long, value_name = "INDEX", default_value_t = DEFAULT_NAME_COLUMN)]
    pub name_column: usize,
}

/// View command arguments
#[derive(Args)]
pub struct View {
    /// The JSON schedule document to track
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_SCHEDULE_PATH)]
    pub schedule: PathBuf,

    /// Rounding strategy for the remaining-time display
    #[arg(long, default_value_t = DiffStrategy::default())]
    pub diff_strategy: DiffStrategy,

    /// Refresh interval of the rundown position in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    pub tick_interval: u64,

    /// Prefix of the generated session identifier
    #[arg(long, default_value = DEFAULT_SESSION_PREFIX)]
    pub session_prefix: String,

    /// Number of timestamp digits appended to the session identifier
    #[arg(long, value_name = "N", default_value_t = DEFAULT_SESSION_DIGITS)]
    pub session_digits: usize,

    /// Embed the current year in the session identifier
    #[arg(long)]
    pub embed_year: bool,

    /// Base URL embedded in the share link
    #[arg(long, value_name = "URL", default_value = DEFAULT_SHARE_ORIGIN)]
    pub origin: String,
}
