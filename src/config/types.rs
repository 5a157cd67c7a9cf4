//! Configuration types for rundown
//!
//! This module contains configuration structures and related types
//! used throughout the application.

use log::LevelFilter;

use super::constants::*;
use crate::schedule::ImportVariant;
use crate::utils::time::DiffStrategy;

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    /// Field separator of the spreadsheet export
    pub separator: char,
    /// Zero-based logical column holding the item name
    pub name_column: usize,
    /// Import variant controlling JSON field order and fallback duration
    pub import_variant: ImportVariant,
    /// Fallback duration override; the variant default applies when unset
    pub default_duration: Option<String>,
    /// Rounding strategy for the remaining-time display
    pub diff_strategy: DiffStrategy,
    /// Refresh interval of the rundown position in milliseconds
    pub tick_interval_ms: u64,
    /// Prefix of the generated session identifier
    pub session_prefix: String,
    /// Number of epoch-millisecond digits appended to the identifier
    pub session_digits: usize,
    /// Whether the current year is embedded in the identifier
    pub embed_year: bool,
    /// Base URL embedded in the share link
    pub share_origin: String,
    /// Log level
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            name_column: DEFAULT_NAME_COLUMN,
            import_variant: ImportVariant::default(),
            default_duration: None,
            diff_strategy: DiffStrategy::default(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            session_prefix: DEFAULT_SESSION_PREFIX.to_string(),
            session_digits: DEFAULT_SESSION_DIGITS,
            embed_year: false,
            share_origin: DEFAULT_SHARE_ORIGIN.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the logical column holding the item name
    pub fn with_name_column(mut self, name_column: usize) -> Self {
        self.name_column = name_column;
        self
    }

    /// Sets the import variant
    pub fn with_import_variant(mut self, variant: ImportVariant) -> Self {
        self.import_variant = variant;
        self
    }

    /// Sets the fallback duration override
    pub fn with_default_duration(mut self, duration: impl Into<String>) -> Self {
        self.default_duration = Some(duration.into());
        self
    }

    /// Sets the rounding strategy for the remaining-time display
    pub fn with_diff_strategy(mut self, strategy: DiffStrategy) -> Self {
        self.diff_strategy = strategy;
        self
    }

    /// Sets the refresh interval of the rundown position
    pub fn with_tick_interval(mut self, interval_ms: u64) -> Self {
        self.tick_interval_ms = interval_ms;
        self
    }

    /// Sets the prefix of the session identifier
    pub fn with_session_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.session_prefix = prefix.into();
        self
    }

    /// Sets the number of timestamp digits in the session identifier
    pub fn with_session_digits(mut self, digits: usize) -> Self {
        self.session_digits = digits;
        self
    }

    /// Sets whether the current year is embedded in the identifier
    pub fn with_embed_year(mut self, embed_year: bool) -> Self {
        self.embed_year = embed_year;
        self
    }

    /// Sets the base URL embedded in the share link
    pub fn with_share_origin(mut self, origin: impl Into<String>) -> Self {
        self.share_origin = origin.into();
        self
    }

    /// Sets the log level
    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Returns the fallback duration for rows without a usable length
    pub fn fallback_duration(&self) -> &str {
        self.default_duration
            .as_deref()
            .unwrap_or_else(|| self.import_variant.default_duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.separator, DEFAULT_SEPARATOR);
        assert_eq!(config.name_column, DEFAULT_NAME_COLUMN);
        assert_eq!(config.import_variant, ImportVariant::LengthFirst);
        assert_eq!(config.diff_strategy, DiffStrategy::AsymmetricRounding);
        assert_eq!(config.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(!config.embed_year);
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_separator(';')
            .with_import_variant(ImportVariant::NameFirst)
            .with_diff_strategy(DiffStrategy::FixedEpsilon)
            .with_tick_interval(1000)
            .with_session_prefix("PenPixels")
            .with_embed_year(true)
            .with_log_level(LevelFilter::Debug);

        assert_eq!(config.separator, ';');
        assert_eq!(config.import_variant, ImportVariant::NameFirst);
        assert_eq!(config.diff_strategy, DiffStrategy::FixedEpsilon);
        assert_eq!(config.tick_interval_ms, 1000);
        assert_eq!(config.session_prefix, "PenPixels");
        assert!(config.embed_year);
    }

    #[test]
    fn test_fallback_duration() {
        let config = Config::new();
        assert_eq!(config.fallback_duration(), DEFAULT_DURATION_LENGTH_FIRST);

        let config = Config::new().with_import_variant(ImportVariant::NameFirst);
        assert_eq!(config.fallback_duration(), DEFAULT_DURATION_NAME_FIRST);

        let config = Config::new().with_default_duration("1:00");
        assert_eq!(config.fallback_duration(), "1:00");
    }

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_SEPARATOR, ',');
        assert_eq!(DEFAULT_NAME_COLUMN, 1);
        assert_eq!(DEFAULT_SESSION_DIGITS, 4);
        assert_eq!(LOG_LEVEL_ENV_VAR, "RUNDOWN_LOG");
    }
}
