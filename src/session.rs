//! Session identity and share URL generation for rundown
//!
//! A viewer session gets a short display identifier derived from a fixed
//! prefix, optionally the current year, and the trailing digits of the
//! current epoch-millisecond count. There is no persistence and no
//! uniqueness guarantee beyond low collision probability within the same
//! process start.
//!
//! The ambient state (wall clock, share origin) sits behind the
//! [`Environment`] trait so the derivation is testable without real time.

use crate::config::{Config, DEFAULT_SESSION_DIGITS, DEFAULT_SESSION_PREFIX};
use chrono::{Datelike, Local, Utc};

/// Ambient capabilities the session derivation depends on
pub trait Environment {
    /// Returns the current epoch time in milliseconds
    fn now_millis(&self) -> i64;

    /// Returns the current calendar year
    fn current_year(&self) -> i32;

    /// Returns the base URL embedded in share links
    fn origin(&self) -> String;
}

/// Production environment backed by the system clock
#[derive(Debug, Clone)]
pub struct SystemEnvironment {
    origin: String,
}

impl SystemEnvironment {
    /// Creates a system environment with the given share origin
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }
}

impl Environment for SystemEnvironment {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn current_year(&self) -> i32 {
        Local::now().year()
    }

    fn origin(&self) -> String {
        self.origin.clone()
    }
}

/// Options controlling the session identifier derivation
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Fixed prefix of the identifier
    pub prefix: String,
    /// How many trailing epoch-millisecond digits are appended
    pub digits: usize,
    /// Whether the current year goes between prefix and digits
    pub embed_year: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_SESSION_PREFIX.to_string(),
            digits: DEFAULT_SESSION_DIGITS,
            embed_year: false,
        }
    }
}

impl SessionOptions {
    /// Builds session options from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            prefix: config.session_prefix.clone(),
            digits: config.session_digits,
            embed_year: config.embed_year,
        }
    }
}

/// A generated viewer session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The display/session identifier
    pub id: String,
    /// Share URL carrying the identifier as a query parameter
    pub share_url: String,
}

/// Derives a session identifier from the environment's clock
///
/// # Arguments
/// * `env` - Ambient clock and origin
/// * `options` - Prefix, digit count and year embedding
///
/// # Returns
/// Returns the identifier, e.g. `"Rundown4711"` or `"Rundown20264711"`
pub fn session_id(env: &dyn Environment, options: &SessionOptions) -> String {
    let millis = env.now_millis().to_string();
    let start = millis.len().saturating_sub(options.digits);
    let unique = &millis[start..];

    if options.embed_year {
        format!("{}{}{unique}", options.prefix, env.current_year())
    } else {
        format!("{}{unique}", options.prefix)
    }
}

/// Builds the share URL for an already generated identifier
pub fn share_url(env: &dyn Environment, id: &str) -> String {
    format!("{}?id={id}", env.origin())
}

/// Generates a session: one identifier and its share URL
///
/// The clock is read once, so the identifier in the URL always matches
/// the displayed one.
pub fn create_session(env: &dyn Environment, options: &SessionOptions) -> Session {
    let id = session_id(env, options);
    let share_url = share_url(env, &id);
    Session { id, share_url }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedEnvironment {
        millis: i64,
        year: i32,
        origin: &'static str,
    }

    impl Environment for FixedEnvironment {
        fn now_millis(&self) -> i64 {
            self.millis
        }

        fn current_year(&self) -> i32 {
            self.year
        }

        fn origin(&self) -> String {
            self.origin.to_string()
        }
    }

    fn fixed_env() -> FixedEnvironment {
        FixedEnvironment {
            millis: 1_724_832_001_234,
            year: 2026,
            origin: "https://rundown.example",
        }
    }

    #[test]
    fn test_session_id_trailing_digits() {
        let id = session_id(&fixed_env(), &SessionOptions::default());
        assert_eq!(id, "Rundown1234");
    }

    #[test]
    fn test_session_id_with_year() {
        let options = SessionOptions {
            embed_year: true,
            ..SessionOptions::default()
        };
        let id = session_id(&fixed_env(), &options);
        assert_eq!(id, "Rundown20261234");
    }

    #[test]
    fn test_session_id_custom_prefix_and_precision() {
        let options = SessionOptions {
            prefix: "PenPixels".to_string(),
            digits: 6,
            embed_year: false,
        };
        let id = session_id(&fixed_env(), &options);
        assert_eq!(id, "PenPixels001234");
    }

    #[test]
    fn test_session_id_short_millis() {
        // Fewer clock digits than requested: the whole count is used.
        let env = FixedEnvironment {
            millis: 42,
            year: 2026,
            origin: "https://rundown.example",
        };
        let options = SessionOptions {
            digits: 8,
            ..SessionOptions::default()
        };
        assert_eq!(session_id(&env, &options), "Rundown42");
    }

    #[test]
    fn test_create_session() {
        let session = create_session(&fixed_env(), &SessionOptions::default());
        assert_eq!(session.id, "Rundown1234");
        assert_eq!(session.share_url, "https://rundown.example?id=Rundown1234");
    }

    #[test]
    fn test_session_options_from_config() {
        let config = Config::new()
            .with_session_prefix("PenPixels")
            .with_session_digits(6)
            .with_embed_year(true);
        let options = SessionOptions::from_config(&config);
        assert_eq!(options.prefix, "PenPixels");
        assert_eq!(options.digits, 6);
        assert!(options.embed_year);
    }
}
