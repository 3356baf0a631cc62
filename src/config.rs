//! Configuration management for the contact book.
//!
//! Settings come from environment variables, with a `.env` file loaded first if
//! present. Every setting has a default.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the contact book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the saved address book (default: "contacts.json")
    pub book_path: PathBuf,

    /// Records per page when listing (default: 10, must be > 0)
    pub page_size: usize,

    /// How many days ahead `birthdays` looks (default: 7)
    pub birthday_window_days: i64,

    /// Maximum number of name suggestions on a missed lookup (default: 3)
    pub max_suggestions: usize,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: Address book file (default: contacts.json)
    /// - `CONTACT_BOOK_PAGE_SIZE`: Records per page (default: 10)
    /// - `BIRTHDAY_WINDOW_DAYS`: Upcoming birthday window (default: 7)
    /// - `MAX_SUGGESTIONS`: Name suggestions on a miss (default: 3)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let book_path = env::var_os("CONTACT_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.book_path);

        let page_size = Self::parse_env_usize("CONTACT_BOOK_PAGE_SIZE", defaults.page_size)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days as u32)?
                .into();
        let max_suggestions = Self::parse_env_usize("MAX_SUGGESTIONS", defaults.max_suggestions)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            book_path,
            page_size,
            birthday_window_days,
            max_suggestions,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number of days, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from("contacts.json"),
            page_size: 10,
            birthday_window_days: 7,
            max_suggestions: 3,
            log_level: "warn".to_string(),
        }
    }
}
