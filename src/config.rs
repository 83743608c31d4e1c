//! Configuration management for the student roster.
//!
//! This module handles loading and validating configuration from
//! environment variables. A `.env` file is honored if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the roster front end.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (default: "error")
    pub log_level: String,

    /// How many recent activities the in-memory feed retains (default: 100)
    pub activity_capacity: usize,

    /// Default path for CSV export (default: "students.csv")
    pub export_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROSTER_LOG_LEVEL`: Logging level (default: "error")
    /// - `ROSTER_ACTIVITY_CAPACITY`: Activity feed size (default: 100, must be positive)
    /// - `ROSTER_EXPORT_PATH`: Default CSV export path (default: "students.csv")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("ROSTER_LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let activity_capacity = Self::parse_env_usize("ROSTER_ACTIVITY_CAPACITY", 100)?;
        if activity_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ROSTER_ACTIVITY_CAPACITY".to_string(),
                reason: "Must be a positive number".to_string(),
            });
        }

        let export_path =
            env::var("ROSTER_EXPORT_PATH").unwrap_or_else(|_| "students.csv".to_string());

        Ok(Config {
            log_level,
            activity_capacity,
            export_path,
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
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            activity_capacity: 100,
            export_path: "students.csv".to_string(),
        }
    }
}
