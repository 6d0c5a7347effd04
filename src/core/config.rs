// src/core/config.rs
use std::env;
use std::time::Duration;

use log::LevelFilter;

use crate::cli::Args;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Reporting
    pub report_delay: Duration,
    pub color: bool,

    // Generation
    pub max_attempts: Option<u64>,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_delay: Duration::from_millis(1000),
            color: true,
            max_attempts: None,
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(val) = lookup("PASSGEN_REPORT_DELAY_MS") {
            match val.parse::<u64>() {
                Ok(ms) => config.report_delay = Duration::from_millis(ms),
                Err(_) => log::warn!("Ignoring invalid PASSGEN_REPORT_DELAY_MS '{}'", val),
            }
        }

        if let Some(val) = lookup("PASSGEN_MAX_ATTEMPTS") {
            match val.parse::<u64>() {
                Ok(limit) => config.max_attempts = attempt_limit(limit),
                Err(_) => log::warn!("Ignoring invalid PASSGEN_MAX_ATTEMPTS '{}'", val),
            }
        }

        // https://no-color.org: any non-empty value disables color
        if lookup("NO_COLOR").map_or(false, |v| !v.is_empty()) {
            config.color = false;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        config
    }

    /// Command line flags win over the environment.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(ms) = args.delay_ms {
            self.report_delay = Duration::from_millis(ms);
        }
        if let Some(limit) = args.max_attempts {
            self.max_attempts = attempt_limit(limit);
        }
        if args.no_color {
            self.color = false;
        }
    }
}

fn attempt_limit(limit: u64) -> Option<u64> {
    if limit == 0 {
        None
    } else {
        Some(limit)
    }
}

#[cfg(test)]
#[path = "../tests/config.rs"]
mod tests;
