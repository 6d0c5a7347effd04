use std::collections::HashMap;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

use crate::cli::Args;
use crate::core::config::Config;

fn config_from(vars: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_without_environment() {
    let config = config_from(&[]);
    assert_eq!(config, Config::default());
    assert_eq!(config.report_delay, Duration::from_secs(1));
    assert_eq!(config.max_attempts, None);
    assert!(config.color);
}

#[test]
fn reads_environment_values() {
    let config = config_from(&[
        ("PASSGEN_REPORT_DELAY_MS", "0"),
        ("PASSGEN_MAX_ATTEMPTS", "500"),
        ("NO_COLOR", "1"),
        ("LOG_LEVEL", "Debug"),
    ]);

    assert_eq!(config.report_delay, Duration::ZERO);
    assert_eq!(config.max_attempts, Some(500));
    assert!(!config.color);
    assert_eq!(config.log_level, LevelFilter::Debug);
}

#[test]
fn ignores_invalid_values() {
    let config = config_from(&[
        ("PASSGEN_REPORT_DELAY_MS", "soon"),
        ("PASSGEN_MAX_ATTEMPTS", "-1"),
        ("NO_COLOR", ""),
        ("LOG_LEVEL", "loud"),
    ]);
    assert_eq!(config, Config::default());
}

#[test]
fn zero_attempt_limit_means_unlimited() {
    assert_eq!(config_from(&[("PASSGEN_MAX_ATTEMPTS", "0")]).max_attempts, None);
}

#[test]
fn flags_override_environment() {
    let mut config = config_from(&[("PASSGEN_REPORT_DELAY_MS", "250"), ("PASSGEN_MAX_ATTEMPTS", "10")]);
    let args = Args::parse_from(["strong_passgen", "--delay-ms", "5", "--max-attempts", "0", "--no-color"]);

    config.apply_args(&args);

    assert_eq!(config.report_delay, Duration::from_millis(5));
    assert_eq!(config.max_attempts, None);
    assert!(!config.color);
}
