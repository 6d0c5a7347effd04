// src/logging/mod.rs
use log::LevelFilter;

/// Route `log` records to stderr so they never mix with the password output.
///
/// `RUST_LOG`, when set, overrides `level`.
pub fn init(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(true)
        .target(env_logger::Target::Stderr)
        .try_init();

    if let Err(e) = result {
        eprintln!("Logger already initialised: {}", e);
    }
}
