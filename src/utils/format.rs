// src/utils/format.rs
use std::time::Duration;

const RULE_WIDTH: usize = 50;

// Separator between output sections
pub fn dashed_line() -> String {
    "-".repeat(RULE_WIDTH)
}

// Format a duration as seconds rounded to two decimals
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2} seconds", elapsed.as_secs_f64())
}

#[cfg(test)]
#[path = "../tests/format.rs"]
mod tests;
