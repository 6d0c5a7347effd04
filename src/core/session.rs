// src/core/session.rs
use crate::models::GenerationResult;

/// Running totals across every generation done by one process.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationSession {
    total_attempts: u64,
    runs: u64,
}

impl GenerationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &GenerationResult) {
        self.total_attempts += result.attempts;
        self.runs += 1;
    }

    pub fn total_attempts(&self) -> u64 {
        self.total_attempts
    }

    pub fn runs(&self) -> u64 {
        self.runs
    }
}

#[cfg(test)]
#[path = "../tests/session.rs"]
mod tests;
