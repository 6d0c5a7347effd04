// src/models.rs
use std::time::Duration;

use crate::generators::{GeneratorError, MIN_PASSWORD_LENGTH};

/// A validated request for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
}

impl GenerationRequest {
    pub fn new(length: usize) -> Result<Self, GeneratorError> {
        if length < MIN_PASSWORD_LENGTH {
            return Err(GeneratorError::InvalidLength {
                length,
                minimum: MIN_PASSWORD_LENGTH,
            });
        }
        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

// Outcome of a finished generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub password: String,
    pub attempts: u64,
    pub elapsed: Duration,
}
