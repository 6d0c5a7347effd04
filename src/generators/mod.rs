// src/generators/mod.rs
use thiserror::Error;

pub mod password;
pub mod policy;

pub use password::{PasswordGenerator, MIN_PASSWORD_LENGTH};
pub use policy::PolicyVerdict;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length {length} is below the minimum of {minimum}")]
    InvalidLength { length: usize, minimum: usize },

    #[error("No strong password found within {limit} attempts")]
    AttemptLimitExceeded { limit: u64 },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// What the generator reports after checking each candidate.
#[derive(Debug, Clone, Copy)]
pub struct AttemptEvent<'a> {
    pub attempt: u64,
    pub candidate: &'a str,
    pub verdict: &'a PolicyVerdict,
}

impl AttemptEvent<'_> {
    pub fn accepted(&self) -> bool {
        self.verdict.is_strong()
    }
}

/// Receives one event per attempt. Purely observational.
pub trait AttemptObserver {
    fn on_attempt(&mut self, event: &AttemptEvent<'_>);
}

impl<F> AttemptObserver for F
where
    F: FnMut(&AttemptEvent<'_>),
{
    fn on_attempt(&mut self, event: &AttemptEvent<'_>) {
        self(event)
    }
}
