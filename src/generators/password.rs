// src/generators/password.rs
use std::time::Instant;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::ThreadRng;
use rand::Rng;

use super::{policy, AttemptEvent, AttemptObserver, GeneratorError, Result};
use crate::models::{GenerationRequest, GenerationResult};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Letters, digits and the 32 ASCII punctuation symbols.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
abcdefghijklmnopqrstuvwxyz\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Supplies the raw candidates the generator checks.
pub trait CandidateSource {
    fn next_candidate(&mut self, length: usize) -> String;
}

/// Draws every character independently and uniformly from [`ALPHABET`].
pub struct RandomCandidates<R> {
    rng: R,
    dist: Uniform<usize>,
}

impl RandomCandidates<ThreadRng> {
    pub fn from_thread_rng() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> RandomCandidates<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            dist: Uniform::from(0..ALPHABET.len()),
        }
    }
}

impl<R: Rng> CandidateSource for RandomCandidates<R> {
    fn next_candidate(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| ALPHABET[self.dist.sample(&mut self.rng)] as char)
            .collect()
    }
}

/// Samples candidates until one passes the strength policy.
pub struct PasswordGenerator<S = RandomCandidates<ThreadRng>> {
    source: S,
    max_attempts: Option<u64>,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self::with_source(RandomCandidates::from_thread_rng())
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CandidateSource> PasswordGenerator<S> {
    pub fn with_source(source: S) -> Self {
        PasswordGenerator {
            source,
            max_attempts: None,
        }
    }

    /// Give up after `limit` attempts instead of retrying forever.
    pub fn with_max_attempts(mut self, limit: Option<u64>) -> Self {
        self.max_attempts = limit;
        self
    }

    pub fn generate_password<O>(&mut self, length: usize, observer: &mut O) -> Result<GenerationResult>
    where
        O: AttemptObserver + ?Sized,
    {
        let request = GenerationRequest::new(length)?;
        self.generate(&request, observer)
    }

    /// Run the retry loop for an already validated request.
    ///
    /// Every candidate is reported to `observer`, including the accepted one,
    /// so the number of events always equals `attempts` in the result.
    pub fn generate<O>(&mut self, request: &GenerationRequest, observer: &mut O) -> Result<GenerationResult>
    where
        O: AttemptObserver + ?Sized,
    {
        let started = Instant::now();
        let mut attempts: u64 = 0;

        loop {
            if let Some(limit) = self.max_attempts {
                if attempts >= limit {
                    log::warn!("Giving up after {} attempts", limit);
                    return Err(GeneratorError::AttemptLimitExceeded { limit });
                }
            }

            attempts += 1;
            let candidate = self.source.next_candidate(request.length());
            let verdict = policy::evaluate(&candidate);

            // Never log the candidate itself
            log::debug!("Attempt {}: violations {:?}", attempts, verdict.violations());

            observer.on_attempt(&AttemptEvent {
                attempt: attempts,
                candidate: &candidate,
                verdict: &verdict,
            });

            if verdict.is_strong() {
                let elapsed = started.elapsed();
                log::info!(
                    "Accepted a {}-character password after {} attempts in {:?}",
                    request.length(),
                    attempts,
                    elapsed
                );
                return Ok(GenerationResult {
                    password: candidate,
                    attempts,
                    elapsed,
                });
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/password.rs"]
mod tests;
