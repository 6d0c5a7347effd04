use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::generators::password::{
    CandidateSource, PasswordGenerator, RandomCandidates, ALPHABET, MIN_PASSWORD_LENGTH,
};
use crate::generators::policy::{evaluate, Violation};
use crate::generators::{AttemptEvent, GeneratorError};
use crate::test_helpers::{EventLog, ScriptedCandidates};

fn ignore(_: &AttemptEvent<'_>) {}

#[test]
fn alphabet_has_94_distinct_symbols() {
    let mut symbols = ALPHABET.to_vec();
    symbols.sort_unstable();
    symbols.dedup();
    assert_eq!(symbols.len(), 94);
    assert_eq!(ALPHABET.len(), 94);
    assert!(ALPHABET.iter().all(|b| b.is_ascii_alphanumeric() || b.is_ascii_punctuation()));
}

#[test]
fn random_candidates_have_requested_length() {
    let mut source = RandomCandidates::new(ChaCha8Rng::seed_from_u64(7));
    for len in [0, 1, 8, 12, 64] {
        let candidate = source.next_candidate(len);
        assert_eq!(candidate.chars().count(), len);
        assert!(candidate.bytes().all(|b| ALPHABET.contains(&b)));
    }
}

#[test]
fn counts_failed_attempts_before_accepting() {
    let source = ScriptedCandidates::new(&["1234567!", "Ab3$xyZq"]);
    let mut generator = PasswordGenerator::with_source(source);
    let mut log = EventLog::default();

    let result = generator.generate_password(8, &mut log).unwrap();
    let events = log.events;

    assert_eq!(result.attempts, 2);
    assert_eq!(result.password, "Ab3$xyZq");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].0, 1);
    assert_eq!(events[0].1, "1234567!");
    assert_eq!(
        events[0].2,
        vec![
            Violation::MissingUppercase,
            Violation::MissingLowercase,
            Violation::LastCharInvalid,
            Violation::SecondLastCharInvalid,
        ]
    );
    assert_eq!(events[1], (2, "Ab3$xyZq".to_string(), Vec::new()));
}

#[test]
fn first_strong_candidate_stops_the_loop() {
    let mut generator = PasswordGenerator::with_source(ScriptedCandidates::new(&["Ab3$xyZq", "unused"]));
    let result = generator.generate_password(8, &mut ignore).unwrap();
    assert_eq!(result.attempts, 1);
}

#[test]
fn rejects_short_lengths_without_sampling() {
    let mut generator = PasswordGenerator::with_source(ScriptedCandidates::new(&[]));
    for length in [0, 2, 7] {
        let err = generator.generate_password(length, &mut ignore).unwrap_err();
        assert_eq!(
            err,
            GeneratorError::InvalidLength {
                length,
                minimum: MIN_PASSWORD_LENGTH
            }
        );
    }
}

#[test]
fn attempt_limit_stops_retrying() {
    let source = ScriptedCandidates::new(&["aaaaaaaa", "bbbbbbbb", "cccccccc"]);
    let mut generator = PasswordGenerator::with_source(source).with_max_attempts(Some(2));
    let mut log = EventLog::default();

    let err = generator.generate_password(8, &mut log).unwrap_err();

    assert_eq!(err, GeneratorError::AttemptLimitExceeded { limit: 2 });
    assert_eq!(log.events.len(), 2);
}

#[test]
fn seeded_generation_terminates_with_valid_passwords() {
    for seed in 0..200 {
        let source = RandomCandidates::new(ChaCha8Rng::seed_from_u64(seed));
        let mut generator = PasswordGenerator::with_source(source).with_max_attempts(Some(10_000));
        let mut log = EventLog::default();

        let result = generator
            .generate_password(8, &mut log)
            .unwrap_or_else(|e| panic!("seed {} did not terminate: {}", seed, e));

        assert_eq!(result.attempts, log.events.len() as u64);
        assert_eq!(result.password.len(), 8);
        assert!(result.password.bytes().all(|b| ALPHABET.contains(&b)));
        assert!(evaluate(&result.password).is_strong());
    }
}

#[test]
fn thread_rng_generator_honours_length() {
    let mut generator = PasswordGenerator::new().with_max_attempts(Some(10_000));
    for len in [8, 12, 20, 40] {
        let result = generator.generate_password(len, &mut ignore).unwrap();
        assert_eq!(result.password.len(), len, "Expected {} chars, got {}", len, result.password.len());
        assert!(evaluate(&result.password).is_strong());
    }
}
