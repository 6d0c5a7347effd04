use std::time::Duration;

use crate::core::session::GenerationSession;
use crate::models::GenerationResult;

fn result(attempts: u64) -> GenerationResult {
    GenerationResult {
        password: "Ab3$xyZq".to_string(),
        attempts,
        elapsed: Duration::from_millis(3),
    }
}

#[test]
fn accumulates_attempts_across_runs() {
    let mut session = GenerationSession::new();
    assert_eq!(session.total_attempts(), 0);

    session.record(&result(4));
    session.record(&result(1));

    assert_eq!(session.total_attempts(), 5);
    assert_eq!(session.runs(), 2);
}
