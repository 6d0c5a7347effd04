// src/generators/policy.rs
use std::fmt;

/// A single rule of the strength policy that a candidate failed.
///
/// Variants are declared in evaluation order; a verdict always lists its
/// violations in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
    LastCharInvalid,
    SecondLastCharInvalid,
    FirstCharInvalid,
}

impl Violation {
    pub const ALL: [Violation; 7] = [
        Violation::MissingUppercase,
        Violation::MissingLowercase,
        Violation::MissingDigit,
        Violation::MissingSpecial,
        Violation::LastCharInvalid,
        Violation::SecondLastCharInvalid,
        Violation::FirstCharInvalid,
    ];

    /// Human readable reason shown on the console.
    pub fn message(&self) -> &'static str {
        match self {
            Violation::MissingUppercase => "Missing uppercase characters",
            Violation::MissingLowercase => "Missing lowercase characters",
            Violation::MissingDigit => "Missing digits",
            Violation::MissingSpecial => "Missing special characters",
            Violation::LastCharInvalid => "Last character cannot be a digit or special character",
            Violation::SecondLastCharInvalid => {
                "Second last character cannot be a digit or special character"
            }
            Violation::FirstCharInvalid => "First character cannot be a special character",
        }
    }

    fn is_violated_by(&self, password: &str) -> bool {
        match self {
            Violation::MissingUppercase => !password.chars().any(|c| c.is_ascii_uppercase()),
            Violation::MissingLowercase => !password.chars().any(|c| c.is_ascii_lowercase()),
            Violation::MissingDigit => !password.chars().any(|c| c.is_ascii_digit()),
            Violation::MissingSpecial => !password.chars().any(is_special),
            Violation::LastCharInvalid => password.chars().next_back().map_or(false, is_digit_or_special),
            Violation::SecondLastCharInvalid => {
                password.chars().nth_back(1).map_or(false, is_digit_or_special)
            }
            Violation::FirstCharInvalid => password.chars().next().map_or(false, is_special),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of checking one candidate against every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyVerdict {
    violations: Vec<Violation>,
}

impl PolicyVerdict {
    pub fn is_strong(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

// Special characters are the 32 ASCII punctuation symbols.
pub fn is_special(c: char) -> bool {
    c.is_ascii_punctuation()
}

fn is_digit_or_special(c: char) -> bool {
    c.is_ascii_digit() || is_special(c)
}

/// Evaluate every rule against `password`, collecting all failures.
///
/// Positional rules only fire when the position exists, so strings shorter
/// than two characters are judged by the composition rules alone.
pub fn evaluate(password: &str) -> PolicyVerdict {
    let violations = Violation::ALL
        .iter()
        .copied()
        .filter(|rule| rule.is_violated_by(password))
        .collect();

    PolicyVerdict { violations }
}

#[cfg(test)]
#[path = "../tests/policy.rs"]
mod tests;
