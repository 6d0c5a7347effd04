// src/cli/prompt.rs
use std::io::{self, BufRead};

use inquire::Text;
use thiserror::Error;

use super::output::{OutputSink, Tone};
use crate::generators::MIN_PASSWORD_LENGTH;

pub const LENGTH_PROMPT: &str = "Enter the desired password length (minimum 8):";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid input! Please enter a valid integer.")]
    InvalidLengthInput(String),

    #[error("Password length should be at least {}.", MIN_PASSWORD_LENGTH)]
    LengthBelowMinimum(String),

    #[error("Password length {0} is too large.")]
    LengthTooLarge(String),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed before a valid length was entered")]
    Closed,
}

impl InputError {
    /// Errors the length provider handles itself by asking again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            InputError::InvalidLengthInput(_)
                | InputError::LengthBelowMinimum(_)
                | InputError::LengthTooLarge(_)
        )
    }
}

/// Where raw answers come from. `None` means no more input.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError>;

    /// Whether the source shows the prompt text itself.
    fn renders_prompt(&self) -> bool {
        false
    }
}

/// Asks on the terminal through inquire.
pub struct InteractivePrompt;

impl LineSource for InteractivePrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        Ok(Some(Text::new(prompt).prompt()?))
    }

    fn renders_prompt(&self) -> bool {
        true
    }
}

/// Reads one answer per line, e.g. from piped stdin.
pub struct ReaderPrompt<R> {
    reader: R,
}

impl<R: BufRead> ReaderPrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderPrompt<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        log::debug!("Reading answer for '{}'", prompt);
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Classify one answer. Anything made only of digits (with an optional
/// sign) is an integer, even when it is too large to be a length.
pub fn parse_length(raw: &str) -> Result<usize, InputError> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::InvalidLengthInput(trimmed.to_string()));
    }
    if negative {
        return Err(InputError::LengthBelowMinimum(trimmed.to_string()));
    }

    match digits.parse::<usize>() {
        Ok(length) if length >= MIN_PASSWORD_LENGTH => Ok(length),
        Ok(_) => Err(InputError::LengthBelowMinimum(trimmed.to_string())),
        Err(_) => Err(InputError::LengthTooLarge(trimmed.to_string())),
    }
}

/// Keep asking until a length of at least 8 is entered.
///
/// Bad answers are reported on `sink` and never end the loop; only a closed
/// or interrupted input does.
pub fn request_length<L, S>(source: &mut L, sink: &mut S) -> Result<usize, InputError>
where
    L: LineSource + ?Sized,
    S: OutputSink + ?Sized,
{
    loop {
        if !source.renders_prompt() {
            sink.emit(LENGTH_PROMPT, Tone::Progress);
        }
        let raw = source.read_line(LENGTH_PROMPT)?.ok_or(InputError::Closed)?;

        match parse_length(&raw) {
            Ok(length) => {
                sink.blank();
                sink.emit("Password length is meeting the threshold.", Tone::Success);
                sink.blank();
                return Ok(length);
            }
            Err(e) if e.is_recoverable() => {
                log::debug!("Rejected length input: {:?}", e);
                sink.blank();
                sink.emit(&e.to_string(), Tone::Failure);
                sink.blank();
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
#[path = "../tests/prompt.rs"]
mod tests;
