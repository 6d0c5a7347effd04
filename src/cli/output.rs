// src/cli/output.rs
use std::thread;
use std::time::Duration;

use console::{style, Color, Term};

use crate::generators::{AttemptEvent, AttemptObserver};
use crate::utils::dashed_line;

/// Category of a console line. Only affects coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Progress,
    Success,
    Failure,
    Data,
    Rule,
}

impl Tone {
    fn color(&self) -> Color {
        match self {
            Tone::Info => Color::Blue,
            Tone::Progress => Color::Yellow,
            Tone::Success => Color::Green,
            Tone::Failure => Color::Red,
            Tone::Data => Color::Magenta,
            Tone::Rule => Color::Cyan,
        }
    }
}

/// Anything that can show text to the user.
pub trait OutputSink {
    fn emit(&mut self, text: &str, tone: Tone);

    fn blank(&mut self) {
        self.emit("", Tone::Info);
    }

    fn rule(&mut self) {
        self.emit(&dashed_line(), Tone::Rule);
    }

    /// Title framed by dashed lines.
    fn banner(&mut self, title: &str, tone: Tone) {
        self.rule();
        self.emit(title, tone);
        self.rule();
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn emit(&mut self, text: &str, tone: Tone) {
        (**self).emit(text, tone)
    }
}

pub struct ConsoleSink {
    term: Term,
    colored: bool,
}

impl ConsoleSink {
    pub fn stdout(colored: bool) -> Self {
        Self {
            term: Term::stdout(),
            colored,
        }
    }

    /// Colors follow console's stdout detection (tty, `CLICOLOR`);
    /// `colored == false` turns them off regardless.
    fn render(&self, text: &str, tone: Tone) -> String {
        if self.colored && !text.is_empty() {
            style(text).fg(tone.color()).for_stdout().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputSink for ConsoleSink {
    fn emit(&mut self, text: &str, tone: Tone) {
        let line = self.render(text, tone);
        if let Err(e) = self.term.write_line(&line) {
            log::warn!("Failed to write to terminal: {}", e);
        }
    }
}

/// Renders generator attempts onto a sink, pausing before each verdict.
pub struct AttemptReporter<S> {
    sink: S,
    delay: Duration,
}

impl<S: OutputSink> AttemptReporter<S> {
    pub fn new(sink: S, delay: Duration) -> Self {
        Self { sink, delay }
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<S: OutputSink> AttemptObserver for AttemptReporter<S> {
    fn on_attempt(&mut self, event: &AttemptEvent<'_>) {
        let sink = &mut self.sink;

        sink.emit(&format!("Attempt {}: Generating password...", event.attempt), Tone::Progress);
        sink.emit(&format!("Generated password: {}", event.candidate), Tone::Data);
        sink.blank();
        sink.emit("Checking if the generated password is as per standards...", Tone::Progress);
        sink.blank();

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        if event.accepted() {
            sink.emit("Generated password is strong and meets all the requirements.", Tone::Success);
            sink.blank();
            return;
        }

        sink.emit("Generated password is not strong. Reasons:", Tone::Failure);
        sink.blank();
        for violation in event.verdict.violations() {
            sink.emit(&format!("- {}", violation), Tone::Failure);
        }
        sink.blank();
        sink.emit("Generating a new password...", Tone::Failure);
        sink.blank();
    }
}

#[cfg(test)]
#[path = "../tests/output.rs"]
mod tests;
