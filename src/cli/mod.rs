// src/cli/mod.rs
use clap::Parser;

pub mod output;
pub mod prompt;

pub use output::{AttemptReporter, ConsoleSink, OutputSink, Tone};
pub use prompt::{request_length, InputError, InteractivePrompt, ReaderPrompt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a strong random password", long_about = None)]
pub struct Args {
    /// Password length (at least 8); prompts when omitted
    #[arg(long, short, env = "PASSGEN_LENGTH", value_parser = clap::value_parser!(u64).range(8..))]
    pub length: Option<u64>,

    /// Pause before each verdict, in milliseconds (0 disables)
    #[arg(long, env = "PASSGEN_REPORT_DELAY_MS")]
    pub delay_ms: Option<u64>,

    /// Stop after this many attempts (0 means unlimited)
    #[arg(long, env = "PASSGEN_MAX_ATTEMPTS")]
    pub max_attempts: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
