use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;

mod cli;
mod core;
mod generators;
mod logging;
mod models;
mod utils;

#[cfg(test)]
#[path = "tests/test_helpers.rs"]
mod test_helpers;

use crate::cli::{
    request_length, Args, AttemptReporter, ConsoleSink, InputError, InteractivePrompt, OutputSink,
    ReaderPrompt, Tone,
};
use crate::core::config::Config;
use crate::core::session::GenerationSession;
use crate::generators::password::CandidateSource;
use crate::generators::PasswordGenerator;
use crate::utils::format_elapsed;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let args = Args::parse();
    let mut config = Config::load();
    config.apply_args(&args);

    logging::init(config.log_level);
    if dotenv_loaded {
        log::debug!("Loaded .env file");
    }
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let mut sink = ConsoleSink::stdout(config.color);
    let mut session = GenerationSession::new();
    let mut generator = PasswordGenerator::new().with_max_attempts(config.max_attempts);

    run(&args, &config, &mut generator, &mut sink, &mut session)
}

fn run<C, S>(
    args: &Args,
    config: &Config,
    generator: &mut PasswordGenerator<C>,
    sink: &mut S,
    session: &mut GenerationSession,
) -> anyhow::Result<()>
where
    C: CandidateSource,
    S: OutputSink,
{
    sink.rule();
    sink.emit("Welcome to Password Generator!", Tone::Info);
    sink.emit("This program generates a strong password based on your input.", Tone::Info);
    sink.blank();

    sink.banner("Password Generator", Tone::Data);

    let length = match args.length {
        Some(length) => usize::try_from(length).context("Password length does not fit in memory")?,
        None => read_length(sink).context("Could not read a password length")?,
    };
    log::info!("Generating a password of length {}", length);

    sink.banner("Generating Strong Password...", Tone::Progress);

    let mut reporter = AttemptReporter::new(sink, config.report_delay);
    let result = generator
        .generate_password(length, &mut reporter)
        .context("Password generation failed")?;
    let sink = reporter.into_inner();

    session.record(&result);
    log::debug!(
        "Session totals: {} attempts over {} runs",
        session.total_attempts(),
        session.runs()
    );

    sink.banner("Password Generation Complete.", Tone::Info);
    sink.blank();
    sink.emit(&format!("Generated Password: {}", result.password), Tone::Success);
    sink.emit(&format!("Time Taken: {}", format_elapsed(result.elapsed)), Tone::Success);
    sink.emit(&format!("Total Attempts: {}", session.total_attempts()), Tone::Success);
    sink.blank();
    sink.rule();

    sink.emit("Thank you for using Password Generator!", Tone::Info);
    Ok(())
}

fn read_length<S: OutputSink>(sink: &mut S) -> Result<usize, InputError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        request_length(&mut InteractivePrompt, sink)
    } else {
        log::debug!("stdin is not a terminal, reading lengths line by line");
        request_length(&mut ReaderPrompt::new(stdin.lock()), sink)
    }
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod tests;
