//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::io::{self, Write};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use chatlens::ChatlensError;
use chatlens::cli::Args;
use chatlens::config::ChatlensConfig;
use chatlens::core::output::write_records_csv;
use chatlens::core::{StopWords, analyze};
use chatlens::format::{OutputFormat, to_format_string, write_to_format};
use chatlens::parser::TranscriptParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let start = Instant::now();
    let config = load_config(args)?;

    let parser = TranscriptParser::with_config(config.parser);
    let transcript = parser.parse_file(&args.input)?;
    info!(
        input = %args.input.display(),
        records = transcript.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "parsed transcript"
    );

    if args.list_participants {
        let mut stdout = io::stdout().lock();
        for name in transcript.participants() {
            writeln!(stdout, "{}", name)?;
        }
        return Ok(());
    }

    if let Some(path) = &args.records_csv {
        write_records_csv(&transcript, path)?;
        info!(path = %path.display(), "wrote record table");
    }

    let selection = args.selection();
    if !selection.is_overall() && transcript.view(&selection).is_empty() {
        warn!(user = %selection, "no messages from this participant");
    }

    let report = analyze(&transcript, &selection, &config.analysis);
    let format: OutputFormat = args.format.into();

    match &args.output {
        Some(path) => {
            write_to_format(&report, path, format)?;
            info!(path = %path.display(), format = %format, "wrote report");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(to_format_string(&report, format)?.as_bytes())?;
            if format == OutputFormat::Json {
                writeln!(stdout)?;
            }
        }
    }

    debug!(elapsed_ms = start.elapsed().as_millis(), "done");
    Ok(())
}

/// Builds the effective configuration: config file first, then flags.
fn load_config(args: &Args) -> Result<ChatlensConfig, ChatlensError> {
    let mut config = match &args.config {
        Some(path) => ChatlensConfig::load(path)?,
        None => ChatlensConfig::default(),
    };

    if args.month_first {
        config.parser = config.parser.with_month_first();
    }
    if let Some(path) = &args.stop_words {
        config.analysis = config.analysis.with_stop_words(StopWords::from_file(path)?);
    }
    if let Some(n) = args.top_words {
        config.analysis = config.analysis.with_top_words(n);
    }
    if let Some(n) = args.top_users {
        config.analysis = config.analysis.with_top_users(n);
    }

    Ok(config)
}
