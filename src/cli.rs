//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Report format options
//!
//! # Example
//!
//! ```rust
//! use chatlens::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatlens", "chat.txt", "--user", "Alice", "-f", "json"]);
//! assert_eq!(args.selection(), chatlens::Selection::participant("Alice"));
//! assert_eq!(args.log_level(), "warn");
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::core::filter::{OVERALL, Selection};

/// Analyze a group-chat export: activity over time, busiest
/// participants, most common words and emoji.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice
    chatlens chat.txt -f json -o report.json
    chatlens chat.txt --month-first --stop-words stop_hinglish.txt
    chatlens chat.txt --records-csv records.csv
    chatlens chat.txt --list-participants")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Analyze one participant instead of the whole group
    #[arg(short, long, value_name = "NAME", default_value = OVERALL)]
    pub user: String,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the parsed record table as CSV
    #[arg(long, value_name = "FILE")]
    pub records_csv: Option<PathBuf>,

    /// JSON configuration file (parser and analysis settings)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Newline-separated stop-word list (replaces the English default)
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Number of words in the word-frequency ranking
    #[arg(long, value_name = "N")]
    pub top_words: Option<usize>,

    /// Number of senders in the busiest-users ranking
    #[arg(long, value_name = "N")]
    pub top_users: Option<usize>,

    /// Read ambiguous dates as month/day (US exports)
    #[arg(long)]
    pub month_first: bool,

    /// Print the participant names and exit
    #[arg(long)]
    pub list_participants: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The participant selection requested with `--user`.
    pub fn selection(&self) -> Selection {
        let Ok(selection) = self.user.parse::<Selection>();
        selection
    }

    /// Default log filter for the `-v` count, used when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Report format options.
///
/// # Example
///
/// ```rust
/// use chatlens::cli::OutputFormat;
///
/// let format = OutputFormat::Json;
/// println!("Extension: {}", format.extension()); // "json"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report (default)
    #[default]
    #[value(alias = "txt")]
    Text,

    /// JSON document with every query result
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        crate::format::OutputFormat::from(*self).extension()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Text => crate::format::OutputFormat::Text,
            OutputFormat::Json => crate::format::OutputFormat::Json,
        }
    }
}
