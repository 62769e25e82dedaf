//! # Chatlens
//!
//! A Rust library for parsing exported group-chat transcripts (the
//! `date, time - sender: message` text format) and computing descriptive
//! statistics over them.
//!
//! ## Overview
//!
//! Chatlens turns a raw export into an immutable table of [`Record`]s and
//! answers questions about it, for the whole group or for one participant:
//! - **Basic stats** - messages, words, media and links shared
//! - **Timelines** - messages per month and per day
//! - **Activity maps** - busiest weekdays and months, weekday x hour heatmap
//! - **Busy users** - who talks most, and their share of the conversation
//! - **Words and emoji** - most common words (stop words removed) and emoji
//!
//! Parsing never fails: lines that can't be understood are dropped, and an
//! empty input is a valid, empty transcript. Only file I/O and configuration
//! loading return errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let transcript = chatlens::parse(
//!     "01/02/23, 10:00 - Alice: Hello there\n\
//!      01/02/23, 10:01 - Bob: <Media omitted>\n\
//!      01/02/23, 10:02 - Bob: see https://example.com\n",
//! );
//!
//! let report = analyze(&transcript, &Selection::Overall, &AnalysisConfig::default());
//!
//! assert_eq!(report.stats.messages, 3);
//! assert_eq!(report.stats.media, 1);
//! assert_eq!(report.stats.links, 1);
//! assert_eq!(report.busy_users.unwrap().top[0].sender, "Bob");
//! ```
//!
//! ## Reading Files
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use chatlens::config::ParserConfig;
//! use chatlens::parser::TranscriptParser;
//!
//! // US exports put the month first
//! let parser = TranscriptParser::with_config(ParserConfig::new().with_month_first());
//! let transcript = parser.parse_file(Path::new("WhatsApp Chat.txt"))?;
//!
//! for name in transcript.participants() {
//!     println!("{name}");
//! }
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser) and [`parse`]
//! - [`parsing`] - Timestamp format table and line splitting
//! - [`record`] - [`Record`] and [`Sender`]
//! - [`transcript`] - [`Transcript`], the immutable record table
//! - [`core`] - Aggregation queries, [`analyze`] and output writers
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and the text renderer
//! - [`cli`] - CLI arguments (feature `cli`)
//! - [`error`] - Unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsing;
pub mod record;
pub mod transcript;

// Re-export the main types at the crate root for convenience
pub use crate::core::{Selection, analyze};
pub use error::{ChatlensError, Result};
pub use parser::parse;
pub use record::{Record, Sender};
pub use transcript::Transcript;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Records
    pub use crate::record::{Record, Sender};
    pub use crate::transcript::Transcript;

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::{TranscriptParser, parse};
    pub use crate::parsing::TimestampFormats;

    // Configuration
    pub use crate::config::{AnalysisConfig, ChatlensConfig, ParserConfig};

    // Queries
    pub use crate::core::{
        ActivityMap, AnalysisReport, BasicStats, BusyUsers, DailyPoint, EmojiCount, Heatmap,
        MonthlyPoint, Selection, StopWords, View, WordCount, activity_heatmap, analyze,
        basic_stats, busy_users, daily_timeline, emoji_frequency, monthly_activity,
        monthly_timeline, weekly_activity, word_frequency,
    };

    // Output
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{records_to_csv, write_records_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
    pub use crate::format::{OutputFormat, render_text, write_to_format};
}
