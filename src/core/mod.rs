//! Aggregation queries over a parsed [`Transcript`](crate::Transcript).
//!
//! This module contains:
//! - [`filter`] - Participant selection and read-only views
//! - [`stats`] - Message, word, media and link totals
//! - [`timeline`] - Monthly and daily message counts
//! - [`activity`] - Weekday and month activity maps, weekday x hour heatmap
//! - [`users`] - Busiest participants
//! - [`words`] - Word frequency and stop words
//! - [`emoji`] - Emoji frequency
//! - [`processor`] - [`analyze`], running every query at once
//! - [`output`] - Report and record writers (JSON, CSV)
//!
//! Every query is a pure function of a [`Selection`] and the transcript.
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::{Selection, analyze, basic_stats, busy_users};
//!
//! let transcript = chatlens::parse(
//!     "01/02/23, 10:00 - Alice: Hello there\n\
//!      01/02/23, 10:01 - Bob: hi\n",
//! );
//!
//! let stats = basic_stats(&Selection::participant("Alice"), &transcript, &AnalysisConfig::default());
//! assert_eq!(stats.words, 2);
//!
//! let users = busy_users(&transcript, 5);
//! assert_eq!(users.total(), 2);
//!
//! let report = analyze(&transcript, &Selection::Overall, &AnalysisConfig::default());
//! assert_eq!(report.stats.messages, 2);
//! ```

pub mod activity;
pub mod emoji;
pub mod filter;
pub mod output;
pub mod processor;
pub mod stats;
pub mod timeline;
pub mod users;
pub mod words;

pub use activity::{
    ActivityMap, Bucket, Heatmap, activity_heatmap, monthly_activity, weekly_activity,
};
pub use emoji::{EmojiCount, emoji_frequency};
pub use filter::{OVERALL, Selection, View};
pub use processor::{AnalysisReport, analyze};
pub use stats::{BasicStats, basic_stats};
pub use timeline::{DailyPoint, MonthlyPoint, daily_timeline, monthly_timeline};
pub use users::{BusyUsers, SenderCount, SenderShare, busy_users};
pub use words::{StopWords, WordCount, word_frequency};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{records_to_csv, write_records_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
