//! Configuration types for parsing and analysis.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies. Export-format details (timestamp
//! patterns, notification phrases, media placeholders) and word data (stop
//! words) are configuration, not hard-coded globals.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, ParserConfig};
//!
//! let parser_config = ParserConfig::new().with_month_first();
//! let analysis_config = AnalysisConfig::new()
//!     .with_top_words(10)
//!     .with_media_marker("<attached image>");
//!
//! assert!(analysis_config.is_media("<attached image>"));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::words::StopWords;
use crate::parsing::{DEFAULT_SYSTEM_MARKERS, TimestampFormats};

/// Placeholder bodies that stand for an attachment without text.
pub const DEFAULT_MEDIA_MARKERS: &[&str] = &[
    "<Media omitted>",
    "image omitted",
    "video omitted",
    "audio omitted",
    "sticker omitted",
    "GIF omitted",
    "document omitted",
];

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
/// use chatlens::parser::TranscriptParser;
///
/// let config = ParserConfig::new().with_system_marker("started a call");
/// let parser = TranscriptParser::with_config(config);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Ordered date/time patterns (default: day-first table)
    pub timestamp_formats: TimestampFormats,

    /// Phrases that mark a `name: text` looking line as a notification
    pub system_markers: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            timestamp_formats: TimestampFormats::default(),
            system_markers: DEFAULT_SYSTEM_MARKERS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timestamp format table.
    #[must_use]
    pub fn with_timestamp_formats(mut self, formats: TimestampFormats) -> Self {
        self.timestamp_formats = formats;
        self
    }

    /// Tries month-first dates before day-first ones (US exports).
    #[must_use]
    pub fn with_month_first(mut self) -> Self {
        self.timestamp_formats = TimestampFormats::month_first();
        self
    }

    /// Adds a notification phrase.
    #[must_use]
    pub fn with_system_marker(mut self, marker: impl Into<String>) -> Self {
        self.system_markers.push(marker.into());
        self
    }

    /// Replaces the notification phrases.
    #[must_use]
    pub fn with_system_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.system_markers = markers.into_iter().map(Into::into).collect();
        self
    }
}

/// Configuration for the aggregation queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Bodies counted as media messages (compared after trimming)
    pub media_markers: Vec<String>,

    /// Words ignored by the word-frequency query
    pub stop_words: StopWords,

    /// Number of entries returned by the word-frequency query (default: 20)
    pub top_words: usize,

    /// Number of senders in the busiest-users ranking (default: 5)
    pub top_users: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            media_markers: DEFAULT_MEDIA_MARKERS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            stop_words: StopWords::english(),
            top_words: 20,
            top_users: 5,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a media placeholder.
    #[must_use]
    pub fn with_media_marker(mut self, marker: impl Into<String>) -> Self {
        self.media_markers.push(marker.into());
        self
    }

    /// Sets the stop-word list.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Sets the size of the word-frequency ranking.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the size of the busiest-users ranking.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Returns `true` if `body` is a media placeholder.
    pub fn is_media(&self, body: &str) -> bool {
        let body = body.trim().trim_start_matches('\u{200E}');
        self.media_markers.iter().any(|marker| marker == body)
    }
}

/// Complete configuration, as loaded from a JSON file.
///
/// Missing sections and fields fall back to their defaults.
///
/// ```json
/// {
///   "parser": { "timestamp_formats": ["%d/%m/%Y, %H:%M"] },
///   "analysis": { "top_words": 10, "stop_words": ["hai", "ka"] }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatlensConfig {
    /// Parser settings
    pub parser: ParserConfig,
    /// Query settings
    pub analysis: AnalysisConfig,
}

#[cfg(feature = "json-output")]
impl ChatlensConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration file.
    pub fn load(path: &std::path::Path) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| crate::ChatlensError::read(path, e))?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}
