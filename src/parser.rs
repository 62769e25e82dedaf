//! Transcript parser.
//!
//! Turns exported chat text into a [`Transcript`]. Parsing never fails:
//! segments with an unparseable timestamp are dropped, and an input without
//! any recognizable line is a valid, empty transcript.
//!
//! # Algorithm
//!
//! 1. Every line that starts with a timestamp marker (`date, time - ` or
//!    `[date, time] `) opens a new segment. The marker shapes come from the
//!    configured timestamp table, so custom formats are found as well.
//! 2. Lines without a marker are continuation lines of the open segment
//!    (multi-line messages). Lines before the first marker are ignored.
//! 3. The segment timestamp is parsed with the configured
//!    [`TimestampFormats`](crate::parsing::TimestampFormats); if no pattern
//!    matches, the whole segment is dropped.
//! 4. The first line is split into `sender: body`; lines without a sender
//!    become [`Sender::System`] notifications.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::TranscriptParser;
//! use chatlens::Sender;
//!
//! let raw = "01/02/23, 10:00 - Alice: Hello there\n\
//!            01/02/23, 10:01 - Alice: first line\n\
//!            second line\n\
//!            01/02/23, 10:02 - Bob left\n";
//!
//! let transcript = TranscriptParser::new().parse(raw);
//! let records = transcript.records();
//!
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[1].body, "first line\nsecond line");
//! assert_eq!(records[2].sender, Sender::System);
//! ```

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{debug, trace, warn};

use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result};
use crate::parsing::{MarkerPattern, split_sender};
use crate::record::{Record, Sender};
use crate::transcript::Transcript;

/// Parser for exported chat transcripts.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
    marker: MarkerPattern,
}

/// A segment whose timestamp parsed, waiting for continuation lines.
struct Pending<'a> {
    timestamp: NaiveDateTime,
    head: &'a str,
    continuation: Vec<&'a str>,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        let marker = MarkerPattern::new(&config.timestamp_formats).unwrap_or_else(|e| {
            warn!(error = %e, "falling back to the default timestamp markers");
            MarkerPattern::default()
        });
        Self { config, marker }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses transcript text.
    pub fn parse(&self, raw: &str) -> Transcript {
        let raw = raw.strip_prefix('\u{FEFF}').unwrap_or(raw);

        let mut records = Vec::new();
        let mut current: Option<Pending<'_>> = None;
        let mut dropped = 0usize;

        for line in raw.lines() {
            if let Some(marker) = self.marker.split(line) {
                if let Some(pending) = current.take() {
                    records.push(self.finish(pending));
                }

                match self.config.timestamp_formats.parse_stamp(marker.timestamp) {
                    Some(timestamp) => {
                        current = Some(Pending {
                            timestamp,
                            head: marker.rest,
                            continuation: Vec::new(),
                        });
                    }
                    None => {
                        dropped += 1;
                        trace!(line, "dropping segment with unparseable timestamp");
                    }
                }
            } else if let Some(pending) = current.as_mut() {
                pending.continuation.push(line);
            }
            // Lines before the first marker or after a dropped marker are skipped
        }

        if let Some(pending) = current.take() {
            records.push(self.finish(pending));
        }

        if records.is_empty() && dropped == 0 && raw.lines().any(|l| !l.trim().is_empty()) {
            warn!("no line matched the configured timestamp formats");
        }

        debug!(
            records = records.len(),
            system = records.iter().filter(|r| r.is_system()).count(),
            dropped,
            "parsed transcript"
        );

        Transcript::new(records)
    }

    /// Parses raw bytes, ignoring invalid UTF-8 sequences.
    pub fn parse_bytes(&self, raw: &[u8]) -> Transcript {
        let text = match String::from_utf8_lossy(raw) {
            Cow::Borrowed(text) => Cow::Borrowed(text),
            Cow::Owned(text) => {
                debug!("input contains invalid UTF-8, dropping undecodable bytes");
                Cow::Owned(text.replace('\u{FFFD}', ""))
            }
        };
        self.parse(&text)
    }

    /// Reads and parses a transcript file.
    ///
    /// Only reading the file can fail; the content itself is decoded
    /// leniently.
    pub fn parse_file(&self, path: &Path) -> Result<Transcript> {
        let bytes = fs::read(path).map_err(|e| ChatlensError::read(path, e))?;
        Ok(self.parse_bytes(&bytes))
    }

    fn finish(&self, pending: Pending<'_>) -> Record {
        let (sender, first_line) = match split_sender(pending.head, &self.config.system_markers)
        {
            Some((name, body)) => (Sender::user(name), body),
            None => (Sender::System, pending.head),
        };

        let mut body = first_line.to_string();
        for line in pending.continuation {
            body.push('\n');
            body.push_str(line);
        }
        body.truncate(body.trim_end().len());

        Record::new(pending.timestamp, sender, body)
    }
}

/// Parses transcript text with the default configuration.
pub fn parse(raw: &str) -> Transcript {
    TranscriptParser::new().parse(raw)
}
