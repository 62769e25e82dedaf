//! Line-level parsing: timestamp markers and sender splitting.
//!
//! Supported line shapes:
//! - Android: `15/01/2024, 10:30 - Sender: Message`
//! - iOS: `[1/15/24, 10:30:45 AM] Sender: Message`
//! - Notifications: the same prefixes without a `Sender: ` part

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ChatlensError, Result};
use crate::parsing::TimestampFormats;

/// Timestamp text of a marker line, plus the text after the separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerLine<'a> {
    /// Raw timestamp text, e.g. `15/01/2024, 10:30` or `1/15/24, 10:30:45 AM`
    pub timestamp: &'a str,
    /// Everything after the separator
    pub rest: &'a str,
}

/// Recognizes lines that start a new message.
///
/// Built from a [`TimestampFormats`] table so that every pattern the parser
/// can read is also a pattern it can find at the start of a line.
#[derive(Debug, Clone)]
pub struct MarkerPattern {
    regex: Regex,
}

static DEFAULT_MARKER: LazyLock<MarkerPattern> = LazyLock::new(|| {
    MarkerPattern::new(&TimestampFormats::day_first()).expect("default marker pattern is valid")
});

impl MarkerPattern {
    /// Builds the line-start pattern for a timestamp table.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidFormat`] if the derived regex does
    /// not compile.
    pub fn new(formats: &TimestampFormats) -> Result<Self> {
        let stamp = formats.stamp_regex();
        let pattern = format!(
            r"^(?:\[(?P<bstamp>{stamp})\]\s?|(?P<stamp>{stamp})\s*[-–]\s)(?P<rest>.*)$"
        );
        let regex = Regex::new(&pattern)
            .map_err(|e| ChatlensError::invalid_format("timestamp format", e.to_string()))?;
        Ok(Self { regex })
    }

    /// Splits a line into its timestamp marker and remainder.
    ///
    /// Returns `None` for lines that do not start a new message (continuation
    /// lines of a multi-line message, blank lines, header junk). A leading
    /// left-to-right mark, which iOS exports insert before some lines, is
    /// ignored.
    pub fn split<'a>(&self, line: &'a str) -> Option<MarkerLine<'a>> {
        let line = line.trim_start_matches('\u{200E}');
        let caps = self.regex.captures(line)?;
        let stamp = caps.name("bstamp").or_else(|| caps.name("stamp"))?;

        Some(MarkerLine {
            timestamp: stamp.as_str(),
            rest: caps.name("rest").map_or("", |m| m.as_str()),
        })
    }
}

impl Default for MarkerPattern {
    fn default() -> Self {
        DEFAULT_MARKER.clone()
    }
}

/// Splits a line using the default timestamp table.
///
/// See [`MarkerPattern::split`].
pub fn split_marker(line: &str) -> Option<MarkerLine<'_>> {
    DEFAULT_MARKER.split(line)
}

/// Default phrases identifying notifications whose text contains `": "`.
///
/// Without these, `Alice changed the subject to "Trip: 2024"` would be read
/// as a message from `Alice changed the subject to "Trip`.
pub const DEFAULT_SYSTEM_MARKERS: &[&str] = &[
    "end-to-end encrypted",
    "created group",
    "changed the subject",
    "changed this group's icon",
    "changed the group description",
    "deleted this group's icon",
    "changed their phone number",
    "joined using this group's invite link",
    "security code changed",
    "is now an admin",
    "turned on disappearing messages",
    "turned off disappearing messages",
    "pinned a message",
    "changed the group name",
];

/// Splits the first line of a message into `(sender, body)`.
///
/// The sender is the text before the first `": "`, or before a `':'` that
/// ends the line (a message whose first line is empty). Returns `None` when
/// there is no separator, when the candidate sender is blank, or when it
/// contains one of `system_markers` (compared case-insensitively); such
/// lines are notifications.
pub fn split_sender<'a>(line: &'a str, system_markers: &[String]) -> Option<(&'a str, &'a str)> {
    let (idx, body) = match line.find(": ") {
        Some(idx) => (idx, &line[idx + 2..]),
        None if line.ends_with(':') => (line.len() - 1, ""),
        None => return None,
    };
    let sender = line[..idx].trim();
    if sender.is_empty() {
        return None;
    }

    let lowered = sender.to_lowercase();
    if system_markers
        .iter()
        .any(|marker| lowered.contains(&marker.to_lowercase()))
    {
        return None;
    }

    Some((sender, body))
}
