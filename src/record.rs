//! Normalized chat records.
//!
//! This module provides [`Record`], the unit of all downstream analysis, and
//! [`Sender`], which distinguishes participants from system notifications.
//!
//! # Examples
//!
//! ```
//! use chatlens::{Record, Sender};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(14, 30, 0)
//!     .unwrap();
//! let record = Record::new(ts, Sender::user("Alice"), "Hello there");
//!
//! assert_eq!(record.sender().as_str(), "Alice");
//! assert_eq!(record.month_name(), "February");
//! assert_eq!(record.weekday_name(), "Wednesday");
//! assert_eq!(record.hour_bucket(), "14-15");
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Serialize, Serializer};

/// Text used for [`Sender::System`] in reports and exports.
pub const SYSTEM_SENDER: &str = "<system>";

/// Full English month names, indexed by `month0`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English weekday names, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Author of a record.
///
/// Notifications such as "Alice added Bob" or the end-to-end encryption
/// notice carry no author and are attributed to [`Sender::System`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sender {
    /// A chat participant, identified by the display name in the export.
    User(String),
    /// Synthetic sender for notifications.
    System,
}

impl Sender {
    /// Creates a participant sender.
    pub fn user(name: impl Into<String>) -> Self {
        Sender::User(name.into())
    }

    /// Returns the participant name, or [`SYSTEM_SENDER`] for notifications.
    pub fn as_str(&self) -> &str {
        match self {
            Sender::User(name) => name,
            Sender::System => SYSTEM_SENDER,
        }
    }

    /// Returns `true` for [`Sender::System`].
    pub fn is_system(&self) -> bool {
        matches!(self, Sender::System)
    }

    /// Returns the participant name, or `None` for notifications.
    pub fn name(&self) -> Option<&str> {
        match self {
            Sender::User(name) => Some(name),
            Sender::System => None,
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Sender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One normalized message or system notification.
///
/// Calendar fields (`year`, `month_name`, `weekday_name`, ...) are derived
/// from the timestamp on demand, so a record is always internally
/// consistent.
///
/// # Serialization
///
/// Timestamps serialize as ISO 8601 local date-times (the export carries no
/// time zone); the sender serializes as its display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// When the message was sent, in the exporter's local time.
    pub timestamp: NaiveDateTime,

    /// Who sent it.
    pub sender: Sender,

    /// Message text.
    ///
    /// May contain newlines for multi-line messages. Attachments appear as a
    /// media placeholder such as `<Media omitted>`.
    pub body: String,
}

impl Record {
    /// Creates a record.
    pub fn new(timestamp: NaiveDateTime, sender: Sender, body: impl Into<String>) -> Self {
        Self {
            timestamp,
            sender,
            body: body.into(),
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the sender.
    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` if this record is a system notification.
    pub fn is_system(&self) -> bool {
        self.sender.is_system()
    }

    // =========================================================================
    // Derived calendar fields
    // =========================================================================

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// Month number, 1 through 12.
    pub fn month(&self) -> u32 {
        self.timestamp.month()
    }

    /// Full English month name.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.timestamp.month0() as usize]
    }

    /// Day of the month.
    pub fn day(&self) -> u32 {
        self.timestamp.day()
    }

    /// Calendar date without the time of day.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Hour of the day, 0 through 23.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Minute of the hour.
    pub fn minute(&self) -> u32 {
        self.timestamp.minute()
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }

    /// Full English weekday name.
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.weekday().num_days_from_monday() as usize]
    }

    /// One-hour bucket label such as `"14-15"`; the last bucket is `"23-00"`.
    pub fn hour_bucket(&self) -> String {
        hour_bucket_label(self.hour())
    }
}

/// Label for the one-hour bucket starting at `hour`.
pub fn hour_bucket_label(hour: u32) -> String {
    format!("{:02}-{:02}", hour, (hour + 1) % 24)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_record_calendar_fields() {
        let record = Record::new(at(2024, 6, 15, 9, 5), Sender::user("Alice"), "Hi");
        assert_eq!(record.year(), 2024);
        assert_eq!(record.month(), 6);
        assert_eq!(record.month_name(), "June");
        assert_eq!(record.day(), 15);
        assert_eq!(record.hour(), 9);
        assert_eq!(record.minute(), 5);
        assert_eq!(record.weekday_name(), "Saturday");
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }

    #[test]
    fn test_hour_bucket_wraps_at_midnight() {
        assert_eq!(hour_bucket_label(0), "00-01");
        assert_eq!(hour_bucket_label(14), "14-15");
        assert_eq!(hour_bucket_label(23), "23-00");
    }

    #[test]
    fn test_sender_display() {
        assert_eq!(Sender::user("Bob").to_string(), "Bob");
        assert_eq!(Sender::System.to_string(), "<system>");
        assert!(Sender::System.is_system());
        assert_eq!(Sender::System.name(), None);
        assert_eq!(Sender::user("Bob").name(), Some("Bob"));
    }

    #[test]
    fn test_record_serialization() {
        let record = Record::new(at(2023, 2, 1, 10, 0), Sender::System, "Alice joined");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""sender":"<system>""#));
        assert!(json.contains("2023-02-01T10:00:00"));
        assert!(json.contains("Alice joined"));
    }
}
