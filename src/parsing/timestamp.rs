//! Timestamp format table.
//!
//! Chat exports vary by locale and device, and the date part alone is often
//! ambiguous (`01/02/23`). Instead of guessing, the parser tries an ordered
//! list of chrono patterns and keeps the first one that parses.
//!
//! # Default table
//!
//! Dates, day-first before month-first, two-digit years before four-digit
//! years:
//!
//! | Date | Example |
//! |------|---------|
//! | `%d/%m/%y`, `%d/%m/%Y` | `15/01/24`, `15/01/2024` |
//! | `%d.%m.%y`, `%d.%m.%Y` | `15.01.24`, `15.01.2024` |
//! | `%d-%m-%y`, `%d-%m-%Y` | `15-01-24`, `15-01-2024` |
//! | `%m/%d/%y`, `%m/%d/%Y` | `1/15/24`, `1/15/2024` |
//!
//! Each date is combined with `%H:%M`, `%H:%M:%S`, `%I:%M %p` and
//! `%I:%M:%S %p`, separated by `", "`.
//!
//! The same table decides which lines start a message: the line-start
//! regex is derived from the patterns (see [`TimestampFormats::stamp_regex`]),
//! so a custom table such as `%Y-%m-%d, %H:%M` recognizes its own lines.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use chrono::format::{Fixed, Item, Numeric, StrftimeItems};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::error::{ChatlensError, Result};
use crate::parsing::line::MarkerPattern;

static MERIDIEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d\s*)([ap])\.?m\b\.?").expect("meridiem pattern is valid")
});

const DAY_FIRST_DATES: &[&str] = &[
    "%d/%m/%y", "%d/%m/%Y", "%d.%m.%y", "%d.%m.%Y", "%d-%m-%y", "%d-%m-%Y",
];

const MONTH_FIRST_DATES: &[&str] = &["%m/%d/%y", "%m/%d/%Y"];

const TIMES: &[&str] = &["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M:%S %p"];

/// Ordered list of `"<date>, <time>"` chrono patterns.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::TimestampFormats;
///
/// let formats = TimestampFormats::default();
/// let ts = formats.parse("15/01/2024", "10:30").unwrap();
/// assert_eq!(ts.to_string(), "2024-01-15 10:30:00");
///
/// // US exports fall through to the month-first patterns
/// let ts = formats.parse("1/15/24", "10:30 PM").unwrap();
/// assert_eq!(ts.to_string(), "2024-01-15 22:30:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TimestampFormats {
    patterns: Vec<String>,
}

impl TimestampFormats {
    /// Day-first table (`DD/MM/YY` before `MM/DD/YY`).
    pub fn day_first() -> Self {
        Self::combine(&[DAY_FIRST_DATES, MONTH_FIRST_DATES])
    }

    /// Month-first table for US exports (`MM/DD/YY` before `DD/MM/YY`).
    pub fn month_first() -> Self {
        Self::combine(&[MONTH_FIRST_DATES, DAY_FIRST_DATES])
    }

    /// Builds a table from explicit `"<date>, <time>"` patterns.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidFormat`] if the list is empty or a
    /// pattern contains a specifier chrono does not understand.
    pub fn custom<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        if patterns.is_empty() {
            return Err(ChatlensError::invalid_format(
                "timestamp format",
                "at least one pattern is required",
            ));
        }
        for pattern in &patterns {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(ChatlensError::invalid_format(
                    "timestamp format",
                    format!("'{pattern}' is not a valid chrono pattern"),
                ));
            }
        }
        let formats = Self { patterns };
        MarkerPattern::new(&formats)?;
        Ok(formats)
    }

    fn combine(date_groups: &[&[&str]]) -> Self {
        let patterns = date_groups
            .iter()
            .flat_map(|dates| dates.iter())
            .flat_map(|date| TIMES.iter().map(move |time| format!("{date}, {time}")))
            .collect();
        Self { patterns }
    }

    /// Returns the patterns in the order they are tried.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Parses a date and a time string with the first matching pattern.
    ///
    /// Shorthand for [`parse_stamp`](Self::parse_stamp) on `"<date>, <time>"`.
    pub fn parse(&self, date: &str, time: &str) -> Option<NaiveDateTime> {
        self.parse_stamp(&format!("{}, {}", date.trim(), time.trim()))
    }

    /// Parses a complete timestamp with the first matching pattern.
    ///
    /// Narrow no-break and no-break spaces (used before AM/PM by newer
    /// exports) are treated as plain spaces, and `a.m.`/`p.m.` are accepted.
    pub fn parse_stamp(&self, stamp: &str) -> Option<NaiveDateTime> {
        let stamp = normalize_stamp(stamp);

        self.patterns
            .iter()
            .find_map(|pattern| NaiveDateTime::parse_from_str(&stamp, pattern).ok())
    }

    /// Regex source matching the timestamp text of any pattern in the table.
    ///
    /// Each pattern becomes one alternative: numeric fields turn into digit
    /// runs, month and weekday names into letter runs, AM/PM into
    /// `am`/`a.m.` variants, and spaces into optional whitespace.
    pub fn stamp_regex(&self) -> String {
        let mut alternatives: Vec<String> = Vec::new();
        for pattern in &self.patterns {
            let fragment: String = StrftimeItems::new(pattern).map(item_regex).collect();
            if !alternatives.contains(&fragment) {
                alternatives.push(fragment);
            }
        }
        alternatives.join("|")
    }
}

fn item_regex(item: Item<'_>) -> String {
    match item {
        Item::Literal(text) => regex::escape(text),
        Item::Space(_) => r"\s*".to_string(),
        Item::Numeric(numeric, _) => match numeric {
            Numeric::Year | Numeric::IsoYear => r"\d{4}",
            Numeric::YearMod100 | Numeric::IsoYearMod100 => r"\d{2}",
            Numeric::Minute | Numeric::Second => r"\d{2}",
            Numeric::Month | Numeric::Day | Numeric::Hour | Numeric::Hour12 => r"\d{1,2}",
            _ => r"\d+",
        }
        .to_string(),
        Item::Fixed(fixed) => match fixed {
            Fixed::LowerAmPm | Fixed::UpperAmPm => r"[APap]\.?[Mm]\.?",
            Fixed::ShortMonthName
            | Fixed::LongMonthName
            | Fixed::ShortWeekdayName
            | Fixed::LongWeekdayName => r"\p{L}+\.?",
            _ => r"\S+",
        }
        .to_string(),
        _ => String::new(),
    }
}

impl Default for TimestampFormats {
    fn default() -> Self {
        Self::day_first()
    }
}

impl TryFrom<Vec<String>> for TimestampFormats {
    type Error = ChatlensError;

    fn try_from(patterns: Vec<String>) -> Result<Self> {
        Self::custom(patterns)
    }
}

impl From<TimestampFormats> for Vec<String> {
    fn from(formats: TimestampFormats) -> Self {
        formats.patterns
    }
}

fn normalize_stamp(stamp: &str) -> String {
    let spaced = stamp.trim().replace(['\u{202F}', '\u{00A0}'], " ");
    MERIDIEM
        .replace_all(&spaced, |caps: &Captures<'_>| {
            format!("{}{}M", &caps[1], caps[2].to_ascii_uppercase())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_day_first_two_digit_year() {
        let formats = TimestampFormats::default();
        assert_eq!(
            formats.parse("01/02/23", "10:00"),
            Some(dt(2023, 2, 1, 10, 0, 0))
        );
    }

    #[test]
    fn test_parse_four_digit_year() {
        let formats = TimestampFormats::default();
        assert_eq!(
            formats.parse("15/01/2024", "10:30:45"),
            Some(dt(2024, 1, 15, 10, 30, 45))
        );
    }

    #[test]
    fn test_parse_dotted_date() {
        let formats = TimestampFormats::default();
        assert_eq!(
            formats.parse("26.10.2025", "20:40"),
            Some(dt(2025, 10, 26, 20, 40, 0))
        );
    }

    #[test]
    fn test_parse_us_twelve_hour() {
        let formats = TimestampFormats::default();
        assert_eq!(
            formats.parse("1/15/24", "10:30:45 AM"),
            Some(dt(2024, 1, 15, 10, 30, 45))
        );
        assert_eq!(
            formats.parse("1/15/24", "12:05 AM"),
            Some(dt(2024, 1, 15, 0, 5, 0))
        );
    }

    #[test]
    fn test_parse_narrow_no_break_space() {
        let formats = TimestampFormats::default();
        assert_eq!(
            formats.parse("1/15/24", "9:05\u{202F}PM"),
            Some(dt(2024, 1, 15, 21, 5, 0))
        );
    }

    #[test]
    fn test_parse_dotted_am_pm() {
        let formats = TimestampFormats::default();
        assert_eq!(
            formats.parse("15/01/2024", "9:05 p.m."),
            Some(dt(2024, 1, 15, 21, 5, 0))
        );
    }

    #[test]
    fn test_month_first_preset_resolves_ambiguity() {
        let formats = TimestampFormats::month_first();
        assert_eq!(
            formats.parse("01/02/23", "10:00"),
            Some(dt(2023, 1, 2, 10, 0, 0))
        );
    }

    #[test]
    fn test_parse_invalid_date() {
        let formats = TimestampFormats::default();
        assert_eq!(formats.parse("31/31/23", "10:00"), None);
        assert_eq!(formats.parse("01/02/23", "25:00"), None);
    }

    #[test]
    fn test_custom_rejects_bad_pattern() {
        let err = TimestampFormats::custom(["%d/%m/%Y, %Q"]).unwrap_err();
        assert!(err.is_invalid_format());
        assert!(TimestampFormats::custom(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_custom_table() {
        let formats = TimestampFormats::custom(["%Y-%m-%d, %H:%M"]).unwrap();
        assert_eq!(formats.patterns().len(), 1);
        assert_eq!(
            formats.parse("2024-03-01", "08:15"),
            Some(dt(2024, 3, 1, 8, 15, 0))
        );
    }

    #[test]
    fn test_parse_stamp_month_name() {
        let formats = TimestampFormats::custom(["%d %b %Y, %H:%M"]).unwrap();
        assert_eq!(
            formats.parse_stamp("01 Mar 2024, 08:15"),
            Some(dt(2024, 3, 1, 8, 15, 0))
        );
    }

    #[test]
    fn test_stamp_regex_follows_table() {
        let custom = TimestampFormats::custom(["%Y-%m-%d, %H:%M"]).unwrap();
        let regex = Regex::new(&format!("^(?:{})$", custom.stamp_regex())).unwrap();
        assert!(regex.is_match("2024-03-01, 08:15"));
        assert!(!regex.is_match("01/03/24, 08:15"));

        // Day-first and month-first dates share a shape
        let default = TimestampFormats::default();
        assert_eq!(
            default.stamp_regex(),
            TimestampFormats::month_first().stamp_regex()
        );
        let regex = Regex::new(&format!("^(?:{})$", default.stamp_regex())).unwrap();
        assert!(regex.is_match("1/15/24, 9:05\u{202F}p.m."));
        assert!(regex.is_match("15.01.2024, 10:30:45"));
    }

    #[test]
    fn test_serde_validates() {
        let ok: TimestampFormats = serde_json::from_str(r#"["%d/%m/%Y, %H:%M"]"#).unwrap();
        assert_eq!(ok.patterns(), ["%d/%m/%Y, %H:%M"]);
        assert!(serde_json::from_str::<TimestampFormats>(r#"["%Q"]"#).is_err());
    }
}
