//! Report formats for the chatlens library.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks: the [`OutputFormat`] enum, the plain-text renderer and
//! helpers that dispatch on the format.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::{Selection, analyze};
//! use chatlens::format::{OutputFormat, render_text};
//!
//! let transcript = chatlens::parse("01/02/23, 10:00 - Alice: Hello there\n");
//! let report = analyze(&transcript, &Selection::Overall, &AnalysisConfig::default());
//!
//! let text = render_text(&report);
//! assert!(text.starts_with("Chat analysis: Overall"));
//!
//! let format: OutputFormat = "json".parse().unwrap();
//! assert_eq!(format.extension(), "json");
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::processor::AnalysisReport;
use crate::error::{ChatlensError, Result};

/// Output format for analysis reports.
///
/// - [`Text`](OutputFormat::Text) - Human-readable report (default)
/// - [`Json`](OutputFormat::Json) - Pretty-printed JSON, for charts and scripts
///
/// # Example
///
/// ```rust
/// use chatlens::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("JSON").unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "JSON");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Plain-text report
    #[default]
    Text,

    /// JSON document with every query result
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Json]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    /// use std::path::Path;
    ///
    /// let format = OutputFormat::from_path(Path::new("report.json")).unwrap();
    /// assert_eq!(format, OutputFormat::Json);
    /// assert!(OutputFormat::from_path(Path::new("report.pdf")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ChatlensError::invalid_format(
                "output",
                format!("Unknown file extension: '.{}'. Expected one of: txt, json", ext),
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Renders the report as a human-readable text block.
pub fn render_text(report: &AnalysisReport) -> String {
    TextReport(report).to_string()
}

/// Converts the report to a string in the specified format.
///
/// # Errors
///
/// Returns an error if the format needs a feature that is not enabled.
pub fn to_format_string(report: &AnalysisReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(report),
        #[allow(unreachable_patterns)]
        _ => Err(ChatlensError::invalid_format(
            "output",
            format!(
                "Output format {} requires the 'json-output' feature to be enabled",
                format
            ),
        )),
    }
}

/// Writes the report to a file in the specified format.
///
/// # Example
///
/// ```rust,no_run
/// # fn main() -> chatlens::Result<()> {
/// use std::path::Path;
///
/// use chatlens::config::AnalysisConfig;
/// use chatlens::core::{Selection, analyze};
/// use chatlens::format::{OutputFormat, write_to_format};
///
/// let transcript = chatlens::parse("01/02/23, 10:00 - Alice: Hello there\n");
/// let report = analyze(&transcript, &Selection::Overall, &AnalysisConfig::default());
///
/// write_to_format(&report, Path::new("report.txt"), OutputFormat::Text)?;
/// # Ok(())
/// # }
/// ```
pub fn write_to_format(report: &AnalysisReport, path: &Path, format: OutputFormat) -> Result<()> {
    let mut content = to_format_string(report, format)?;
    if !content.ends_with('\n') {
        content.push('\n');
    }
    fs::write(path, content)?;
    Ok(())
}

struct TextReport<'a>(&'a AnalysisReport);

const NONE: &str = "  (none)";

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let stats = &report.stats;

        writeln!(f, "Chat analysis: {}", report.selection)?;
        writeln!(f)?;
        writeln!(f, "  {:<16}{:>8}", "Messages", stats.messages)?;
        writeln!(f, "  {:<16}{:>8}", "Words", stats.words)?;
        writeln!(f, "  {:<16}{:>8}", "Media shared", stats.media)?;
        writeln!(f, "  {:<16}{:>8}", "Links shared", stats.links)?;

        writeln!(f)?;
        writeln!(f, "Monthly timeline")?;
        if report.monthly_timeline.is_empty() {
            writeln!(f, "{NONE}")?;
        }
        for point in &report.monthly_timeline {
            writeln!(f, "  {:<16}{:>8}", point.label, point.count)?;
        }

        writeln!(f)?;
        writeln!(f, "Daily timeline")?;
        let busiest_day = report
            .daily_timeline
            .iter()
            .reduce(|best, p| if p.count > best.count { p } else { best });
        match busiest_day {
            Some(day) => writeln!(
                f,
                "  {} active days, busiest {} ({} messages)",
                report.daily_timeline.len(),
                day.date,
                day.count
            )?,
            None => writeln!(f, "{NONE}")?,
        }

        for (title, map, noun) in [
            ("Weekly activity", &report.weekly_activity, "day"),
            ("Monthly activity", &report.monthly_activity, "month"),
        ] {
            writeln!(f)?;
            writeln!(f, "{title}")?;
            for bucket in map.buckets() {
                writeln!(f, "  {:<16}{:>8}", bucket.label, bucket.count)?;
            }
            if let Some(busiest) = map.busiest() {
                writeln!(f, "  Busiest {noun}: {}", busiest.label)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Activity heatmap")?;
        write!(f, "     ")?;
        for label in &report.heatmap.hours {
            write!(f, "{:>4}", &label[..2])?;
        }
        writeln!(f)?;
        for (weekday, row) in report.heatmap.weekdays.iter().zip(&report.heatmap.counts) {
            write!(f, "  {:<3}", &weekday[..3])?;
            for count in row {
                write!(f, "{count:>4}")?;
            }
            writeln!(f)?;
        }

        if let Some(users) = &report.busy_users {
            writeln!(f)?;
            writeln!(f, "Most busy users")?;
            if users.shares.is_empty() {
                writeln!(f, "{NONE}")?;
            }
            for share in users.shares.iter().take(users.top.len()) {
                writeln!(
                    f,
                    "  {:<16}{:>8}{:>9.2}%",
                    share.sender, share.count, share.percent
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Most common words")?;
        if report.top_words.is_empty() {
            writeln!(f, "{NONE}")?;
        }
        for word in &report.top_words {
            writeln!(f, "  {:<16}{:>8}", word.word, word.count)?;
        }

        writeln!(f)?;
        writeln!(f, "Emoji")?;
        if report.emojis.is_empty() {
            writeln!(f, "{NONE}")?;
        }
        for emoji in &report.emojis {
            writeln!(f, "  {}  {}", emoji.emoji, emoji.count)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::core::filter::Selection;
    use crate::core::processor::analyze;
    use crate::parser::parse;
    use std::str::FromStr;

    fn report(selection: &Selection) -> AnalysisReport {
        // 06/03/23 is a Monday
        let transcript = parse(
            "06/03/23, 14:10 - Alice: pizza tonight? 🍕\n\
             06/03/23, 14:12 - Bob: pizza yes\n\
             06/03/23, 14:13 - Bob: <Media omitted>\n",
        );
        analyze(&transcript, selection, &AnalysisConfig::default())
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("txt").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("csv").is_err());
    }

    #[test]
    fn test_format_display_and_extension() {
        assert_eq!(OutputFormat::Text.to_string(), "Text");
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
        assert_eq!(OutputFormat::Text.extension(), "txt");
        assert_eq!(OutputFormat::Json.mime_type(), "application/json");
        assert_eq!(OutputFormat::all().len(), 2);
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("/tmp/report.TXT")).unwrap(),
            OutputFormat::Text
        );
        let err = OutputFormat::from_path(Path::new("report")).unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_render_text_overall() {
        let text = render_text(&report(&Selection::Overall));
        assert!(text.starts_with("Chat analysis: Overall\n"));
        assert!(text.contains(&format!("  {:<16}{:>8}", "Messages", 3)));
        assert!(text.contains(&format!("  {:<16}{:>8}", "Media shared", 1)));
        assert!(text.contains(&format!("  {:<16}{:>8}", "March-2023", 3)));
        assert!(text.contains("1 active days, busiest 2023-03-06 (3 messages)"));
        assert!(text.contains("Busiest day: Monday"));
        assert!(text.contains("Busiest month: March"));
        assert!(text.contains("Most busy users"));
        assert!(text.contains("66.67%"));
        assert!(text.contains(&format!("  {:<16}{:>8}", "pizza", 2)));
        assert!(text.contains("🍕  1"));
    }

    #[test]
    fn test_render_text_participant_has_no_user_ranking() {
        let text = render_text(&report(&Selection::participant("Alice")));
        assert!(text.starts_with("Chat analysis: Alice\n"));
        assert!(!text.contains("Most busy users"));
    }

    #[test]
    fn test_render_text_empty() {
        let empty = analyze(
            &crate::Transcript::default(),
            &Selection::Overall,
            &AnalysisConfig::default(),
        );
        let text = render_text(&empty);
        assert!(text.contains(NONE));
        assert!(!text.contains("Busiest day"));
    }

    #[test]
    fn test_heatmap_grid() {
        let text = render_text(&report(&Selection::Overall));
        let monday = text
            .lines()
            .skip_while(|line| *line != "Activity heatmap")
            .find(|line| line.starts_with("  Mon "))
            .unwrap();
        // 24 columns of width 4 after the row label
        assert_eq!(monday.len(), 5 + 24 * 4);
        assert!(monday.contains("   3"));
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_to_format_string_json() {
        let json = to_format_string(&report(&Selection::Overall), OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));
    }

    #[test]
    fn test_write_to_format_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        write_to_format(&report(&Selection::Overall), &path, OutputFormat::Text).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Chat analysis"));
        assert!(content.ends_with('\n'));
    }
}
