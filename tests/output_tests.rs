//! Tests for output writers (JSON report, text report, CSV record table)

use chatlens::prelude::*;
use std::fs;
use tempfile::tempdir;

fn sample_transcript() -> Transcript {
    parse(
        "15/01/24, 10:30 - Alice: Hello; world!\n\
         15/01/24, 10:31 - Bob: Hi \"Alice\"\n\
         second line 🎉\n\
         15/01/24, 10:32 - Bob added Carol\n\
         16/01/24, 09:00 - Alice: <Media omitted>\n",
    )
}

fn sample_report(selection: &Selection) -> AnalysisReport {
    analyze(&sample_transcript(), selection, &AnalysisConfig::default())
}

// ============================================================================
// JSON Writer Tests
// ============================================================================

#[cfg(feature = "json-output")]
mod json_writer_tests {
    use super::*;

    #[test]
    fn test_write_json_file_is_valid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_json(&sample_report(&Selection::Overall), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["selection"], "Overall");
        assert_eq!(value["stats"]["messages"], 3);
        assert_eq!(value["stats"]["media"], 1);
        assert_eq!(value["weekly_activity"].as_array().unwrap().len(), 7);
        assert_eq!(value["monthly_activity"].as_array().unwrap().len(), 12);
        assert_eq!(value["busy_users"]["top"][0]["sender"], "Alice");
        assert_eq!(value["emojis"][0]["emoji"], "🎉");
    }

    #[test]
    fn test_json_daily_timeline_uses_iso_dates() {
        let json = to_json(&sample_report(&Selection::Overall)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["daily_timeline"][0]["date"], "2024-01-15");
        assert_eq!(value["daily_timeline"][0]["count"], 2);
        assert_eq!(value["monthly_timeline"][0]["label"], "January-2024");
    }

    #[test]
    fn test_json_participant_report_has_no_busy_users() {
        let json = to_json(&sample_report(&Selection::participant("Bob"))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["selection"], "Bob");
        assert!(value.get("busy_users").is_none());
    }

    #[test]
    fn test_write_json_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("report.json");
        let err = write_json(&sample_report(&Selection::Overall), &path).unwrap_err();
        assert!(err.is_io());
    }
}

// ============================================================================
// CSV Writer Tests
// ============================================================================

#[cfg(feature = "csv-output")]
mod csv_writer_tests {
    use super::*;

    #[test]
    fn test_write_records_csv_round_trips_through_reader() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.csv");

        write_records_csv(&sample_transcript(), &path).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_path(&path)
            .unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers, vec!["timestamp", "sender", "body"]);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[0][0], "2024-01-15 10:30:00");
        assert_eq!(&rows[0][2], "Hello; world!");
        assert_eq!(&rows[1][2], "Hi \"Alice\"\nsecond line 🎉");
        assert_eq!(&rows[2][1], "<system>");
    }

    #[test]
    fn test_records_csv_empty_transcript_has_header_only() {
        let csv = records_to_csv(&Transcript::default()).unwrap();
        assert_eq!(csv, "timestamp;sender;body\n");
    }
}

// ============================================================================
// Format dispatch
// ============================================================================

mod format_tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_write_text_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.txt");

        write_to_format(&sample_report(&Selection::Overall), &path, OutputFormat::Text).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Chat analysis: Overall"));
        assert!(content.contains("Most busy users"));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_text_report_for_participant_skips_busy_users() {
        let text = render_text(&sample_report(&Selection::participant("Alice")));
        assert!(text.starts_with("Chat analysis: Alice"));
        assert!(!text.contains("Most busy users"));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out.json")).unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("out.txt")).unwrap(),
            OutputFormat::Text
        );
        assert!(OutputFormat::from_path(Path::new("out.xml")).is_err());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_write_to_format_json_matches_to_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = sample_report(&Selection::Overall);

        write_to_format(&report, &path, OutputFormat::Json).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.trim_end(), to_json(&report).unwrap());
    }
}
