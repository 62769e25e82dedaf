//! Output writers.
//!
//! - [`write_json`] / [`to_json`] - the [`AnalysisReport`](crate::core::AnalysisReport)
//!   as pretty JSON - requires `json-output` feature
//! - [`write_records_csv`] / [`records_to_csv`] - the parsed record table
//!   with semicolon delimiter - requires `csv-output` feature
//!
//! The plain-text report lives in [`crate::format::render_text`].
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use std::path::Path;
//!
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::output::{records_to_csv, write_json, write_records_csv};
//! use chatlens::core::{Selection, analyze};
//!
//! let transcript = chatlens::parse("01/02/23, 10:00 - Alice: Hello there\n");
//! let report = analyze(&transcript, &Selection::Overall, &AnalysisConfig::default());
//!
//! write_json(&report, Path::new("report.json"))?;
//! write_records_csv(&transcript, Path::new("records.csv"))?;
//!
//! let csv = records_to_csv(&transcript)?;
//! assert!(csv.starts_with("timestamp;sender;body"));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{records_to_csv, write_records_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
