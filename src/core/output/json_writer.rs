//! JSON report writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::processor::AnalysisReport;
use crate::error::Result;

/// Writes the report to `output_path` as pretty-printed JSON.
///
/// # Format
/// ```json
/// {
///   "selection": "Overall",
///   "stats": { "messages": 2, "words": 3, "media": 0, "links": 0 },
///   "monthly_timeline": [ { "label": "February-2023", "year": 2023, "month": 2, "count": 2 } ],
///   ...
/// }
/// ```
pub fn write_json(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Converts the report to a pretty-printed JSON string.
pub fn to_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
