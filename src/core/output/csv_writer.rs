//! CSV writer for the parsed record table.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::record::Record;
use crate::transcript::Transcript;

const HEADER: [&str; 3] = ["timestamp", "sender", "body"];
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes every record (notifications included) as CSV.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `timestamp`, `sender`, `body`
/// - Timestamps as `YYYY-MM-DD HH:MM:SS`; notifications have sender `<system>`
/// - Encoding: UTF-8
pub fn write_records_csv(transcript: &Transcript, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(transcript, file)
}

/// Converts the record table to a CSV string.
///
/// Same format as [`write_records_csv`].
pub fn records_to_csv(transcript: &Transcript) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(transcript, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(transcript: &Transcript, output: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(output);

    writer.write_record(HEADER)?;
    for record in transcript {
        writer.write_record(build_record(record))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_record(record: &Record) -> [String; 3] {
    [
        record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        record.sender.to_string(),
        record.body.clone(),
    ]
}
