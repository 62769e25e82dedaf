//! Shared parsing utilities.
//!
//! - [`timestamp`] - the ordered table of supported date/time formats
//! - [`line`] - timestamp-marker detection and sender splitting

pub mod line;
pub mod timestamp;

pub use line::{DEFAULT_SYSTEM_MARKERS, MarkerLine, MarkerPattern, split_marker, split_sender};
pub use timestamp::TimestampFormats;
