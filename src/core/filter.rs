//! Participant selection and read-only record views.
//!
//! Every query starts from a [`View`]: the transcript's records restricted
//! to one participant (or all of them), with system notifications removed.
//!
//! # Examples
//!
//! ```
//! use chatlens::core::filter::Selection;
//!
//! let transcript = chatlens::parse(
//!     "01/02/23, 10:00 - Bob: one\n\
//!      01/02/23, 10:01 - Alice: two\n\
//!      01/02/23, 10:02 - Bob: three\n\
//!      01/02/23, 10:03 - Bob added Carol\n",
//! );
//!
//! assert_eq!(transcript.view(&Selection::Overall).len(), 3);
//! assert_eq!(transcript.view(&"Bob".parse().unwrap()).len(), 2);
//! assert!(transcript.view(&Selection::participant("Carol")).is_empty());
//! ```
//!
//! # Behavior Notes
//!
//! - Participant matching is exact (case-sensitive)
//! - System notifications are never part of a view
//! - An unknown participant yields an empty view, not an error

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::record::Record;
use crate::transcript::Transcript;

/// Selector value meaning "all participants".
pub const OVERALL: &str = "Overall";

/// Which participant's messages a query looks at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// Every participant (the group as a whole).
    #[default]
    Overall,
    /// A single participant, by exact display name.
    Participant(String),
}

impl Selection {
    /// Creates a single-participant selection.
    pub fn participant(name: impl Into<String>) -> Self {
        Selection::Participant(name.into())
    }

    /// Returns `true` for [`Selection::Overall`].
    pub fn is_overall(&self) -> bool {
        matches!(self, Selection::Overall)
    }

    /// Returns `true` if `record` belongs to this selection.
    ///
    /// System notifications never match.
    pub fn matches(&self, record: &Record) -> bool {
        match (self, record.sender.name()) {
            (_, None) => false,
            (Selection::Overall, Some(_)) => true,
            (Selection::Participant(wanted), Some(name)) => wanted == name,
        }
    }
}

impl FromStr for Selection {
    type Err = Infallible;

    /// `"Overall"` selects everyone; any other string selects that participant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == OVERALL {
            Selection::Overall
        } else {
            Selection::participant(s)
        })
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Overall => f.write_str(OVERALL),
            Selection::Participant(name) => f.write_str(name),
        }
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Read-only, filtered view over a [`Transcript`].
///
/// Holds references only; the transcript is never modified.
#[derive(Debug, Clone)]
pub struct View<'a> {
    records: Vec<&'a Record>,
}

impl<'a> View<'a> {
    /// Builds the view of `transcript` for `selection`.
    pub fn new(transcript: &'a Transcript, selection: &Selection) -> Self {
        let records = transcript
            .iter()
            .filter(|record| selection.matches(record))
            .collect();
        Self { records }
    }

    /// Records in export order.
    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    /// Iterates over records in export order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    /// Number of messages in the view.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the view holds no messages.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
