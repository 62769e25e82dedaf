//! The immutable record table.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::filter::{OVERALL, Selection, View};
use crate::record::Record;

/// Parsed transcript: records in export order.
///
/// Built once per input and never mutated afterwards. Queries read it
/// through a [`View`].
///
/// # Example
///
/// ```rust
/// let transcript = chatlens::parse(
///     "01/02/23, 10:00 - Bob: Hi\n01/02/23, 10:01 - Alice: Hello\n",
/// );
///
/// assert_eq!(transcript.len(), 2);
/// assert_eq!(transcript.participants(), vec!["Alice", "Bob"]);
/// assert_eq!(transcript.selection_options(), vec!["Overall", "Alice", "Bob"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    records: Vec<Record>,
}

impl Transcript {
    /// Wraps records that are already in export order.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Returns all records, system notifications included.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records, system notifications included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing was parsed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over records in export order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Distinct participant names, sorted, without the system sender.
    pub fn participants(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|r| r.sender.name())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Values offered for participant selection: `"Overall"` followed by
    /// [`participants`](Self::participants).
    pub fn selection_options(&self) -> Vec<String> {
        std::iter::once(OVERALL)
            .chain(self.participants())
            .map(str::to_string)
            .collect()
    }

    /// Read-only view restricted to `selection`, without notifications.
    pub fn view(&self, selection: &Selection) -> View<'_> {
        View::new(self, selection)
    }
}

impl FromIterator<Record> for Transcript {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
