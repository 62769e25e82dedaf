//! Activity maps: weekday, month and weekday x hour distributions.
//!
//! Unlike the timelines, activity maps always contain every bucket, so a
//! chart has a stable shape regardless of how sparse the data is.

use chrono::Weekday;
use serde::Serialize;

use crate::core::filter::Selection;
use crate::record::{MONTH_NAMES, WEEKDAY_NAMES, hour_bucket_label};
use crate::transcript::Transcript;

/// One named bucket of an [`ActivityMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bucket {
    /// Weekday or month name
    pub label: &'static str,
    /// Number of messages
    pub count: usize,
}

/// Message counts per weekday or per month, in calendar order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActivityMap {
    buckets: Vec<Bucket>,
}

impl ActivityMap {
    fn zeroed(labels: &[&'static str]) -> Self {
        Self {
            buckets: labels
                .iter()
                .map(|&label| Bucket { label, count: 0 })
                .collect(),
        }
    }

    /// Buckets in calendar order.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Number of buckets (7 or 12).
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `true` if the map has no buckets.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Count for the bucket named `label`.
    pub fn get(&self, label: &str) -> Option<usize> {
        self.buckets
            .iter()
            .find(|b| b.label == label)
            .map(|b| b.count)
    }

    /// The first bucket with the highest count, or `None` if all are zero.
    pub fn busiest(&self) -> Option<&Bucket> {
        let max = self.buckets.iter().map(|b| b.count).max()?;
        if max == 0 {
            return None;
        }
        self.buckets.iter().find(|b| b.count == max)
    }

    /// Sum of all buckets.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

/// Messages per weekday, Monday through Sunday.
///
/// # Example
///
/// ```rust
/// use chatlens::core::{Selection, weekly_activity};
///
/// // 1 February 2023 was a Wednesday
/// let transcript = chatlens::parse("01/02/23, 10:00 - Alice: hi\n");
/// let map = weekly_activity(&Selection::Overall, &transcript);
///
/// assert_eq!(map.len(), 7);
/// assert_eq!(map.get("Wednesday"), Some(1));
/// assert_eq!(map.get("Monday"), Some(0));
/// ```
pub fn weekly_activity(selection: &Selection, transcript: &Transcript) -> ActivityMap {
    let mut map = ActivityMap::zeroed(&WEEKDAY_NAMES);
    for record in transcript.view(selection).iter() {
        map.buckets[record.weekday().num_days_from_monday() as usize].count += 1;
    }
    map
}

/// Messages per month name, January through December, across all years.
pub fn monthly_activity(selection: &Selection, transcript: &Transcript) -> ActivityMap {
    let mut map = ActivityMap::zeroed(&MONTH_NAMES);
    for record in transcript.view(selection).iter() {
        map.buckets[(record.month() - 1) as usize].count += 1;
    }
    map
}

/// Weekday x hour-of-day message counts.
///
/// Rows are weekdays (Monday first), columns are one-hour buckets labelled
/// `"00-01"` through `"23-00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    /// Row labels
    pub weekdays: Vec<&'static str>,
    /// Column labels
    pub hours: Vec<String>,
    /// `counts[weekday][hour]`
    pub counts: Vec<[usize; 24]>,
}

impl Heatmap {
    fn zeroed() -> Self {
        Self {
            weekdays: WEEKDAY_NAMES.to_vec(),
            hours: (0..24).map(hour_bucket_label).collect(),
            counts: vec![[0; 24]; 7],
        }
    }

    /// Count for `weekday` at `hour` (0-23); out-of-range hours yield 0.
    pub fn get(&self, weekday: Weekday, hour: u32) -> usize {
        self.counts[weekday.num_days_from_monday() as usize]
            .get(hour as usize)
            .copied()
            .unwrap_or(0)
    }

    /// The 24 hourly counts for `weekday`.
    pub fn row(&self, weekday: Weekday) -> &[usize; 24] {
        &self.counts[weekday.num_days_from_monday() as usize]
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

/// Builds the weekday x hour [`Heatmap`] for `selection`.
pub fn activity_heatmap(selection: &Selection, transcript: &Transcript) -> Heatmap {
    let mut heatmap = Heatmap::zeroed();
    for record in transcript.view(selection).iter() {
        let row = record.weekday().num_days_from_monday() as usize;
        heatmap.counts[row][record.hour() as usize] += 1;
    }
    heatmap
}
