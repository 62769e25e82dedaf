//! Message counts over time.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::filter::Selection;
use crate::record::MONTH_NAMES;
use crate::transcript::Transcript;

/// Messages in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    /// Display label such as `"January-2023"`
    pub label: String,
    /// Calendar year
    pub year: i32,
    /// Month number, 1 through 12
    pub month: u32,
    /// Number of messages
    pub count: usize,
}

/// Messages on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    /// The day
    pub date: NaiveDate,
    /// Number of messages
    pub count: usize,
}

/// Messages per month, in chronological order.
///
/// Only months with at least one message appear.
///
/// # Example
///
/// ```rust
/// use chatlens::core::{Selection, monthly_timeline};
///
/// let transcript = chatlens::parse(
///     "15/02/23, 10:00 - Alice: later\n\
///      15/12/22, 10:00 - Alice: earlier\n",
/// );
/// let timeline = monthly_timeline(&Selection::Overall, &transcript);
///
/// assert_eq!(timeline[0].label, "December-2022");
/// assert_eq!(timeline[1].label, "February-2023");
/// ```
pub fn monthly_timeline(selection: &Selection, transcript: &Transcript) -> Vec<MonthlyPoint> {
    let mut counts: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in transcript.view(selection).iter() {
        *counts.entry((record.year(), record.month())).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((year, month), count)| MonthlyPoint {
            label: format!("{}-{}", MONTH_NAMES[(month - 1) as usize], year),
            year,
            month,
            count,
        })
        .collect()
}

/// Messages per day, in chronological order.
///
/// Only days with at least one message appear.
pub fn daily_timeline(selection: &Selection, transcript: &Transcript) -> Vec<DailyPoint> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in transcript.view(selection).iter() {
        *counts.entry(record.date()).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(date, count)| DailyPoint { date, count })
        .collect()
}
