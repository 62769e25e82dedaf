//! One-shot analysis: every query for one selection, bundled in a report.

use serde::Serialize;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::core::activity::{
    ActivityMap, Heatmap, activity_heatmap, monthly_activity, weekly_activity,
};
use crate::core::emoji::{EmojiCount, emoji_frequency};
use crate::core::filter::Selection;
use crate::core::stats::{BasicStats, basic_stats};
use crate::core::timeline::{DailyPoint, MonthlyPoint, daily_timeline, monthly_timeline};
use crate::core::users::{BusyUsers, busy_users};
use crate::core::words::{WordCount, word_frequency};
use crate::transcript::Transcript;

/// Results of every query for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// The participant (or `"Overall"`) the report describes
    pub selection: Selection,
    /// Headline totals
    pub stats: BasicStats,
    /// Messages per calendar month
    pub monthly_timeline: Vec<MonthlyPoint>,
    /// Messages per day
    pub daily_timeline: Vec<DailyPoint>,
    /// Messages per weekday
    pub weekly_activity: ActivityMap,
    /// Messages per month name
    pub monthly_activity: ActivityMap,
    /// Weekday x hour counts
    pub heatmap: Heatmap,
    /// Sender ranking; only present for the Overall selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    /// Most common words
    pub top_words: Vec<WordCount>,
    /// Emoji usage
    pub emojis: Vec<EmojiCount>,
}

impl AnalysisReport {
    /// Returns `true` if the selection has no messages.
    pub fn is_empty(&self) -> bool {
        self.stats.messages == 0
    }
}

/// Runs every query for `selection`.
///
/// # Example
///
/// ```rust
/// use chatlens::config::AnalysisConfig;
/// use chatlens::core::{Selection, analyze};
///
/// let transcript = chatlens::parse(
///     "01/02/23, 10:00 - Alice: Hello there\n\
///      01/02/23, 10:05 - Bob: hi 👋\n",
/// );
///
/// let report = analyze(&transcript, &Selection::Overall, &AnalysisConfig::default());
/// assert_eq!(report.stats.messages, 2);
/// assert!(report.busy_users.is_some());
///
/// let report = analyze(&transcript, &Selection::participant("Bob"), &AnalysisConfig::default());
/// assert_eq!(report.stats.messages, 1);
/// assert!(report.busy_users.is_none());
/// assert_eq!(report.emojis[0].emoji, "👋");
/// ```
pub fn analyze(
    transcript: &Transcript,
    selection: &Selection,
    config: &AnalysisConfig,
) -> AnalysisReport {
    let report = AnalysisReport {
        selection: selection.clone(),
        stats: basic_stats(selection, transcript, config),
        monthly_timeline: monthly_timeline(selection, transcript),
        daily_timeline: daily_timeline(selection, transcript),
        weekly_activity: weekly_activity(selection, transcript),
        monthly_activity: monthly_activity(selection, transcript),
        heatmap: activity_heatmap(selection, transcript),
        busy_users: selection
            .is_overall()
            .then(|| busy_users(transcript, config.top_users)),
        top_words: word_frequency(selection, transcript, config),
        emojis: emoji_frequency(selection, transcript),
    };

    debug!(
        selection = %selection,
        messages = report.stats.messages,
        "analysis complete"
    );

    report
}
