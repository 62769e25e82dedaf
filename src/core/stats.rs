//! Headline statistics: messages, words, media and links.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::core::filter::Selection;
use crate::transcript::Transcript;

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("URL pattern is valid"));

/// Totals for one selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BasicStats {
    /// Number of messages (notifications excluded)
    pub messages: usize,
    /// Whitespace-separated tokens across all text messages
    pub words: usize,
    /// Messages whose body is a media placeholder
    pub media: usize,
    /// URLs found across all messages
    pub links: usize,
}

/// Computes [`BasicStats`] for `selection`.
///
/// Media placeholders count as media messages and contribute no words.
///
/// # Example
///
/// ```rust
/// use chatlens::config::AnalysisConfig;
/// use chatlens::core::{Selection, basic_stats};
///
/// let transcript = chatlens::parse(
///     "01/02/23, 10:00 - Alice: see https://example.com\n\
///      01/02/23, 10:01 - Alice: <Media omitted>\n",
/// );
/// let stats = basic_stats(&Selection::Overall, &transcript, &AnalysisConfig::default());
///
/// assert_eq!(stats.messages, 2);
/// assert_eq!(stats.words, 2);
/// assert_eq!(stats.media, 1);
/// assert_eq!(stats.links, 1);
/// ```
pub fn basic_stats(
    selection: &Selection,
    transcript: &Transcript,
    config: &AnalysisConfig,
) -> BasicStats {
    let view = transcript.view(selection);

    view.iter().fold(BasicStats::default(), |mut stats, record| {
        stats.messages += 1;
        if config.is_media(&record.body) {
            stats.media += 1;
        } else {
            stats.words += record.body.split_whitespace().count();
        }
        stats.links += count_links(&record.body);
        stats
    })
}

/// Number of URLs in `text`.
pub fn count_links(text: &str) -> usize {
    URL.find_iter(text).count()
}
