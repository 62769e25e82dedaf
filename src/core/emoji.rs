//! Emoji frequency.
//!
//! Bodies are segmented into extended grapheme clusters, so a ZWJ sequence
//! (👨‍👩‍👧), a skin-tone variant (👍🏽), a flag (🇯🇵) or a keycap (1️⃣) counts as
//! a single emoji.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::core::filter::Selection;
use crate::transcript::Transcript;

static PICTOGRAPHIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Extended_Pictographic}").expect("emoji pattern is valid")
});

const KEYCAP: char = '\u{20E3}';

/// An emoji and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    /// The emoji, as one grapheme cluster
    pub emoji: String,
    /// Number of occurrences
    pub count: usize,
}

fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

/// Returns `true` if the grapheme cluster is an emoji.
pub fn is_emoji(cluster: &str) -> bool {
    PICTOGRAPHIC.is_match(cluster)
        || cluster.contains(KEYCAP)
        || cluster.chars().filter(|&c| is_regional_indicator(c)).count() >= 2
}

/// Iterates over the emoji in `text`, in order of appearance.
pub fn emojis(text: &str) -> impl Iterator<Item = &str> {
    text.graphemes(true).filter(|cluster| is_emoji(cluster))
}

/// Every emoji used by `selection`, most frequent first.
///
/// Emoji with equal counts keep the order in which they first appeared.
///
/// # Example
///
/// ```rust
/// use chatlens::core::{Selection, emoji_frequency};
///
/// let transcript = chatlens::parse(
///     "01/02/23, 10:00 - Alice: 🎉 ok 😂😂\n\
///      01/02/23, 10:01 - Bob: 🎉😂\n",
/// );
/// let emojis = emoji_frequency(&Selection::Overall, &transcript);
///
/// assert_eq!(emojis[0].emoji, "😂");
/// assert_eq!(emojis[0].count, 3);
/// assert_eq!(emojis[1].emoji, "🎉");
/// ```
pub fn emoji_frequency(selection: &Selection, transcript: &Transcript) -> Vec<EmojiCount> {
    let mut ranking: Vec<EmojiCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in transcript.view(selection).iter() {
        for emoji in emojis(&record.body) {
            match index.get(emoji) {
                Some(&i) => ranking[i].count += 1,
                None => {
                    index.insert(emoji, ranking.len());
                    ranking.push(EmojiCount {
                        emoji: emoji.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking
}
