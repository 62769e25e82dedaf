//! Word frequency and stop-word lists.
//!
//! Tokens are produced by splitting bodies on whitespace, lowercasing, and
//! trimming punctuation from both ends (`"Pizza!"` and `"pizza"` are the
//! same word). Media placeholders, notifications and stop words never
//! count.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::core::filter::Selection;
use crate::error::{ChatlensError, Result};
use crate::transcript::Transcript;

/// A set of lowercase words excluded from word frequency.
///
/// Serialized as a sorted list of strings.
///
/// # Example
///
/// ```rust
/// use chatlens::core::StopWords;
///
/// let custom = StopWords::from_list("hai\n  Ka \n\n# comment\n");
/// assert!(custom.contains("hai"));
/// assert!(custom.contains("KA"));
/// assert_eq!(custom.len(), 2);
///
/// assert!(StopWords::english().contains("the"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty list; every word counts.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// The English list shipped with the `stop-words` crate.
    pub fn english() -> Self {
        stop_words::get(stop_words::LANGUAGE::English)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Parses a newline-separated list.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_list(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    /// Reads a newline-separated list from `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ChatlensError::read(path, e))?;
        let stop_words = Self::from_list(&text);
        debug!(path = %path.display(), words = stop_words.len(), "loaded stop words");
        Ok(stop_words)
    }

    /// Returns `true` if `word` (compared lowercase) is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Adds a word.
    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl From<Vec<String>> for StopWords {
    fn from(words: Vec<String>) -> Self {
        words.into_iter().collect()
    }
}

impl From<StopWords> for Vec<String> {
    fn from(stop_words: StopWords) -> Self {
        let mut words: Vec<String> = stop_words.words.into_iter().collect();
        words.sort_unstable();
        words
    }
}

/// A word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    /// Lowercase word
    pub word: String,
    /// Number of occurrences
    pub count: usize,
}

/// Normalizes a whitespace-separated token into a countable word.
///
/// Returns `None` when nothing alphanumeric is left.
fn normalize(token: &str) -> Option<String> {
    let word = token.trim_matches(|c: char| !c.is_alphanumeric());
    if word.is_empty() {
        None
    } else {
        Some(word.to_lowercase())
    }
}

/// The `config.top_words` most frequent words, most frequent first.
///
/// Words with equal counts keep the order in which they first appeared.
///
/// # Example
///
/// ```rust
/// use chatlens::config::AnalysisConfig;
/// use chatlens::core::{Selection, word_frequency};
///
/// let transcript = chatlens::parse(
///     "01/02/23, 10:00 - Alice: rust then pizza\n\
///      01/02/23, 10:01 - Bob: Pizza!\n",
/// );
/// let words = word_frequency(&Selection::Overall, &transcript, &AnalysisConfig::default());
///
/// assert_eq!(words[0].word, "pizza");
/// assert_eq!(words[0].count, 2);
/// assert_eq!(words[1].word, "rust");
/// ```
pub fn word_frequency(
    selection: &Selection,
    transcript: &Transcript,
    config: &AnalysisConfig,
) -> Vec<WordCount> {
    let mut ranking: Vec<WordCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in transcript.view(selection).iter() {
        if config.is_media(&record.body) {
            continue;
        }

        for word in record.body.split_whitespace().filter_map(normalize) {
            if config.stop_words.contains(&word) {
                continue;
            }
            match index.get(&word) {
                Some(&i) => ranking[i].count += 1,
                None => {
                    index.insert(word.clone(), ranking.len());
                    ranking.push(WordCount { word, count: 1 });
                }
            }
        }
    }

    // Stable sort keeps first-occurrence order among equal counts
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking.truncate(config.top_words);
    ranking
}
