//! Busiest participants.
//!
//! Always computed over the whole group: a participant's share only makes
//! sense relative to everyone else.

use std::collections::HashMap;

use serde::Serialize;

use crate::core::filter::Selection;
use crate::transcript::Transcript;

/// A sender and their message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SenderCount {
    /// Participant name
    pub sender: String,
    /// Number of messages
    pub count: usize,
}

/// A sender's share of all messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderShare {
    /// Participant name
    pub sender: String,
    /// Number of messages
    pub count: usize,
    /// Share of all messages in percent, rounded to two decimals
    pub percent: f64,
}

/// Result of [`busy_users`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    /// The most active senders, most active first
    pub top: Vec<SenderCount>,
    /// Every sender with their share, most active first
    pub shares: Vec<SenderShare>,
}

impl BusyUsers {
    /// Total messages across all senders.
    pub fn total(&self) -> usize {
        self.shares.iter().map(|s| s.count).sum()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Ranks senders by message count.
///
/// `top` holds at most `top_n` senders; `shares` holds all of them. Senders
/// with equal counts keep the order in which they first appeared.
/// Notifications are not attributed to anyone and are not counted.
///
/// # Example
///
/// ```rust
/// use chatlens::core::busy_users;
///
/// let transcript = chatlens::parse(
///     "01/02/23, 10:00 - Bob: one\n\
///      01/02/23, 10:01 - Alice: two\n\
///      01/02/23, 10:02 - Bob: three\n",
/// );
/// let users = busy_users(&transcript, 1);
///
/// assert_eq!(users.top.len(), 1);
/// assert_eq!(users.top[0].sender, "Bob");
/// assert_eq!(users.shares[0].percent, 66.67);
/// assert_eq!(users.shares[1].percent, 33.33);
/// ```
pub fn busy_users(transcript: &Transcript, top_n: usize) -> BusyUsers {
    let mut counts: Vec<SenderCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in transcript.view(&Selection::Overall).iter() {
        let Some(name) = record.sender.name() else {
            continue;
        };
        match index.get(name) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(name, counts.len());
                counts.push(SenderCount {
                    sender: name.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));

    let total: usize = counts.iter().map(|c| c.count).sum();
    let shares = counts
        .iter()
        .map(|c| SenderShare {
            sender: c.sender.clone(),
            count: c.count,
            percent: round2(c.count as f64 / total as f64 * 100.0),
        })
        .collect();

    counts.truncate(top_n);
    BusyUsers {
        top: counts,
        shares,
    }
}
