//! Property-based tests for chatlens.
//!
//! These tests generate random transcripts to find edge cases.

use proptest::prelude::*;

use chatlens::prelude::*;
use chrono::{Duration, NaiveDate};

const SENDERS: &[&str] = &["Alice", "Bob", "Charlie", "Иван", "+91 98765 43210"];

const BODIES: &[&str] = &[
    "Hello",
    "Hi there!",
    "How are you?",
    "<Media omitted>",
    "see https://example.com/a and www.example.org",
    "Привет мир",
    "🎉🔥💀 emoji",
    "pizza pizza rust",
    "line one\nline two",
    "added Dave",
];

/// One generated line: sender index (`None` for a notification), body
/// index and minutes since the previous line.
type Entry = (Option<usize>, usize, i64);

/// Fast strategy: indices into predefined tables, no regex generation
fn arb_entries(max_len: usize) -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(
        (
            prop::option::weighted(0.9, 0..SENDERS.len()),
            0..BODIES.len(),
            0i64..5_000,
        ),
        0..max_len,
    )
}

fn render(entries: &[Entry]) -> String {
    let mut ts = NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let mut out = String::new();
    for &(sender, body, gap) in entries {
        ts += Duration::minutes(gap);
        let stamp = ts.format("%d/%m/%y, %H:%M");
        match sender {
            Some(s) => out.push_str(&format!("{} - {}: {}\n", stamp, SENDERS[s], BODIES[body])),
            None => out.push_str(&format!("{} - Alice added Bob\n", stamp)),
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSING PROPERTIES
    // ============================================

    /// Every generated line becomes exactly one record
    #[test]
    fn parse_keeps_every_message(entries in arb_entries(40)) {
        let transcript = parse(&render(&entries));
        prop_assert_eq!(transcript.len(), entries.len());
    }

    /// Records keep export order, so timestamps never go backwards
    #[test]
    fn parse_preserves_order(entries in arb_entries(40)) {
        let transcript = parse(&render(&entries));
        for pair in transcript.records().windows(2) {
            prop_assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    /// Participants always have a non-empty name
    #[test]
    fn parse_senders_non_empty(entries in arb_entries(40)) {
        let transcript = parse(&render(&entries));
        for record in transcript.iter() {
            if let Some(name) = record.sender.name() {
                prop_assert!(!name.trim().is_empty());
            }
        }
    }

    /// Parsing is deterministic
    #[test]
    fn parse_is_idempotent(entries in arb_entries(40)) {
        let text = render(&entries);
        prop_assert_eq!(parse(&text), parse(&text));
    }

    /// Arbitrary text never panics
    #[test]
    fn parse_never_panics(text in ".{0,200}") {
        let _ = parse(&text);
    }

    /// Arbitrary bytes never panic
    #[test]
    fn parse_bytes_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
        let _ = TranscriptParser::new().parse_bytes(&bytes);
    }

    // ============================================
    // SELECTION PROPERTIES
    // ============================================

    /// A participant never has more messages than the whole group,
    /// and participants together account for every message
    #[test]
    fn participants_partition_overall(entries in arb_entries(40)) {
        let transcript = parse(&render(&entries));
        let config = AnalysisConfig::default();
        let overall = basic_stats(&Selection::Overall, &transcript, &config);

        let mut sum = 0;
        for name in transcript.participants() {
            let stats = basic_stats(&Selection::participant(name), &transcript, &config);
            prop_assert!(stats.messages <= overall.messages);
            sum += stats.messages;
        }
        prop_assert_eq!(sum, overall.messages);
    }

    /// Busy-user shares add up to the overall message count
    #[test]
    fn busy_users_shares_sum_to_total(entries in arb_entries(40), top_n in 0usize..8) {
        let transcript = parse(&render(&entries));
        let overall = basic_stats(&Selection::Overall, &transcript, &AnalysisConfig::default());
        let users = busy_users(&transcript, top_n);

        prop_assert_eq!(users.total(), overall.messages);
        prop_assert!(users.top.len() <= top_n);
        for pair in users.shares.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
        if !users.shares.is_empty() {
            let percent: f64 = users.shares.iter().map(|s| s.percent).sum();
            prop_assert!((percent - 100.0).abs() < 0.1);
        }
    }

    // ============================================
    // AGGREGATION PROPERTIES
    // ============================================

    /// Activity maps always have a full set of buckets
    #[test]
    fn activity_maps_have_fixed_shape(entries in arb_entries(40)) {
        let transcript = parse(&render(&entries));
        let weekly = weekly_activity(&Selection::Overall, &transcript);
        let monthly = monthly_activity(&Selection::Overall, &transcript);
        prop_assert_eq!(weekly.len(), 7);
        prop_assert_eq!(monthly.len(), 12);
    }

    /// Every grouping accounts for every message
    #[test]
    fn groupings_sum_to_message_count(entries in arb_entries(40)) {
        let transcript = parse(&render(&entries));
        let overall = Selection::Overall;
        let messages = basic_stats(&overall, &transcript, &AnalysisConfig::default()).messages;

        let monthly: usize = monthly_timeline(&overall, &transcript).iter().map(|p| p.count).sum();
        let daily: usize = daily_timeline(&overall, &transcript).iter().map(|p| p.count).sum();
        prop_assert_eq!(monthly, messages);
        prop_assert_eq!(daily, messages);
        prop_assert_eq!(weekly_activity(&overall, &transcript).total(), messages);
        prop_assert_eq!(monthly_activity(&overall, &transcript).total(), messages);
        prop_assert_eq!(activity_heatmap(&overall, &transcript).total(), messages);
    }

    /// Timelines are strictly chronological
    #[test]
    fn timelines_are_chronological(entries in arb_entries(40)) {
        let transcript = parse(&render(&entries));
        let monthly = monthly_timeline(&Selection::Overall, &transcript);
        for pair in monthly.windows(2) {
            prop_assert!((pair[0].year, pair[0].month) < (pair[1].year, pair[1].month));
        }
        let daily = daily_timeline(&Selection::Overall, &transcript);
        for pair in daily.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
    }

    /// Word ranking is sorted, bounded and free of stop words
    #[test]
    fn word_frequency_sorted(entries in arb_entries(40), top in 0usize..10) {
        let transcript = parse(&render(&entries));
        let config = AnalysisConfig::default().with_top_words(top);
        let words = word_frequency(&Selection::Overall, &transcript, &config);

        prop_assert!(words.len() <= top);
        for pair in words.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
        for entry in &words {
            prop_assert!(!config.stop_words.contains(&entry.word));
        }
    }

    /// Emoji ranking is sorted
    #[test]
    fn emoji_frequency_sorted(entries in arb_entries(40)) {
        let transcript = parse(&render(&entries));
        let emojis = emoji_frequency(&Selection::Overall, &transcript);
        for pair in emojis.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }
}

// ============================================
// REGULAR TESTS (not property-based)
// ============================================

#[test]
fn notifications_are_not_messages() {
    let transcript = parse(&render(&[(None, 0, 0), (Some(0), 0, 1), (None, 0, 1)]));
    assert_eq!(transcript.len(), 3);
    let stats = basic_stats(&Selection::Overall, &transcript, &AnalysisConfig::default());
    assert_eq!(stats.messages, 1);
}

#[test]
fn multiline_bodies_survive_rendering() {
    let transcript = parse(&render(&[(Some(1), 8, 0)]));
    assert_eq!(transcript.records()[0].body, "line one\nline two");
}
