//! Property-based tests for chatlens.
//!
//! These tests generate random exports to find edge cases.

use proptest::prelude::*;

use chatlens::prelude::*;

const SENDERS: &[&str] = &["Alice", "Bob", "Charlie", "User123", "Иван", "+1 555 0100"];

/// A well-formed record line: (sender, body, day, month, year, hour, minute).
type Line = (String, String, u32, u32, u32, u32, u32);

/// Generate a random well-formed line using fast strategies (no regex!)
fn arb_line() -> impl Strategy<Value = Line> {
    (
        prop::sample::select(SENDERS.iter().map(|s| s.to_string()).collect::<Vec<_>>()),
        prop::sample::select(vec![
            "Hello".to_string(),
            "Hi there!".to_string(),
            "How are you?".to_string(),
            "Test message 123".to_string(),
            "Привет мир".to_string(),
            "<Media omitted>".to_string(),
            "see https://example.com".to_string(),
            "colons: inside: body".to_string(),
            "Special;chars\"here".to_string(),
            "🎉🔥💀 emoji".to_string(),
        ]),
        1u32..=28,
        1u32..=12,
        0u32..=99,
        0u32..=23,
        0u32..=59,
    )
}

fn render(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|(sender, body, d, m, y, h, min)| {
            format!("[{d}/{m}/{y:02}, {h:02}:{min:02}:00] {sender}: {body}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn enriched(lines: &[Line]) -> Vec<EnrichedRecord> {
    let log = LineParser::new().parse_str(&render(lines)).unwrap();
    enrich_all(log.records)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// Every well-formed line becomes exactly one record
    #[test]
    fn parse_one_record_per_line(lines in prop::collection::vec(arb_line(), 1..40)) {
        let log = LineParser::new().parse_str(&render(&lines)).unwrap();
        prop_assert_eq!(log.records.len(), lines.len());
        prop_assert_eq!(log.matched_lines, lines.len());
        prop_assert_eq!(log.skipped_lines, 0);
        prop_assert_eq!(log.undated, 0);
    }

    /// Senders and bodies survive parsing unchanged
    #[test]
    fn parse_preserves_fields(lines in prop::collection::vec(arb_line(), 1..20)) {
        let log = LineParser::new().parse_str(&render(&lines)).unwrap();
        for (rec, line) in log.records.iter().zip(&lines) {
            prop_assert_eq!(&rec.sender, &line.0);
            prop_assert_eq!(&rec.body, &line.1);
        }
    }

    /// Parsing the same text twice gives the same result
    #[test]
    fn parse_is_deterministic(lines in prop::collection::vec(arb_line(), 1..20)) {
        let text = render(&lines);
        let first = LineParser::new().parse_str(&text).unwrap();
        let second = LineParser::new().parse_str(&text).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Arbitrary input never panics
    #[test]
    fn parse_never_panics(text in any::<String>()) {
        let _ = LineParser::new().parse_str(&text);
    }

    /// Arbitrary text after a valid line is either a continuation or skipped
    #[test]
    fn parse_arbitrary_tail_is_accounted_for(
        line in arb_line(),
        tail in prop::collection::vec("[a-z ]{1,12}", 0..5),
    ) {
        let mut text = render(&[line]);
        for t in &tail {
            text.push('\n');
            text.push_str(t);
        }
        let log = LineParser::new().parse_str(&text).unwrap();
        prop_assert_eq!(log.records.len(), 1);
        prop_assert_eq!(
            log.matched_lines + log.continuation_lines + log.skipped_lines,
            log.lines_scanned
        );
    }

    // ============================================
    // AGGREGATION PROPERTIES
    // ============================================

    /// Per-user counts add up to the total
    #[test]
    fn per_user_sum_is_total(lines in prop::collection::vec(arb_line(), 1..40)) {
        let records = enriched(&lines);
        let sum: usize = stats::per_user_counts(&records).iter().map(|u| u.count).sum();
        prop_assert_eq!(sum, stats::total_messages(&records));
    }

    /// Per-period counts add up to the total when every record is dated
    #[test]
    fn per_period_sum_is_total(lines in prop::collection::vec(arb_line(), 1..40)) {
        let records = enriched(&lines);
        let sum: usize = stats::per_period_counts(&records).iter().map(|p| p.count).sum();
        prop_assert_eq!(sum, records.len());
    }

    /// Periods come out in strictly ascending order
    #[test]
    fn per_period_is_sorted(lines in prop::collection::vec(arb_line(), 1..40)) {
        let records = enriched(&lines);
        let periods = stats::per_period_counts(&records);
        for pair in periods.windows(2) {
            prop_assert!(pair[0].period() < pair[1].period());
        }
    }

    /// Per-user counts are sorted by count, most active first
    #[test]
    fn per_user_is_sorted(lines in prop::collection::vec(arb_line(), 1..40)) {
        let records = enriched(&lines);
        let users = stats::per_user_counts(&records);
        for pair in users.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }

    /// Media and link counts never exceed the message total
    #[test]
    fn media_and_links_bounded(lines in prop::collection::vec(arb_line(), 1..40)) {
        let records = enriched(&lines);
        prop_assert!(stats::media_count(&records) <= records.len());
        prop_assert!(stats::link_count(&records) <= records.len());
    }

    // ============================================
    // FILTER PROPERTIES
    // ============================================

    /// Splitting by sender partitions the records without loss
    #[test]
    fn filter_by_user_partitions(lines in prop::collection::vec(arb_line(), 1..40)) {
        let records = enriched(&lines);
        let mut total = 0;

        for user in stats::per_user_counts(&records) {
            let part = filter_by_user(&records, &user.sender).unwrap();
            prop_assert_eq!(part.len(), user.count);
            prop_assert!(part.iter().all(|r| r.sender() == user.sender));

            // order inside a partition follows the original order
            let expected: Vec<&EnrichedRecord> =
                records.iter().filter(|r| r.sender() == user.sender).collect();
            prop_assert_eq!(part.iter().collect::<Vec<_>>(), expected);

            total += part.len();
        }
        prop_assert_eq!(total, records.len());
    }

    /// Filtering never adds records
    #[test]
    fn date_filter_never_grows(
        lines in prop::collection::vec(arb_line(), 1..40),
        year in 2000i32..2030,
    ) {
        let records = enriched(&lines);
        let original = records.len();
        let filter = FilterConfig::new()
            .with_date_from(&format!("{year}-01-01"))
            .unwrap();
        let filtered = apply_filters(records, &filter).unwrap();
        prop_assert!(filtered.len() <= original);
        prop_assert!(filtered.iter().all(|r| r.calendar.is_some_and(|c| c.year >= year)));
    }

    /// An inactive filter keeps everything
    #[test]
    fn empty_filter_is_identity(lines in prop::collection::vec(arb_line(), 0..20)) {
        let records: Vec<EnrichedRecord> = if lines.is_empty() {
            Vec::new()
        } else {
            enriched(&lines)
        };
        let filtered = apply_filters(records.clone(), &FilterConfig::new()).unwrap();
        prop_assert_eq!(filtered, records);
    }

    // ============================================
    // REPORT PROPERTIES
    // ============================================

    /// The report agrees with the standalone aggregations
    #[test]
    fn report_matches_stats(lines in prop::collection::vec(arb_line(), 1..30)) {
        let text = render(&lines);
        let report = analyze(&text, &AnalysisConfig::default()).unwrap();
        let records = enriched(&lines);

        prop_assert_eq!(report.total_messages, stats::total_messages(&records));
        prop_assert_eq!(report.total_words, stats::total_words(&records));
        prop_assert_eq!(report.unique_users, stats::unique_users(&records));
        prop_assert!(report.top_users.len() <= 10);
        prop_assert!(report.top_words.len() <= 20);
    }
}
