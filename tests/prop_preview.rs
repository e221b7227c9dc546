// Corpus Cleaner - tests/prop_preview.rs
//
// Property tests for the preview renderers and the occurrence tallies.

use corpus_cleaner::core::model::{join_segments, FileCount};
use corpus_cleaner::core::occurrence::{count_literal, rank_file_counts, MatchTally};
use corpus_cleaner::core::pattern::compile_find;
use corpus_cleaner::core::preview::{render_after, render_before};
use corpus_cleaner::core::natural_sort::natural_cmp;
use proptest::prelude::*;
use std::cmp::Ordering;

/// Small patterns that always compile.
fn pattern() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(r"\w+".to_string()),
        Just("a".to_string()),
        Just("[aeiou]".to_string()),
        Just(r"(\w)\w".to_string()),
        Just(r"\d*".to_string()),
        Just(" ".to_string()),
    ]
}

proptest! {
    // An empty find pattern is the identity for both views.
    #[test]
    fn empty_find_is_identity(text in ".*", replace in ".*") {
        let before = render_before(&text, "").unwrap();
        let after = render_after(&text, "", &replace).unwrap();
        prop_assert_eq!(join_segments(&before), text.clone());
        prop_assert_eq!(join_segments(&after), text);
        prop_assert!(before.iter().all(|s| !s.highlighted));
    }

    // The before view always reconstructs the input exactly.
    #[test]
    fn before_segments_reconstruct_text(text in "[a-z0-9 ]{0,40}", find in pattern()) {
        let segments = render_before(&text, &find).unwrap();
        prop_assert_eq!(join_segments(&segments), text);
        prop_assert!(segments.iter().all(|s| !s.text.is_empty()));
    }

    // The after view equals a plain substitution of the same patterns.
    #[test]
    fn after_segments_match_substitution(text in "[a-z ]{0,40}") {
        let segments = render_after(&text, "[aeiou]", "<$0>").unwrap();
        let expected = regex::Regex::new("[aeiou]").unwrap().replace_all(&text, "<$0>");
        prop_assert_eq!(join_segments(&segments), expected.into_owned());
    }

    // Tallies are ordered by non-increasing count, and their sum equals the
    // sum of per-file match counts.
    #[test]
    fn tally_is_ordered_and_complete(
        texts in prop::collection::vec("[a-c ]{0,20}", 0..6),
        find in prop_oneof![Just("a+".to_string()), Just("[abc]".to_string()), Just(r"(b)|c".to_string())],
    ) {
        let regex = compile_find(&find).unwrap();
        let mut tally = MatchTally::new();
        let mut per_file_total = 0;
        for text in &texts {
            per_file_total += tally.add_text(&regex, text);
        }
        let ranked = tally.into_ranked();
        prop_assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
        prop_assert_eq!(ranked.iter().map(|c| c.count).sum::<usize>(), per_file_total);
        prop_assert_eq!(
            per_file_total,
            texts.iter().map(|t| regex.find_iter(t).count()).sum::<usize>()
        );
    }

    // Per-file counts drop zeros and never increase down the list.
    #[test]
    fn file_counts_ranked(texts in prop::collection::vec("[ab]{0,12}", 0..8)) {
        let counts: Vec<FileCount> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| FileCount { file_name: format!("{i}.txt"), count: count_literal(t, "ab") })
            .collect();
        let ranked = rank_file_counts(counts);
        prop_assert!(ranked.iter().all(|c| c.count > 0));
        prop_assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
    }

    // Natural comparison is a total order consistent with equality.
    #[test]
    fn natural_cmp_is_antisymmetric(a in "[a-c]{0,3}[0-9]{0,4}\\.txt", b in "[a-c]{0,3}[0-9]{0,4}\\.txt") {
        let forward = natural_cmp(&a, &b);
        prop_assert_eq!(forward, natural_cmp(&b, &a).reverse());
        prop_assert_eq!(forward == Ordering::Equal, a == b);
    }
}
