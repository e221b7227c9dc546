// Corpus Cleaner - core/occurrence.rs
//
// Frequency tallies over already-loaded file contents.
// Core layer: the app layer owns reading the files.

use crate::core::model::{FileCount, MatchCount};
use crate::core::pattern::tally_key;
use regex::Regex;
use std::collections::HashMap;

/// Accumulates match frequencies across many texts.
///
/// Entries remember the order in which each distinct match was first seen so
/// that equal counts keep a stable, meaningful order after ranking.
#[derive(Debug, Default)]
pub struct MatchTally {
    counts: Vec<MatchCount>,
    index: HashMap<String, usize>,
}

impl MatchTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every non-overlapping match of `regex` in `text`.
    /// Returns the number of matches found in this text.
    pub fn add_text(&mut self, regex: &Regex, text: &str) -> usize {
        let mut found = 0;
        for caps in regex.captures_iter(text) {
            let key = tally_key(regex, &caps);
            match self.index.get(key) {
                Some(&i) => self.counts[i].count += 1,
                None => {
                    self.index.insert(key.to_string(), self.counts.len());
                    self.counts.push(MatchCount {
                        matched: key.to_string(),
                        count: 1,
                    });
                }
            }
            found += 1;
        }
        found
    }

    /// Total number of matches recorded so far.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    /// Entries by descending count; ties keep first-encounter order.
    pub fn into_ranked(self) -> Vec<MatchCount> {
        let mut counts = self.counts;
        // sort_by is stable, so insertion order survives among equal counts.
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }
}

/// Count literal, non-overlapping, left-to-right occurrences of `substring`.
/// An empty substring never counts.
pub fn count_literal(text: &str, substring: &str) -> usize {
    if substring.is_empty() {
        return 0;
    }
    text.matches(substring).count()
}

/// Drop zero counts and order the rest by descending count, keeping the
/// input order among ties.
pub fn rank_file_counts(counts: Vec<FileCount>) -> Vec<FileCount> {
    let mut kept: Vec<FileCount> = counts.into_iter().filter(|c| c.count > 0).collect();
    kept.sort_by(|a, b| b.count.cmp(&a.count));
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_orders_by_count_then_first_seen() {
        let regex = Regex::new(r"\w+").unwrap();
        let mut tally = MatchTally::new();
        tally.add_text(&regex, "b a b");
        tally.add_text(&regex, "c a");
        let ranked = tally.into_ranked();
        let pairs: Vec<(&str, usize)> = ranked
            .iter()
            .map(|c| (c.matched.as_str(), c.count))
            .collect();
        assert_eq!(pairs, vec![("b", 2), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_tally_uses_first_group() {
        let regex = Regex::new(r"(\w)at").unwrap();
        let mut tally = MatchTally::new();
        assert_eq!(tally.add_text(&regex, "cat hat cat"), 3);
        let ranked = tally.into_ranked();
        assert_eq!(ranked[0].matched, "c");
        assert_eq!(ranked[0].count, 2);
        assert_eq!(ranked[1].matched, "h");
    }

    #[test]
    fn test_tally_total_matches_per_text_sum() {
        let regex = Regex::new("a").unwrap();
        let mut tally = MatchTally::new();
        let per_text = tally.add_text(&regex, "banana") + tally.add_text(&regex, "apple");
        assert_eq!(tally.total(), per_text);
        assert_eq!(per_text, 4);
    }

    #[test]
    fn test_count_literal_is_non_overlapping() {
        assert_eq!(count_literal("aaaa", "aa"), 2);
        assert_eq!(count_literal("a.b.c", "."), 2);
        assert_eq!(count_literal("abc", ""), 0);
        assert_eq!(count_literal("abc", "x"), 0);
    }

    #[test]
    fn test_rank_file_counts_drops_zero_and_sorts() {
        let ranked = rank_file_counts(vec![
            FileCount {
                file_name: "1.txt".to_string(),
                count: 1,
            },
            FileCount {
                file_name: "2.txt".to_string(),
                count: 0,
            },
            FileCount {
                file_name: "3.txt".to_string(),
                count: 4,
            },
            FileCount {
                file_name: "4.txt".to_string(),
                count: 1,
            },
        ]);
        let names: Vec<&str> = ranked.iter().map(|c| c.file_name.as_str()).collect();
        assert_eq!(names, vec!["3.txt", "1.txt", "4.txt"]);
    }
}
