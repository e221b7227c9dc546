// Corpus Cleaner - core/natural_sort.rs
//
// Numeric-aware ordering for corpus file names.
//
// The key of a name is (leading alphabetic run, value of all its digits
// concatenated). Names without digits sort as if their number were 0.
// Digit strings are compared by magnitude without parsing, so arbitrarily
// long runs never overflow.

use std::cmp::Ordering;

/// Sort key derived from a file or folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaturalKey<'a> {
    prefix: &'a str,
    digits: String,
}

impl<'a> NaturalKey<'a> {
    pub fn new(name: &'a str) -> Self {
        let prefix_end = name
            .char_indices()
            .find(|(_, c)| !c.is_alphabetic())
            .map_or(name.len(), |(idx, _)| idx);

        let digits: String = name.chars().filter(char::is_ascii_digit).collect();
        let significant = digits.trim_start_matches('0').to_string();

        Self {
            prefix: &name[..prefix_end],
            digits: significant,
        }
    }
}

impl Ord for NaturalKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.prefix
            .cmp(other.prefix)
            .then_with(|| self.digits.len().cmp(&other.digits.len()))
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for NaturalKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two names in natural order. Falls back to plain string order so
/// the result is total and deterministic ("a01" vs "a1").
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    NaturalKey::new(a)
        .cmp(&NaturalKey::new(b))
        .then_with(|| a.cmp(b))
}

/// Sort `items` in place by the natural order of the name `key` extracts.
pub fn sort_naturally_by<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| natural_cmp(key(a), key(b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        sort_naturally_by(&mut v, |s| s.as_str());
        v
    }

    #[test]
    fn test_numeric_names_sort_by_value() {
        assert_eq!(
            sorted(&["2.txt", "10.txt", "1.txt"]),
            vec!["1.txt", "2.txt", "10.txt"]
        );
    }

    #[test]
    fn test_prefix_groups_before_number() {
        assert_eq!(
            sorted(&["a2.txt", "a10.txt", "b1.txt"]),
            vec!["a2.txt", "a10.txt", "b1.txt"]
        );
        assert_eq!(
            sorted(&["b1.txt", "a10.txt", "a2.txt"]),
            vec!["a2.txt", "a10.txt", "b1.txt"]
        );
    }

    #[test]
    fn test_missing_digits_count_as_zero() {
        assert_eq!(
            sorted(&["doc5.txt", "doc.txt", "doc1.txt"]),
            vec!["doc.txt", "doc1.txt", "doc5.txt"]
        );
    }

    #[test]
    fn test_digits_anywhere_are_concatenated() {
        // "ch1_part2" -> 12, "ch3" -> 3
        assert_eq!(
            sorted(&["ch1_part2.txt", "ch3.txt"]),
            vec!["ch3.txt", "ch1_part2.txt"]
        );
    }

    #[test]
    fn test_huge_numbers_do_not_overflow() {
        let big = format!("{}.txt", "9".repeat(60));
        let bigger = format!("1{}.txt", "0".repeat(60));
        let result = sorted(&[bigger.as_str(), big.as_str(), "1.txt"]);
        assert_eq!(result, vec!["1.txt".to_string(), big, bigger]);
    }

    #[test]
    fn test_leading_zeros_tie_break_is_deterministic() {
        assert_eq!(natural_cmp("a01", "a1"), "a01".cmp("a1"));
        assert_eq!(
            NaturalKey::new("a01").cmp(&NaturalKey::new("a1")),
            Ordering::Equal
        );
    }
}
