// Corpus Cleaner - core/preview.rs
//
// Before/after renderings of a find/replace over one in-memory buffer.
// Core layer: pure logic, never touches the filesystem.
//
// Segments are cut directly from match offsets, so no marker string is ever
// inserted into the text and nothing in the input can be mistaken for one.

use crate::core::model::Segment;
use crate::core::pattern::{compile_find, Substitution};
use crate::util::error::PatternError;
use regex::Regex;

/// Render `text` with every match of `find` highlighted.
///
/// An empty `find` means "no transformation": the whole text comes back as
/// a single unhighlighted segment. Concatenating the returned segments always
/// reproduces `text` exactly.
pub fn render_before(text: &str, find: &str) -> Result<Vec<Segment>, PatternError> {
    if find.is_empty() {
        return Ok(vec![Segment::plain(text)]);
    }
    let regex = compile_find(find)?;
    Ok(highlight_matches(text, &regex))
}

/// Render the result of replacing every match of `find` in `text` with
/// `replace`, highlighting the inserted replacement text.
///
/// With an empty `find` the text is returned untouched. With an empty
/// `replace` nothing is substituted and the matches are highlighted exactly
/// as in [`render_before`].
pub fn render_after(text: &str, find: &str, replace: &str) -> Result<Vec<Segment>, PatternError> {
    if find.is_empty() {
        return Ok(vec![Segment::plain(text)]);
    }
    if replace.is_empty() {
        return render_before(text, find);
    }

    let substitution = Substitution::new(find, replace)?;
    let mut segments = SegmentList::default();
    let mut last = 0;

    for caps in substitution.regex().captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        segments.push_plain(&text[last..whole.start()]);

        let mut inserted = String::new();
        substitution.template().expand(&caps, &mut inserted);
        segments.push_highlighted(inserted);

        last = whole.end();
    }
    segments.push_plain(&text[last..]);

    Ok(segments.into_inner())
}

fn highlight_matches(text: &str, regex: &Regex) -> Vec<Segment> {
    let mut segments = SegmentList::default();
    let mut last = 0;
    for m in regex.find_iter(text) {
        segments.push_plain(&text[last..m.start()]);
        segments.push_highlighted(m.as_str().to_string());
        last = m.end();
    }
    segments.push_plain(&text[last..]);
    segments.into_inner()
}

/// Segment accumulator that drops empty runs and coalesces adjacent plain
/// runs. Adjacent highlighted runs stay separate, one per match.
#[derive(Default)]
struct SegmentList(Vec<Segment>);

impl SegmentList {
    fn push_plain(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.0.last_mut() {
            Some(last) if !last.highlighted => last.text.push_str(text),
            _ => self.0.push(Segment::plain(text)),
        }
    }

    fn push_highlighted(&mut self, text: String) {
        if !text.is_empty() {
            self.0.push(Segment::highlighted(text));
        }
    }

    fn into_inner(self) -> Vec<Segment> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::join_segments;

    #[test]
    fn test_empty_find_is_identity() {
        let text = "Some text (with) *** markers";
        assert_eq!(render_before(text, "").unwrap(), vec![Segment::plain(text)]);
        assert_eq!(
            render_after(text, "", "ignored").unwrap(),
            vec![Segment::plain(text)]
        );
    }

    #[test]
    fn test_before_highlights_matches() {
        let segments = render_before("cat hat", "at").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::plain("c"),
                Segment::highlighted("at"),
                Segment::plain(" h"),
                Segment::highlighted("at"),
            ]
        );
    }

    #[test]
    fn test_before_reconstructs_text_with_sentinel_like_content() {
        let text = "a *** b *** a";
        let segments = render_before(text, "a").unwrap();
        assert_eq!(join_segments(&segments), text);
        assert_eq!(segments.iter().filter(|s| s.highlighted).count(), 2);
    }

    #[test]
    fn test_after_highlights_replacement() {
        let segments = render_after("cat hat", "at", "og").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::plain("c"),
                Segment::highlighted("og"),
                Segment::plain(" h"),
                Segment::highlighted("og"),
            ]
        );
    }

    #[test]
    fn test_after_expands_groups() {
        let segments = render_after("John Smith", r"(\w+) (\w+)", r"\2, \1").unwrap();
        assert_eq!(segments, vec![Segment::highlighted("Smith, John")]);
    }

    #[test]
    fn test_after_matches_substitution_output() {
        let text = "1999-01-02 and 2024-12-31";
        let find = r"(\d{4})-(\d\d)-(\d\d)";
        let replace = "$3.$2.$1";
        let segments = render_after(text, find, replace).unwrap();
        let expected = Substitution::new(find, replace).unwrap().apply(text);
        assert_eq!(join_segments(&segments), expected);
    }

    #[test]
    fn test_after_with_empty_replace_mirrors_before() {
        assert_eq!(
            render_after("cat hat", "at", "").unwrap(),
            render_before("cat hat", "at").unwrap()
        );
    }

    #[test]
    fn test_zero_width_matches_in_before_view() {
        let segments = render_before("ab", "x*").unwrap();
        assert_eq!(segments, vec![Segment::plain("ab")]);
    }

    #[test]
    fn test_zero_width_matches_in_after_view() {
        let segments = render_after("ab", "^", ">").unwrap();
        assert_eq!(
            segments,
            vec![Segment::highlighted(">"), Segment::plain("ab")]
        );
    }

    #[test]
    fn test_invalid_patterns_are_errors() {
        assert!(matches!(
            render_before("text", "(oops"),
            Err(PatternError::InvalidFind { .. })
        ));
        assert!(matches!(
            render_after("text", "(oops", "x"),
            Err(PatternError::InvalidFind { .. })
        ));
        assert!(matches!(
            render_after("text", "t", r"\1"),
            Err(PatternError::UnknownGroup { .. })
        ));
    }
}
