// Corpus Cleaner - core/pattern.rs
//
// Find-pattern compilation and replacement templates.
// Core layer: pure logic, no I/O or UI dependencies.
//
// Replacement template syntax:
//   \N, \g<N>, \g<name>, $N, ${N}, ${name}   capture group references
//   \\  $$                                     literal backslash / dollar
//   \n  \t  \r                                 newline, tab, carriage return
// A backslash before any other ASCII letter is rejected; before any other
// character it is kept literally. A lone `$` not followed by a digit, `$`
// or `{` is literal.

use crate::util::constants::{MAX_PATTERN_LENGTH, REGEX_SIZE_LIMIT};
use crate::util::error::{PatternError, PatternField};
use regex::{Captures, Regex, RegexBuilder};

/// Compile a user-supplied find pattern.
///
/// The caller decides what an empty pattern means; this function compiles
/// whatever it is given (an empty regex matches everywhere).
pub fn compile_find(pattern: &str) -> Result<Regex, PatternError> {
    check_length(PatternField::Find, pattern)?;
    RegexBuilder::new(pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| PatternError::InvalidFind {
            pattern: pattern.to_string(),
            source: e,
        })
}

fn check_length(field: PatternField, pattern: &str) -> Result<(), PatternError> {
    let length = pattern.chars().count();
    if length > MAX_PATTERN_LENGTH {
        return Err(PatternError::TooLong {
            field,
            length,
            max_length: MAX_PATTERN_LENGTH,
        });
    }
    Ok(())
}

/// What a matched string contributes to an occurrence tally: the first
/// capture group when the pattern has any groups, otherwise the whole match.
/// A group that did not participate counts as the empty string.
pub fn tally_key<'t>(regex: &Regex, caps: &Captures<'t>) -> &'t str {
    let index = if regex.captures_len() > 1 { 1 } else { 0 };
    caps.get(index).map_or("", |m| m.as_str())
}

// =============================================================================
// Replacement templates
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum GroupRef {
    Index(usize),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Group(GroupRef),
}

/// A parsed replace pattern, validated against the find regex it will be
/// expanded with.
#[derive(Debug, Clone)]
pub struct ReplaceTemplate {
    pieces: Vec<Piece>,
}

impl ReplaceTemplate {
    /// Parse `template` and check every group it references exists in `regex`.
    pub fn parse(template: &str, regex: &Regex) -> Result<Self, PatternError> {
        check_length(PatternField::Replace, template)?;

        let invalid = |position: usize, reason: String| PatternError::InvalidReplace {
            pattern: template.to_string(),
            position,
            reason,
        };

        let mut pieces: Vec<Piece> = Vec::new();
        let mut literal = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            let group = match c {
                '\\' => match chars.next() {
                    None => return Err(invalid(pos, "dangling backslash".to_string())),
                    Some((_, '0')) => {
                        // Octal escape: \0 plus up to two more octal digits.
                        // Only \g<0> and $0 name the whole match.
                        let mut value: u8 = 0;
                        for _ in 0..2 {
                            match chars.peek() {
                                Some(&(_, o)) if ('0'..='7').contains(&o) => {
                                    value = value * 8 + (o as u8 - b'0');
                                    chars.next();
                                }
                                _ => break,
                            }
                        }
                        literal.push(char::from(value));
                        None
                    }
                    Some((_, d)) if d.is_ascii_digit() => {
                        let mut digits = String::from(d);
                        // At most two digits form a group number.
                        if let Some(&(_, next)) = chars.peek() {
                            if next.is_ascii_digit() {
                                digits.push(next);
                                chars.next();
                            }
                        }
                        Some(parse_group(&digits))
                    }
                    Some((gpos, 'g')) => {
                        if !matches!(chars.next(), Some((_, '<'))) {
                            return Err(invalid(gpos, "expected '<' after \\g".to_string()));
                        }
                        let name = take_until(&mut chars, '>')
                            .ok_or_else(|| invalid(gpos, "missing '>' in \\g<...>".to_string()))?;
                        if name.is_empty() {
                            return Err(invalid(gpos, "empty group name".to_string()));
                        }
                        Some(parse_group(&name))
                    }
                    Some((_, 'n')) => {
                        literal.push('\n');
                        None
                    }
                    Some((_, 't')) => {
                        literal.push('\t');
                        None
                    }
                    Some((_, 'r')) => {
                        literal.push('\r');
                        None
                    }
                    Some((_, '\\')) => {
                        literal.push('\\');
                        None
                    }
                    Some((epos, e)) if e.is_ascii_alphabetic() => {
                        return Err(invalid(epos, format!("bad escape \\{e}")));
                    }
                    Some((_, other)) => {
                        literal.push('\\');
                        literal.push(other);
                        None
                    }
                },
                '$' => match chars.peek().copied() {
                    Some((_, '$')) => {
                        chars.next();
                        literal.push('$');
                        None
                    }
                    Some((_, d)) if d.is_ascii_digit() => {
                        let mut digits = String::new();
                        while let Some(&(_, next)) = chars.peek() {
                            if !next.is_ascii_digit() {
                                break;
                            }
                            digits.push(next);
                            chars.next();
                        }
                        Some(parse_group(&digits))
                    }
                    Some((bpos, '{')) => {
                        chars.next();
                        let name = take_until(&mut chars, '}')
                            .ok_or_else(|| invalid(bpos, "missing '}' in ${...}".to_string()))?;
                        if name.is_empty() {
                            return Err(invalid(bpos, "empty group name".to_string()));
                        }
                        Some(parse_group(&name))
                    }
                    _ => {
                        literal.push('$');
                        None
                    }
                },
                other => {
                    literal.push(other);
                    None
                }
            };

            if let Some(group) = group {
                validate_group(&group, regex, template)?;
                if !literal.is_empty() {
                    pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                }
                pieces.push(Piece::Group(group));
            }
        }

        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Ok(Self { pieces })
    }

    /// Append the expansion of this template for one match to `dst`.
    pub fn expand(&self, caps: &Captures<'_>, dst: &mut String) {
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => dst.push_str(text),
                Piece::Group(GroupRef::Index(i)) => {
                    if let Some(m) = caps.get(*i) {
                        dst.push_str(m.as_str());
                    }
                }
                Piece::Group(GroupRef::Name(name)) => {
                    if let Some(m) = caps.name(name) {
                        dst.push_str(m.as_str());
                    }
                }
            }
        }
    }
}

fn take_until<I>(chars: &mut std::iter::Peekable<I>, close: char) -> Option<String>
where
    I: Iterator<Item = (usize, char)>,
{
    let mut out = String::new();
    for (_, c) in chars.by_ref() {
        if c == close {
            return Some(out);
        }
        out.push(c);
    }
    None
}

fn parse_group(text: &str) -> GroupRef {
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        // Overflowing numbers can never name a real group.
        GroupRef::Index(text.parse().unwrap_or(usize::MAX))
    } else {
        GroupRef::Name(text.to_string())
    }
}

fn validate_group(group: &GroupRef, regex: &Regex, template: &str) -> Result<(), PatternError> {
    let exists = match group {
        GroupRef::Index(i) => *i < regex.captures_len(),
        GroupRef::Name(name) => regex.capture_names().flatten().any(|n| n == name),
    };
    if exists {
        Ok(())
    } else {
        Err(PatternError::UnknownGroup {
            pattern: template.to_string(),
            group: match group {
                GroupRef::Index(i) => i.to_string(),
                GroupRef::Name(name) => name.clone(),
            },
        })
    }
}

// =============================================================================
// Substitution
// =============================================================================

/// A compiled find regex paired with a validated replacement template.
#[derive(Debug, Clone)]
pub struct Substitution {
    regex: Regex,
    template: ReplaceTemplate,
}

impl Substitution {
    pub fn new(find: &str, replace: &str) -> Result<Self, PatternError> {
        let regex = compile_find(find)?;
        let template = ReplaceTemplate::parse(replace, &regex)?;
        Ok(Self { regex, template })
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn template(&self) -> &ReplaceTemplate {
        &self.template
    }

    /// Replace every non-overlapping match in `text`.
    pub fn apply(&self, text: &str) -> String {
        self.regex
            .replace_all(text, |caps: &Captures<'_>| {
                let mut out = String::new();
                self.template.expand(caps, &mut out);
                out
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(find: &str, replace: &str, text: &str) -> String {
        Substitution::new(find, replace).unwrap().apply(text)
    }

    #[test]
    fn test_plain_substitution() {
        assert_eq!(sub("at", "og", "cat hat"), "cog hog");
    }

    #[test]
    fn test_backslash_group_reference() {
        assert_eq!(sub(r"(\w+)@(\w+)", r"\2 at \1", "me@home"), "home at me");
    }

    #[test]
    fn test_dollar_and_named_references() {
        assert_eq!(sub(r"(?P<y>\d{4})-(\d\d)", "$2/${y}", "2024-05"), "05/2024");
        assert_eq!(sub(r"(?P<y>\d{4})", r"[\g<y>]", "1999"), "[1999]");
        assert_eq!(sub(r"(a)", r"\g<1>\g<0>", "a"), "aa");
    }

    #[test]
    fn test_literal_escapes() {
        assert_eq!(sub("x", r"\\", "x"), "\\");
        assert_eq!(sub("x", "$$", "x"), "$");
        assert_eq!(sub("x", "$", "x"), "$");
        assert_eq!(sub("x", r"\n", "x"), "\n");
        assert_eq!(sub("x", r"\.", "x"), "\\.");
    }

    #[test]
    fn test_backslash_zero_is_octal_not_whole_match() {
        assert_eq!(sub("a", r"\0", "a"), "\0");
        assert_eq!(sub("a", r"[\0]", "xa"), "x[\0]");
        assert_eq!(sub("a", r"\012", "a"), "\n");
        assert_eq!(sub("a", r"\08", "a"), "\08");
        assert_eq!(sub("a", r"\g<0>$0", "a"), "aa");
    }

    #[test]
    fn test_unmatched_optional_group_expands_empty() {
        assert_eq!(sub(r"a(b)?", r"[\1]", "a ab"), "[] [b]");
    }

    #[test]
    fn test_missing_group_is_rejected() {
        let regex = compile_find("at").unwrap();
        let err = ReplaceTemplate::parse(r"\1", &regex).unwrap_err();
        assert!(matches!(err, PatternError::UnknownGroup { ref group, .. } if group == "1"));
        assert_eq!(err.field(), PatternField::Replace);

        let err = ReplaceTemplate::parse("${name}", &regex).unwrap_err();
        assert!(matches!(err, PatternError::UnknownGroup { .. }));
    }

    #[test]
    fn test_malformed_templates_are_rejected() {
        let regex = compile_find("(a)").unwrap();
        for bad in [r"\", r"\q", r"\g1", r"\g<1", "${1", r"\g<>"] {
            let result = ReplaceTemplate::parse(bad, &regex);
            assert!(
                matches!(result, Err(PatternError::InvalidReplace { .. })),
                "expected InvalidReplace for {bad:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_invalid_find_regex() {
        let err = compile_find("(unbalanced").unwrap_err();
        assert!(matches!(err, PatternError::InvalidFind { .. }));
        assert_eq!(err.field(), PatternField::Find);
    }

    #[test]
    fn test_overlong_pattern_rejected() {
        let long = "a".repeat(MAX_PATTERN_LENGTH + 1);
        assert!(matches!(
            compile_find(&long),
            Err(PatternError::TooLong {
                field: PatternField::Find,
                ..
            })
        ));
    }

    #[test]
    fn test_tally_key_prefers_first_group() {
        let with_group = compile_find(r"(\w)at").unwrap();
        let caps = with_group.captures("hat").unwrap();
        assert_eq!(tally_key(&with_group, &caps), "h");

        let without = compile_find(r"\wat").unwrap();
        let caps = without.captures("hat").unwrap();
        assert_eq!(tally_key(&without, &caps), "hat");
    }
}
