// Corpus Cleaner - core/transform.rs
//
// Whole-text transformations applied by batch commits.

use crate::core::pattern::Substitution;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A transformation applied to every file of a subfolder.
#[derive(Debug, Clone)]
pub enum Transform {
    /// Regex substitution of the find pattern by the replace template.
    FindReplace(Substitution),
    /// Diacritic stripping down to 7-bit text.
    Normalize,
    /// Unicode lowercasing.
    Lowercase,
}

impl Transform {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::FindReplace(substitution) => substitution.apply(text),
            Self::Normalize => strip_diacritics(text),
            Self::Lowercase => text.to_lowercase(),
        }
    }

    /// Short label for status messages and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FindReplace(_) => "find/replace",
            Self::Normalize => "normalize",
            Self::Lowercase => "lowercase",
        }
    }
}

/// Strip diacritics: compatibility-decompose, drop combining marks, then
/// drop any character that still falls outside 7-bit ASCII.
///
/// Characters with no ASCII decomposition (e.g. `ß`, `ø`, CJK) are removed.
pub fn strip_diacritics(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .filter(char::is_ascii)
        .collect()
}
