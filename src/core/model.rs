// Corpus Cleaner - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use std::path::PathBuf;

// =============================================================================
// Corpus files
// =============================================================================

/// A `.txt` file inside a corpus subfolder.
///
/// `name` is unique within its subfolder and is what the UI lists and what
/// batch commits reuse as the output file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    pub name: String,
    pub path: PathBuf,
}

impl TextFile {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

// =============================================================================
// Listing (typed fail-soft directory read)
// =============================================================================

/// Result of listing a directory.
///
/// Listing never fails hard: an unreadable directory becomes `Unreadable`
/// carrying a human-readable reason, so the caller can tell "this folder has
/// no subfolders" apart from "this folder could not be read".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<T> {
    Entries(Vec<T>),
    Unreadable { path: PathBuf, reason: String },
}

impl<T> Listing<T> {
    /// The listed entries, or an empty Vec when the directory was unreadable.
    pub fn into_entries(self) -> Vec<T> {
        match self {
            Self::Entries(entries) => entries,
            Self::Unreadable { .. } => Vec::new(),
        }
    }

    /// Borrowing view of the entries (empty when unreadable).
    pub fn entries(&self) -> &[T] {
        match self {
            Self::Entries(entries) => entries,
            Self::Unreadable { .. } => &[],
        }
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self, Self::Unreadable { .. })
    }

    /// Human-readable diagnostic for an unreadable listing.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::Entries(_) => None,
            Self::Unreadable { path, reason } => {
                Some(format!("Cannot read '{}': {reason}", path.display()))
            }
        }
    }
}

// =============================================================================
// Preview segments
// =============================================================================

/// One run of preview text.
///
/// In the "before" rendering `highlighted` marks a find match; in the
/// "after" rendering it marks inserted replacement text. Concatenating the
/// `text` of all segments in order yields the rendered string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: true,
        }
    }
}

/// Concatenate segment texts back into a single string.
pub fn join_segments(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

// =============================================================================
// Occurrence tallies
// =============================================================================

/// Corpus-wide frequency of one matched string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCount {
    pub matched: String,
    pub count: usize,
}

/// Number of literal occurrences of a substring within one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCount {
    pub file_name: String,
    pub count: usize,
}
