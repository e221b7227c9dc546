// Corpus Cleaner - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all Corpus Cleaner operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum CorpusError {
    /// A find or replace pattern could not be compiled or applied.
    Pattern(PatternError),

    /// A pattern required by the operation was left empty.
    MissingPattern { field: PatternField },

    /// A batch or single-file commit failed.
    Commit(CommitError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// I/O error with path context (file reads during counting/preview).
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(e) => write!(f, "{e}"),
            Self::MissingPattern { field } => write!(f, "{field} regex is not defined."),
            Self::Commit(e) => write!(f, "Commit error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pattern(e) => Some(e),
            Self::Commit(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            Self::MissingPattern { .. } => None,
        }
    }
}

impl CorpusError {
    /// Convenience constructor for path-annotated I/O failures.
    pub fn io(path: impl Into<PathBuf>, operation: &'static str, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation,
            source,
        }
    }

    /// True when the failure is a pattern problem the user must correct
    /// before anything can be written.
    pub fn is_pattern_error(&self) -> bool {
        matches!(self, Self::Pattern(_) | Self::MissingPattern { .. })
    }
}

// ---------------------------------------------------------------------------
// Pattern errors
// ---------------------------------------------------------------------------

/// Which of the two pattern inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternField {
    Find,
    Replace,
}

impl fmt::Display for PatternField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Find => f.write_str("'Find'"),
            Self::Replace => f.write_str("'Replace'"),
        }
    }
}

/// Errors related to compiling or applying find/replace patterns.
#[derive(Debug)]
pub enum PatternError {
    /// The find pattern is not a valid regular expression.
    InvalidFind {
        pattern: String,
        source: regex::Error,
    },

    /// A pattern exceeds the maximum allowed length.
    TooLong {
        field: PatternField,
        length: usize,
        max_length: usize,
    },

    /// The replace template is malformed (bad escape, unterminated group).
    InvalidReplace {
        pattern: String,
        position: usize,
        reason: String,
    },

    /// The replace template references a capture group the find pattern
    /// does not define.
    UnknownGroup { pattern: String, group: String },
}

impl PatternError {
    /// The input the user has to correct.
    pub fn field(&self) -> PatternField {
        match self {
            Self::InvalidFind { .. } => PatternField::Find,
            Self::TooLong { field, .. } => *field,
            Self::InvalidReplace { .. } | Self::UnknownGroup { .. } => PatternField::Replace,
        }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFind { pattern, source } => {
                write!(f, "'Find' regex '{pattern}' is invalid: {source}")
            }
            Self::TooLong {
                field,
                length,
                max_length,
            } => write!(
                f,
                "{field} regex is {length} chars, exceeds maximum of {max_length}"
            ),
            Self::InvalidReplace {
                pattern,
                position,
                reason,
            } => write!(
                f,
                "'Replace' regex '{pattern}' is invalid at offset {position}: {reason}"
            ),
            Self::UnknownGroup { pattern, group } => write!(
                f,
                "'Replace' regex '{pattern}' references group '{group}' \
                 which the 'Find' regex does not define"
            ),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFind { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<PatternError> for CorpusError {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

// ---------------------------------------------------------------------------
// Commit errors
// ---------------------------------------------------------------------------

/// Errors related to writing transformed files and log blocks.
#[derive(Debug)]
pub enum CommitError {
    /// The destination subfolder name cannot be used.
    InvalidDestination { name: String, reason: &'static str },

    /// The destination subfolder already exists and overwrite was not
    /// confirmed.
    DestinationExists { path: PathBuf },

    /// I/O error while staging, publishing, or logging.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl CommitError {
    pub(crate) fn io(path: impl Into<PathBuf>, operation: &'static str, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation,
            source,
        }
    }
}

impl fmt::Display for CommitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDestination { name, reason } => {
                write!(f, "Destination folder name '{name}' is invalid: {reason}")
            }
            Self::DestinationExists { path } => write!(
                f,
                "A subfolder named '{}' already exists",
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string())
            ),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for CommitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<CommitError> for CorpusError {
    fn from(e: CommitError) -> Self {
        Self::Commit(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for CorpusError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for Corpus Cleaner results.
pub type Result<T> = std::result::Result<T, CorpusError>;
