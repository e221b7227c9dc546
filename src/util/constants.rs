// Corpus Cleaner - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Corpus Cleaner";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "CorpusCleaner";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Corpus layout
// =============================================================================

/// Extension (without the dot) of the files that make up a corpus variant.
pub const TEXT_FILE_EXTENSION: &str = "txt";

/// Default name of the append-only operation log, stored directly under the
/// root folder.
pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Root folder pre-selected by `--demo` when config.toml does not name one.
pub const DEFAULT_DEMO_ROOT: &str = "demo_corpus";

/// Prefix of the hidden staging directory a batch commit writes into before
/// publishing. The destination name is appended.
pub const STAGING_DIR_PREFIX: &str = ".staging-";

/// Suffix of the sibling temp file used for atomic single-file writes.
pub const TEMP_FILE_SUFFIX: &str = ".tmp";

// =============================================================================
// Log file format
// =============================================================================

/// Line terminating every block in the operation log.
pub const LOG_BLOCK_SEPARATOR: &str = "====================";

/// chrono format string for the `Time:` line of a log block.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Fixed operation description recorded for diacritic normalization.
pub const NORMALIZE_DESCRIPTION: &str = "Normalize unicode (remove diacritics)";

/// Fixed operation description recorded for lowercasing.
pub const LOWERCASE_DESCRIPTION: &str = "Convert all to lowercase";

// =============================================================================
// Pattern limits
// =============================================================================

/// Maximum find/replace pattern length to prevent pathological compiles.
pub const MAX_PATTERN_LENGTH: usize = 4_096;

/// Compiled regex size limit in bytes (passed to `RegexBuilder::size_limit`).
pub const REGEX_SIZE_LIMIT: usize = 10 * 1024 * 1024; // 10 MB

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Maximum number of non-fatal warnings kept in the session. Older warnings
/// are dropped first.
pub const MAX_WARNINGS: usize = 200;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum length of a text excerpt included in debug output.
pub const DEBUG_MAX_TEXT_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
