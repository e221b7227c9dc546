// Corpus Cleaner - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug (sets the filter to debug)
//   - Config file: [logging] level = "debug"
//
// Output: stderr. File contents are never logged beyond a short excerpt
// at debug level.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = resolve_filter(std::env::var("RUST_LOG").is_ok(), debug_flag, config_level);

    // try_init so a second call (e.g. from tests) is a no-op rather than a panic.
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .try_init();

    if result.is_ok() {
        tracing::debug!(
            app = super::constants::APP_NAME,
            version = super::constants::APP_VERSION,
            "Logging initialised"
        );
    }
}

fn resolve_filter(env_set: bool, debug_flag: bool, config_level: Option<&str>) -> EnvFilter {
    if env_set {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    }
}

/// Truncate `text` to at most `DEBUG_MAX_TEXT_PREVIEW` characters for
/// inclusion in debug output.
pub fn excerpt(text: &str) -> &str {
    let max = super::constants::DEBUG_MAX_TEXT_PREVIEW;
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_short_text_unchanged() {
        assert_eq!(excerpt("hello"), "hello");
    }

    #[test]
    fn test_excerpt_truncates_on_char_boundary() {
        let long = "é".repeat(super::super::constants::DEBUG_MAX_TEXT_PREVIEW + 10);
        let cut = excerpt(&long);
        assert_eq!(
            cut.chars().count(),
            super::super::constants::DEBUG_MAX_TEXT_PREVIEW
        );
    }

    #[test]
    fn test_debug_flag_beats_config_level() {
        let filter = resolve_filter(false, true, Some("warn"));
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_config_level_used_without_flag() {
        let filter = resolve_filter(false, false, Some("warn"));
        assert_eq!(filter.to_string(), "warn");
    }
}
