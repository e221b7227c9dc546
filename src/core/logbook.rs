// Corpus Cleaner - core/logbook.rs
//
// Formatting and parsing of the append-only operation log.
//
// Block layout (each line "Key: value", block closed by the separator line
// and followed by a blank line):
//
//   Time: 2024-03-01 14:05:09.123456
//   Previous subfolder: original
//   New subfolder: no-hyphens
//   'Find' regex: /-/
//   'Replace' regex: / /
//   Note: first pass
//   ====================
//
// Normalize/lowercase commits write `Operation: <description>` in place of
// the two regex lines. Spot edits write only `Time` and
// `Spot change to file`.

use crate::util::constants::{
    LOG_BLOCK_SEPARATOR, LOG_TIMESTAMP_FORMAT, LOWERCASE_DESCRIPTION, NORMALIZE_DESCRIPTION,
};
use chrono::NaiveDateTime;

pub const KEY_TIME: &str = "Time";
pub const KEY_PREVIOUS_SUBFOLDER: &str = "Previous subfolder";
pub const KEY_NEW_SUBFOLDER: &str = "New subfolder";
pub const KEY_FIND: &str = "'Find' regex";
pub const KEY_REPLACE: &str = "'Replace' regex";
pub const KEY_OPERATION: &str = "Operation";
pub const KEY_NOTE: &str = "Note";
pub const KEY_SPOT_CHANGE: &str = "Spot change to file";

/// What a batch commit did to the files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOperation {
    FindReplace { find: String, replace: String },
    Normalize,
    Lowercase,
}

/// One record of the operation log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// A commit that wrote a transformed copy of a whole subfolder.
    Batch {
        time: NaiveDateTime,
        source: String,
        destination: String,
        operation: LogOperation,
        note: String,
    },
    /// A single file overwritten from the edit buffer.
    SpotEdit {
        time: NaiveDateTime,
        file_name: String,
    },
}

impl LogEntry {
    /// Render the entry as a complete block, including the separator line
    /// and the trailing blank line.
    pub fn to_block(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        match self {
            Self::Batch {
                time,
                source,
                destination,
                operation,
                note,
            } => {
                lines.push(line(KEY_TIME, &format_time(time)));
                lines.push(line(KEY_PREVIOUS_SUBFOLDER, &single_line(source)));
                lines.push(line(KEY_NEW_SUBFOLDER, &single_line(destination)));
                match operation {
                    LogOperation::FindReplace { find, replace } => {
                        lines.push(line(KEY_FIND, &format!("/{}/", escape_pattern(find))));
                        lines.push(line(KEY_REPLACE, &format!("/{}/", escape_pattern(replace))));
                    }
                    LogOperation::Normalize => {
                        lines.push(line(KEY_OPERATION, NORMALIZE_DESCRIPTION));
                    }
                    LogOperation::Lowercase => {
                        lines.push(line(KEY_OPERATION, LOWERCASE_DESCRIPTION));
                    }
                }
                lines.push(line(KEY_NOTE, &single_line(note)));
            }
            Self::SpotEdit { time, file_name } => {
                lines.push(line(KEY_TIME, &format_time(time)));
                lines.push(line(KEY_SPOT_CHANGE, &single_line(file_name)));
            }
        }
        lines.push(LOG_BLOCK_SEPARATOR.to_string());
        lines.join("\n") + "\n\n"
    }
}

fn line(key: &str, value: &str) -> String {
    format!("{key}: {value}")
}

fn format_time(time: &NaiveDateTime) -> String {
    time.format(LOG_TIMESTAMP_FORMAT).to_string()
}

/// Free text must not break the one-line-per-key layout.
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

/// Patterns keep their meaning when a raw line break is written as the
/// `\n` escape, which both the regex and template syntax understand.
fn escape_pattern(pattern: &str) -> String {
    pattern.replace('\r', "\\r").replace('\n', "\\n")
}

// =============================================================================
// Reading the log back
// =============================================================================

/// A parsed block: its `Key: value` lines in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogBlock {
    pub fields: Vec<(String, String)>,
}

impl LogBlock {
    /// Value of the first line with `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_spot_edit(&self) -> bool {
        self.get(KEY_SPOT_CHANGE).is_some()
    }

    /// One-line description for history lists.
    pub fn summary(&self) -> String {
        if let Some(file) = self.get(KEY_SPOT_CHANGE) {
            return format!("Spot change to {file}");
        }
        let source = self.get(KEY_PREVIOUS_SUBFOLDER).unwrap_or("?");
        let destination = self.get(KEY_NEW_SUBFOLDER).unwrap_or("?");
        let what = match (self.get(KEY_FIND), self.get(KEY_REPLACE)) {
            (Some(find), Some(replace)) => format!("{find} \u{2192} {replace}"),
            _ => self.get(KEY_OPERATION).unwrap_or("").to_string(),
        };
        format!("{source} \u{2192} {destination}: {what}")
    }
}

/// Parse log file content into blocks.
///
/// Only blocks closed by the separator line are returned. An unterminated
/// fragment (e.g. from a crash mid-append) is ignored: a `Time` line always
/// opens a new block, so a fragment followed by later appends is dropped
/// rather than merged into the next block.
pub fn parse_log(content: &str) -> Vec<LogBlock> {
    let mut blocks = Vec::new();
    let mut current = LogBlock::default();

    for raw in content.lines() {
        let text = raw.trim_end_matches('\r');
        if text == LOG_BLOCK_SEPARATOR {
            blocks.push(std::mem::take(&mut current));
            continue;
        }
        if text.trim().is_empty() {
            continue;
        }
        let (key, value) = match text.split_once(": ") {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (text.trim_end_matches(':').to_string(), String::new()),
        };
        if key == KEY_TIME && !current.fields.is_empty() {
            current = LogBlock::default();
        }
        current.fields.push((key, value));
    }

    blocks
}
