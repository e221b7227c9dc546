// Corpus Cleaner - app/commit.rs
//
// Batch and single-file commits, plus the operation log they append to.
//
// Batch commits are transactional:
//   1. every output file is written into a hidden staging directory under
//      the root;
//   2. only when all files succeed is the staging directory published, by
//      renaming it to the destination (new folder) or by renaming each
//      staged file over its same-named counterpart (confirmed overwrite;
//      other files in the destination are left alone);
//   3. the log block is appended after publishing.
// Any failure before publishing removes the staging directory, so nothing
// is written to the destination and nothing is logged. A log append that
// fails after publishing does not undo the commit; it is returned as
// `CommitReport::log_warning`.

use crate::core::logbook::{parse_log, LogBlock, LogEntry, LogOperation};
use crate::core::model::TextFile;
use crate::core::pattern::Substitution;
use crate::core::transform::Transform;
use crate::platform::fs;
use crate::util::constants::STAGING_DIR_PREFIX;
use crate::util::error::{CommitError, CorpusError, PatternField, Result};
use std::path::{Path, PathBuf};

/// Everything a batch commit needs besides the transformation itself.
#[derive(Debug, Clone)]
pub struct CommitRequest {
    /// Root folder holding both subfolders and the log file.
    pub root: PathBuf,
    /// Name of the subfolder the files are read from (for the log).
    pub source_subfolder: String,
    /// Files to transform.
    pub files: Vec<TextFile>,
    /// Name of the subfolder to create under `root`.
    pub destination: String,
    /// Free-text note recorded in the log.
    pub note: String,
    /// The user confirmed replacing files in an existing destination.
    pub overwrite: bool,
    /// Log file name under `root`.
    pub log_file_name: String,
}

/// Outcome of a successful batch commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReport {
    pub destination: PathBuf,
    pub files_written: usize,
    /// Set when the files were published but the log block could not be
    /// appended.
    pub log_warning: Option<String>,
}

/// Replace every match of `find` by `replace` in every file.
///
/// Both patterns must be non-empty and valid; this is checked before
/// anything is written.
pub fn commit_find_replace(request: &CommitRequest, find: &str, replace: &str) -> Result<CommitReport> {
    if find.is_empty() {
        return Err(CorpusError::MissingPattern {
            field: PatternField::Find,
        });
    }
    if replace.is_empty() {
        return Err(CorpusError::MissingPattern {
            field: PatternField::Replace,
        });
    }
    let substitution = Substitution::new(find, replace)?;

    let transform = Transform::FindReplace(substitution);
    let operation = LogOperation::FindReplace {
        find: find.to_string(),
        replace: replace.to_string(),
    };
    run_batch(request, &transform, operation)
}

/// Strip diacritics from every file.
pub fn commit_normalize(request: &CommitRequest) -> Result<CommitReport> {
    run_batch(request, &Transform::Normalize, LogOperation::Normalize)
}

/// Lowercase every file.
pub fn commit_lowercase(request: &CommitRequest) -> Result<CommitReport> {
    run_batch(request, &Transform::Lowercase, LogOperation::Lowercase)
}

/// Overwrite one file with edited text and log a spot-change block.
pub fn commit_single_file_edit(
    root: &Path,
    log_file_name: &str,
    file: &TextFile,
    text: &str,
) -> Result<()> {
    fs::write_atomic(&file.path, text).map_err(|e| CommitError::io(&file.path, "write", e))?;
    tracing::info!(file = %file.path.display(), "Saved spot edit");

    let entry = LogEntry::SpotEdit {
        time: chrono::Local::now().naive_local(),
        file_name: file.name.clone(),
    };
    append_log(root, log_file_name, &entry)
}

/// Path of the operation log under `root`.
pub fn log_path(root: &Path, log_file_name: &str) -> PathBuf {
    root.join(log_file_name)
}

/// All complete blocks of the root's operation log, oldest first. A missing
/// log reads as empty history.
pub fn read_history(root: &Path, log_file_name: &str) -> Result<Vec<LogBlock>> {
    let path = log_path(root, log_file_name);
    let content = fs::read_optional(&path).map_err(|e| CorpusError::io(&path, "read", e))?;
    Ok(content.map(|c| parse_log(&c)).unwrap_or_default())
}

// =============================================================================
// Batch pipeline
// =============================================================================

fn run_batch(
    request: &CommitRequest,
    transform: &Transform,
    operation: LogOperation,
) -> Result<CommitReport> {
    validate_destination_name(&request.destination)?;

    let destination = request.root.join(&request.destination);
    let exists = destination.exists();
    if exists && !destination.is_dir() {
        return Err(CommitError::InvalidDestination {
            name: request.destination.clone(),
            reason: "a file with this name already exists",
        }
        .into());
    }
    if exists && !request.overwrite {
        return Err(CommitError::DestinationExists { path: destination }.into());
    }

    let staging = request
        .root
        .join(format!("{STAGING_DIR_PREFIX}{}", request.destination));

    tracing::info!(
        operation = transform.label(),
        source = %request.source_subfolder,
        destination = %request.destination,
        files = request.files.len(),
        overwrite = request.overwrite,
        "Starting batch commit"
    );

    if let Err(e) = stage(request, transform, &staging) {
        discard_staging(&staging);
        return Err(e);
    }

    publish(&staging, &destination, &request.files, exists)?;

    let entry = LogEntry::Batch {
        time: chrono::Local::now().naive_local(),
        source: request.source_subfolder.clone(),
        destination: request.destination.clone(),
        operation,
        note: request.note.clone(),
    };
    let log_warning = match append_log(&request.root, &request.log_file_name, &entry) {
        Ok(()) => None,
        Err(e) => {
            tracing::error!(error = %e, "Files published but the log block was not written");
            Some(e.to_string())
        }
    };

    tracing::info!(
        destination = %destination.display(),
        files = request.files.len(),
        "Batch commit published"
    );
    Ok(CommitReport {
        destination,
        files_written: request.files.len(),
        log_warning,
    })
}

fn validate_destination_name(name: &str) -> std::result::Result<(), CommitError> {
    let invalid = |reason| CommitError::InvalidDestination {
        name: name.to_string(),
        reason,
    };
    if name.trim().is_empty() {
        return Err(invalid("the name is empty"));
    }
    if name == "." || name == ".." {
        return Err(invalid("the name refers to an existing directory"));
    }
    if name.contains(['/', '\\']) {
        return Err(invalid("the name must not contain path separators"));
    }
    if name.starts_with(STAGING_DIR_PREFIX) {
        return Err(invalid("the name is reserved for staging folders"));
    }
    Ok(())
}

/// Write every transformed file into a fresh staging directory.
fn stage(request: &CommitRequest, transform: &Transform, staging: &Path) -> Result<()> {
    if staging.exists() {
        // Leftover from an interrupted commit.
        std::fs::remove_dir_all(staging)
            .map_err(|e| CommitError::io(staging, "clear staging folder", e))?;
    }
    std::fs::create_dir(staging).map_err(|e| CommitError::io(staging, "create staging folder", e))?;

    for file in &request.files {
        let text = fs::read_text_trimmed(&file.path).map_err(|e| CommitError::io(&file.path, "read", e))?;
        let output = transform.apply(&text);
        let target = staging.join(&file.name);
        fs::write_text(&target, &output).map_err(|e| CommitError::io(&target, "write", e))?;
        tracing::trace!(file = %file.name, "Staged");
    }
    Ok(())
}

fn publish(staging: &Path, destination: &Path, files: &[TextFile], overwrite: bool) -> Result<()> {
    if !overwrite {
        return std::fs::rename(staging, destination).map_err(|e| {
            discard_staging(staging);
            CommitError::io(destination, "publish", e).into()
        });
    }

    for file in files {
        let from = staging.join(&file.name);
        let to = destination.join(&file.name);
        if let Err(e) = std::fs::rename(&from, &to) {
            tracing::error!(
                file = %to.display(),
                error = %e,
                "Overwrite interrupted; destination is partially updated"
            );
            discard_staging(staging);
            return Err(CommitError::io(&to, "publish", e).into());
        }
    }
    discard_staging(staging);
    Ok(())
}

fn discard_staging(staging: &Path) {
    if staging.exists() {
        if let Err(e) = std::fs::remove_dir_all(staging) {
            tracing::warn!(path = %staging.display(), error = %e, "Could not remove staging folder");
        }
    }
}

fn append_log(root: &Path, log_file_name: &str, entry: &LogEntry) -> Result<()> {
    let path = log_path(root, log_file_name);
    fs::append_text(&path, &entry.to_block()).map_err(|e| CommitError::io(&path, "append log", e))?;
    tracing::debug!(path = %path.display(), "Log block appended");
    Ok(())
}
