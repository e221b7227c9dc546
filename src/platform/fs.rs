// Corpus Cleaner - platform/fs.rs
//
// Filesystem primitives used by the app layer.
// Every handle is opened, fully consumed or written, and closed within a
// single call; nothing is held open across operations.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One immediate child of a directory.
#[derive(Debug, Clone)]
pub struct ChildEntry {
    pub name: String,
    pub path: PathBuf,
    /// True for directories, following symlinks.
    pub is_dir: bool,
    /// True for regular files, following symlinks.
    pub is_file: bool,
}

/// List the immediate children of `dir`.
///
/// Returns `Err` only when `dir` itself cannot be read. Children that cannot
/// be inspected, or whose names are not valid UTF-8, are skipped with a
/// logged warning.
pub fn read_children(dir: &Path) -> io::Result<Vec<ChildEntry>> {
    // Pre-flight: fs::metadata distinguishes NotFound / PermissionDenied,
    // and rejects plain files before walkdir reports them as a lone entry.
    let meta = std::fs::metadata(dir)?;
    if !meta.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("'{}' is not a directory", dir.display()),
        ));
    }

    let mut children = Vec::new();

    for item in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) => {
                if e.depth() == 0 {
                    // The directory itself could not be opened.
                    return Err(e
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "walk failed")));
                }
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable entry");
                continue;
            }
        };

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::warn!(path = %entry.path().display(), "Skipping non-UTF-8 file name");
            continue;
        };

        let path = entry.into_path();
        // Path::is_dir/is_file follow symlinks, as a folder picker would.
        children.push(ChildEntry {
            is_dir: path.is_dir(),
            is_file: path.is_file(),
            name,
            path,
        });
    }

    Ok(children)
}

/// Read a UTF-8 text file and trim surrounding whitespace.
pub fn read_text_trimmed(path: &Path) -> io::Result<String> {
    let content = std::fs::read_to_string(path)?;
    Ok(content.trim().to_string())
}

/// Read a UTF-8 text file as-is. A missing file reads as `None`.
pub fn read_optional(path: &Path) -> io::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write `contents` to `path`, replacing any existing file.
pub fn write_text(path: &Path, contents: &str) -> io::Result<()> {
    std::fs::write(path, contents.as_bytes())
}

/// Write `contents` to `path` atomically (write temp -> rename).
///
/// A crash between write and rename leaves the previous file intact.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = path.with_file_name(format!(
        ".{file_name}{}",
        crate::util::constants::TEMP_FILE_SUFFIX
    ));

    std::fs::write(&tmp, contents.as_bytes())?;
    std::fs::rename(&tmp, path).map_err(|e| {
        // Clean up the temp file on failure; ignore any secondary error.
        let _ = std::fs::remove_file(&tmp);
        e
    })
}

/// Append `text` to `path`, creating the file if needed. Existing content is
/// never truncated.
pub fn append_text(path: &Path, text: &str) -> io::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()
}
