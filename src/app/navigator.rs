// Corpus Cleaner - app/navigator.rs
//
// Root -> subfolder -> file listings.
//
// Listings never fail: unreadable directories come back as
// `Listing::Unreadable` with the reason, and a diagnostic is logged.

use crate::core::model::{Listing, TextFile};
use crate::core::natural_sort::sort_naturally_by;
use crate::platform::fs::{read_children, ChildEntry};
use crate::util::constants::{STAGING_DIR_PREFIX, TEXT_FILE_EXTENSION};
use std::path::Path;

/// Subfolder names directly under `root`, in natural order.
///
/// In-progress commit staging directories are not corpus variants and are
/// left out.
pub fn list_subfolders(root: &Path) -> Listing<String> {
    let children = match read_listing(root) {
        Ok(children) => children,
        Err(listing) => return listing,
    };

    let mut names: Vec<String> = children
        .into_iter()
        .filter(|c| c.is_dir && !c.name.starts_with(STAGING_DIR_PREFIX))
        .map(|c| c.name)
        .collect();
    sort_naturally_by(&mut names, |n| n.as_str());

    tracing::debug!(root = %root.display(), count = names.len(), "Listed subfolders");
    Listing::Entries(names)
}

/// `.txt` files directly inside `subfolder`, in natural order of name.
pub fn list_text_files(subfolder: &Path) -> Listing<TextFile> {
    let children = match read_listing(subfolder) {
        Ok(children) => children,
        Err(listing) => return listing,
    };

    let suffix = format!(".{TEXT_FILE_EXTENSION}");
    let mut files: Vec<TextFile> = children
        .into_iter()
        .filter(|c| c.is_file && c.name.ends_with(&suffix))
        .map(|c| TextFile::new(c.name, c.path))
        .collect();
    sort_naturally_by(&mut files, |f| f.name.as_str());

    tracing::debug!(
        subfolder = %subfolder.display(),
        count = files.len(),
        "Listed text files"
    );
    Listing::Entries(files)
}

/// Read a directory's children, converting failure into an unreadable
/// listing of any element type.
fn read_listing<T>(dir: &Path) -> Result<Vec<ChildEntry>, Listing<T>> {
    match read_children(dir) {
        Ok(children) => Ok(children),
        Err(e) => {
            tracing::warn!(path = %dir.display(), error = %e, "Cannot list directory");
            Err(Listing::Unreadable {
                path: dir.to_path_buf(),
                reason: e.to_string(),
            })
        }
    }
}
