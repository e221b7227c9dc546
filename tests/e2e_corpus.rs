// Corpus Cleaner - tests/e2e_corpus.rs
//
// End-to-end tests for the navigate -> count -> commit pipeline.
//
// These tests exercise the real filesystem: a corpus root is built in a
// temporary directory, listed with the navigator, counted, committed, and
// the resulting subfolder and log file are read back from disk.

use corpus_cleaner::app::commit::{
    commit_find_replace, commit_lowercase, commit_normalize, commit_single_file_edit,
    read_history, CommitRequest,
};
use corpus_cleaner::app::counter::{count_matches, count_substring_per_file};
use corpus_cleaner::app::navigator::{list_subfolders, list_text_files};
use corpus_cleaner::core::logbook::{
    KEY_FIND, KEY_NEW_SUBFOLDER, KEY_NOTE, KEY_OPERATION, KEY_PREVIOUS_SUBFOLDER, KEY_REPLACE,
    KEY_SPOT_CHANGE, KEY_TIME,
};
use corpus_cleaner::core::model::TextFile;
use corpus_cleaner::util::constants::{
    LOG_BLOCK_SEPARATOR, LOWERCASE_DESCRIPTION, NORMALIZE_DESCRIPTION, STAGING_DIR_PREFIX,
};
use corpus_cleaner::util::error::{CommitError, CorpusError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

const LOG: &str = "log.txt";

/// Root with one `original` subfolder holding `files`.
fn corpus(files: &[(&str, &str)]) -> TempDir {
    let root = TempDir::new().unwrap();
    let original = root.path().join("original");
    fs::create_dir(&original).unwrap();
    for (name, body) in files {
        fs::write(original.join(name), body).unwrap();
    }
    root
}

fn request(root: &Path, destination: &str, note: &str) -> CommitRequest {
    CommitRequest {
        root: root.to_path_buf(),
        source_subfolder: "original".to_string(),
        files: list_text_files(&root.join("original")).into_entries(),
        destination: destination.to_string(),
        note: note.to_string(),
        overwrite: false,
        log_file_name: LOG.to_string(),
    }
}

fn read(root: &Path, subfolder: &str, name: &str) -> String {
    fs::read_to_string(root.join(subfolder).join(name)).unwrap()
}

fn log_content(root: &Path) -> String {
    fs::read_to_string(root.join(LOG)).unwrap_or_default()
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn e2e_navigator_lists_in_natural_order() {
    let root = corpus(&[("10.txt", "x"), ("2.txt", "x"), ("1.txt", "x"), ("readme.md", "x")]);
    fs::create_dir(root.path().join("v10")).unwrap();
    fs::create_dir(root.path().join("v2")).unwrap();
    fs::write(root.path().join(LOG), "").unwrap();

    let subfolders = list_subfolders(root.path()).into_entries();
    assert_eq!(subfolders, vec!["original", "v2", "v10"]);

    let names: Vec<String> = list_text_files(&root.path().join("original"))
        .into_entries()
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["1.txt", "2.txt", "10.txt"]);
}

// =============================================================================
// Counting
// =============================================================================

#[test]
fn e2e_count_then_locate_match() {
    let root = corpus(&[("1.txt", "cat hat"), ("2.txt", "hat bat hat")]);
    let files = list_text_files(&root.path().join("original")).into_entries();
    let paths: Vec<_> = files.iter().map(|f| f.path.clone()).collect();

    let counts = count_matches(r"(\w)at", &paths).unwrap();
    let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.matched.as_str(), c.count)).collect();
    assert_eq!(pairs, vec![("h", 3), ("c", 1), ("b", 1)]);

    let per_file = count_substring_per_file("hat", &files).unwrap();
    assert_eq!(per_file[0].file_name, "2.txt");
    assert_eq!(per_file[0].count, 2);
    assert_eq!(per_file[1].file_name, "1.txt");
}

// =============================================================================
// Batch commits
// =============================================================================

#[test]
fn e2e_find_replace_commit_writes_files_and_one_log_block() {
    let root = corpus(&[("1.txt", "cat hat\n")]);
    let report = commit_find_replace(&request(root.path(), "dogs", "at to og"), "at", "og").unwrap();

    assert_eq!(report.files_written, 1);
    assert_eq!(report.destination, root.path().join("dogs"));
    assert_eq!(report.log_warning, None);
    assert_eq!(read(root.path(), "dogs", "1.txt"), "cog hog");
    // The source is untouched.
    assert_eq!(read(root.path(), "original", "1.txt"), "cat hat\n");

    let history = read_history(root.path(), LOG).unwrap();
    assert_eq!(history.len(), 1);
    let block = &history[0];
    assert!(block.get(KEY_TIME).is_some());
    assert_eq!(block.get(KEY_PREVIOUS_SUBFOLDER), Some("original"));
    assert_eq!(block.get(KEY_NEW_SUBFOLDER), Some("dogs"));
    assert_eq!(block.get(KEY_FIND), Some("/at/"));
    assert_eq!(block.get(KEY_REPLACE), Some("/og/"));
    assert_eq!(block.get(KEY_NOTE), Some("at to og"));

    let content = log_content(root.path());
    assert!(content.ends_with(&format!("{LOG_BLOCK_SEPARATOR}\n\n")));
}

#[test]
fn e2e_group_references_in_replacement() {
    let root = corpus(&[("1.txt", "2024-03-01")]);
    commit_find_replace(
        &request(root.path(), "iso", ""),
        r"(?P<y>\d{4})-(\d{2})-(\d{2})",
        r"\3/$2/${y}",
    )
    .unwrap();
    assert_eq!(read(root.path(), "iso", "1.txt"), "01/03/2024");
}

#[test]
fn e2e_failed_commit_leaves_no_trace() {
    let root = corpus(&[("1.txt", "cat"), ("2.txt", "hat")]);
    let mut req = request(root.path(), "dogs", "");
    // A file that vanished after listing.
    req.files.push(TextFile::new(
        "3.txt",
        root.path().join("original").join("3.txt"),
    ));

    let err = commit_find_replace(&req, "at", "og").unwrap_err();
    assert!(matches!(err, CorpusError::Commit(CommitError::Io { .. })));

    assert!(!root.path().join("dogs").exists());
    assert!(!root
        .path()
        .join(format!("{STAGING_DIR_PREFIX}dogs"))
        .exists());
    assert!(!root.path().join(LOG).exists());
}

#[test]
fn e2e_invalid_pattern_writes_nothing() {
    let root = corpus(&[("1.txt", "cat")]);
    let err = commit_find_replace(&request(root.path(), "dogs", ""), "(at", "og").unwrap_err();
    assert!(err.is_pattern_error());
    assert!(!root.path().join("dogs").exists());
    assert!(!root.path().join(LOG).exists());
}

#[test]
fn e2e_existing_destination_requires_overwrite() {
    let root = corpus(&[("1.txt", "ABC")]);
    let dest = root.path().join("lower");
    fs::create_dir(&dest).unwrap();
    fs::write(dest.join("1.txt"), "old").unwrap();
    fs::write(dest.join("other.txt"), "keep me").unwrap();

    let err = commit_lowercase(&request(root.path(), "lower", "")).unwrap_err();
    assert!(matches!(
        err,
        CorpusError::Commit(CommitError::DestinationExists { .. })
    ));
    assert_eq!(read(root.path(), "lower", "1.txt"), "old");
    assert!(!root.path().join(LOG).exists());

    let mut req = request(root.path(), "lower", "");
    req.overwrite = true;
    commit_lowercase(&req).unwrap();
    assert_eq!(read(root.path(), "lower", "1.txt"), "abc");
    assert_eq!(read(root.path(), "lower", "other.txt"), "keep me");
    assert_eq!(read_history(root.path(), LOG).unwrap().len(), 1);
}

#[test]
fn e2e_destination_name_cannot_escape_root() {
    let root = corpus(&[("1.txt", "x")]);
    for name in ["", "..", "../outside", "a/b"] {
        let err = commit_lowercase(&request(root.path(), name, "")).unwrap_err();
        assert!(
            matches!(err, CorpusError::Commit(CommitError::InvalidDestination { .. })),
            "{name:?} gave {err}"
        );
    }
}

#[test]
fn e2e_normalize_and_lowercase_log_operations() {
    let root = corpus(&[("1.txt", "Café Crème"), ("2.txt", "ABC Déf")]);

    commit_normalize(&request(root.path(), "ascii", "strip accents")).unwrap();
    assert_eq!(read(root.path(), "ascii", "1.txt"), "Cafe Creme");
    assert_eq!(read(root.path(), "ascii", "2.txt"), "ABC Def");

    commit_lowercase(&request(root.path(), "lower", "")).unwrap();
    assert_eq!(read(root.path(), "lower", "2.txt"), "abc déf");

    let history = read_history(root.path(), LOG).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].get(KEY_OPERATION), Some(NORMALIZE_DESCRIPTION));
    assert_eq!(history[0].get(KEY_NOTE), Some("strip accents"));
    assert_eq!(history[1].get(KEY_OPERATION), Some(LOWERCASE_DESCRIPTION));
    assert!(history[1].get(KEY_FIND).is_none());
}

#[test]
fn e2e_unwritable_log_keeps_published_files() {
    let root = corpus(&[("1.txt", "ABC"), ("2.txt", "Def")]);
    // A directory in place of the log makes the append fail after publishing.
    fs::create_dir(root.path().join(LOG)).unwrap();

    let report = commit_lowercase(&request(root.path(), "lower", "")).unwrap();

    assert_eq!(report.files_written, 2);
    assert!(report.log_warning.is_some());
    assert_eq!(read(root.path(), "lower", "1.txt"), "abc");
    assert_eq!(read(root.path(), "lower", "2.txt"), "def");
    assert!(!root
        .path()
        .join(format!("{STAGING_DIR_PREFIX}lower"))
        .exists());
    assert!(root.path().join(LOG).is_dir());
}

#[test]
fn e2e_log_is_append_only() {
    let root = corpus(&[("1.txt", "a")]);
    fs::write(root.path().join(LOG), "previous content\n").unwrap();

    commit_lowercase(&request(root.path(), "one", "")).unwrap();
    commit_lowercase(&request(root.path(), "two", "")).unwrap();

    let content = log_content(root.path());
    assert!(content.starts_with("previous content\n"));
    assert_eq!(content.matches(LOG_BLOCK_SEPARATOR).count(), 2);
}

#[test]
fn e2e_spot_edit_overwrites_and_logs() {
    let root = corpus(&[("1.txt", "teh cat")]);
    let file = TextFile::new("1.txt", root.path().join("original").join("1.txt"));

    commit_single_file_edit(root.path(), LOG, &file, "the cat").unwrap();
    assert_eq!(read(root.path(), "original", "1.txt"), "the cat");

    let history = read_history(root.path(), LOG).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].get(KEY_SPOT_CHANGE), Some("1.txt"));
    assert!(history[0].get(KEY_NEW_SUBFOLDER).is_none());
}
