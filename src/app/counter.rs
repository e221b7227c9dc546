// Corpus Cleaner - app/counter.rs
//
// Corpus-wide occurrence counting. Reads each file (trimmed) and feeds the
// core tallies. A scan is all-or-nothing: the first pattern or read error
// discards everything counted so far.

use crate::core::model::{FileCount, MatchCount, TextFile};
use crate::core::occurrence::{count_literal, rank_file_counts, MatchTally};
use crate::core::pattern::compile_find;
use crate::platform::fs::read_text_trimmed;
use crate::util::error::{CorpusError, Result};
use std::path::PathBuf;

/// Tally every match of `find` across `paths`, most frequent first.
///
/// With groups in the pattern the first group is tallied instead of the whole
/// match. An empty pattern counts nothing.
pub fn count_matches(find: &str, paths: &[PathBuf]) -> Result<Vec<MatchCount>> {
    if find.is_empty() {
        return Ok(Vec::new());
    }
    // Compile before touching any file so a bad pattern costs no I/O.
    let regex = compile_find(find)?;

    let mut tally = MatchTally::new();
    for path in paths {
        let text = read_text_trimmed(path).map_err(|e| CorpusError::io(path, "read", e))?;
        let found = tally.add_text(&regex, &text);
        tracing::trace!(path = %path.display(), found, "Counted matches");
    }

    tracing::debug!(
        files = paths.len(),
        total = tally.total(),
        "Occurrence count complete"
    );
    Ok(tally.into_ranked())
}

/// Literal occurrences of `substring` per file, most first. Files that do not
/// contain it are omitted.
pub fn count_substring_per_file(substring: &str, files: &[TextFile]) -> Result<Vec<FileCount>> {
    if substring.is_empty() {
        return Ok(Vec::new());
    }

    let mut counts = Vec::with_capacity(files.len());
    for file in files {
        let text =
            read_text_trimmed(&file.path).map_err(|e| CorpusError::io(&file.path, "read", e))?;
        counts.push(FileCount {
            file_name: file.name.clone(),
            count: count_literal(&text, substring),
        });
    }
    Ok(rank_file_counts(counts))
}
