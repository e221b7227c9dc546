// Corpus Cleaner - app/actions.rs
//
// User intents and the I/O they trigger.
//
// Panels never touch the filesystem: they queue an `Action` on `AppState`,
// and the app shell drains the queue through `perform` at the start of the
// next frame. `perform` calls the navigator, counter and committer, then
// feeds the results to the reducer as `SessionEvent`s. Failures become a
// blocking notice or a status message; nothing here panics.

use crate::app::commit::{self, CommitReport, CommitRequest};
use crate::app::counter;
use crate::app::navigator;
use crate::app::state::{AppState, CommitKind, Dialog, SessionEvent};
use crate::platform::fs::read_text_trimmed;
use crate::util::error::{CommitError, CorpusError};
use std::path::PathBuf;

/// Something the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// List the subfolders of a root folder.
    OpenRoot(PathBuf),
    /// List the text files of a subfolder of the current root.
    SelectSubfolder(String),
    /// Load a file of the current subfolder by name.
    SelectFile(String),
    SetFind(String),
    SetReplace(String),
    /// Tally the find pattern across the current subfolder.
    CountOccurrences,
    /// List the files containing one tallied match.
    SelectMatch(String),
    Commit(CommitKind),
    ConfirmOverwrite,
    CancelOverwrite,
    /// Write the edit buffer over the selected file.
    SaveEdit,
    ShowHistory,
    DismissDialog,
}

/// Perform one action against `state`.
pub fn perform(state: &mut AppState, action: Action) {
    tracing::debug!(action = ?action_name(&action), "Performing action");
    match action {
        Action::OpenRoot(root) => open_root(state, root),
        Action::SelectSubfolder(name) => select_subfolder(state, name),
        Action::SelectFile(name) => select_file(state, &name),
        Action::SetFind(find) => state.dispatch(SessionEvent::FindChanged(find)),
        Action::SetReplace(replace) => state.dispatch(SessionEvent::ReplaceChanged(replace)),
        Action::CountOccurrences => count_occurrences(state),
        Action::SelectMatch(matched) => select_match(state, matched),
        Action::Commit(kind) => run_commit(state, kind, false),
        Action::ConfirmOverwrite => {
            if let Some(Dialog::ConfirmOverwrite { kind, .. }) = state.dialog.take() {
                run_commit(state, kind, true);
            }
        }
        Action::CancelOverwrite => {
            state.dialog = None;
            state.session.status_message = "Commit cancelled.".to_string();
        }
        Action::SaveEdit => save_edit(state),
        Action::ShowHistory => show_history(state),
        Action::DismissDialog => state.dialog = None,
    }
}

fn open_root(state: &mut AppState, root: PathBuf) {
    let subfolders = navigator::list_subfolders(&root);
    tracing::info!(root = %root.display(), "Root folder selected");
    state.root_input = root.display().to_string();
    state.history.clear();
    state.show_history = false;
    state.dispatch(SessionEvent::RootChosen { root, subfolders });
}

fn select_subfolder(state: &mut AppState, name: String) {
    let Some(root) = state.session.selection.root() else {
        state.session.status_message = "Choose a root folder first.".to_string();
        return;
    };
    let files = navigator::list_text_files(&root.join(&name));
    state.dispatch(SessionEvent::SubfolderChosen { name, files });
}

fn select_file(state: &mut AppState, name: &str) {
    let Some(file) = state
        .session
        .selection
        .files()
        .iter()
        .find(|f| f.name == name)
        .cloned()
    else {
        state.session.status_message = format!("'{name}' is not in the current subfolder.");
        return;
    };

    match read_text_trimmed(&file.path) {
        Ok(text) => {
            tracing::debug!(
                file = %file.name,
                chars = text.chars().count(),
                head = crate::util::logging::excerpt(&text),
                "File loaded"
            );
            state.dispatch(SessionEvent::FileChosen { file, text });
        }
        Err(e) => {
            tracing::warn!(file = %file.path.display(), error = %e, "Cannot read file");
            state.dispatch(SessionEvent::FileUnreadable {
                file,
                reason: e.to_string(),
            });
        }
    }
}

fn count_occurrences(state: &mut AppState) {
    let paths: Vec<PathBuf> = state
        .session
        .selection
        .files()
        .iter()
        .map(|f| f.path.clone())
        .collect();
    let find = state.session.workbench.find.clone();

    match counter::count_matches(&find, &paths) {
        Ok(counts) => state.dispatch(SessionEvent::OccurrencesCounted(counts)),
        Err(CorpusError::Pattern(e)) => state.dispatch(SessionEvent::PatternRejected {
            field: e.field(),
            message: e.to_string(),
        }),
        Err(e) => state.notice("Count failed", e.to_string()),
    }
}

fn select_match(state: &mut AppState, matched: String) {
    match counter::count_substring_per_file(&matched, state.session.selection.files()) {
        Ok(files) => state.dispatch(SessionEvent::MatchChosen { matched, files }),
        Err(e) => state.notice("Count failed", e.to_string()),
    }
}

fn commit_request(state: &AppState, overwrite: bool) -> Option<CommitRequest> {
    let selection = &state.session.selection;
    Some(CommitRequest {
        root: selection.root()?.to_path_buf(),
        source_subfolder: selection.subfolder()?.to_string(),
        files: selection.files().to_vec(),
        destination: state.destination_input.trim().to_string(),
        note: state.note_input.clone(),
        overwrite,
        log_file_name: state.log_file_name.clone(),
    })
}

fn run_commit(state: &mut AppState, kind: CommitKind, overwrite: bool) {
    let Some(request) = commit_request(state, overwrite) else {
        state.session.status_message = "Choose a subfolder to commit from.".to_string();
        return;
    };

    let result = match kind {
        CommitKind::FindReplace => commit::commit_find_replace(
            &request,
            &state.session.workbench.find,
            &state.session.workbench.replace,
        ),
        CommitKind::Normalize => commit::commit_normalize(&request),
        CommitKind::Lowercase => commit::commit_lowercase(&request),
    };

    match result {
        Ok(report) => after_commit(state, &request, &report),
        Err(CorpusError::Commit(CommitError::DestinationExists { path })) if !overwrite => {
            tracing::info!(path = %path.display(), "Destination exists; asking to overwrite");
            state.dialog = Some(Dialog::ConfirmOverwrite { kind, path });
        }
        Err(e) if e.is_pattern_error() => {
            tracing::warn!(error = %e, "Commit rejected");
            state.notice("Invalid pattern", e.to_string());
        }
        Err(e) => {
            tracing::error!(error = %e, "Commit failed");
            state.notice("Commit failed", e.to_string());
        }
    }
}

/// Show the new subfolder: re-list the root and select it.
fn after_commit(state: &mut AppState, request: &CommitRequest, report: &CommitReport) {
    open_root(state, request.root.clone());
    select_subfolder(state, request.destination.clone());
    state.note_input.clear();
    state.session.status_message = format!(
        "Wrote {} file(s) to '{}'.",
        report.files_written,
        report.destination.display()
    );
    if let Some(ref warning) = report.log_warning {
        state.notice(
            "Log not updated",
            format!(
                "The files were written to '{}', but the log could not be updated: {warning}",
                report.destination.display()
            ),
        );
    }
}

fn save_edit(state: &mut AppState) {
    let (Some(root), Some(file)) = (
        state.session.selection.root().map(|r| r.to_path_buf()),
        state.session.selection.file().cloned(),
    ) else {
        state.session.status_message = "Select a file to save.".to_string();
        return;
    };
    let text = state.session.workbench.edit_buffer.clone();

    match commit::commit_single_file_edit(&root, &state.log_file_name, &file, &text) {
        Ok(()) => state.dispatch(SessionEvent::FileContentSaved { text }),
        Err(e) => {
            tracing::error!(error = %e, "Saving edit failed");
            state.notice("Save failed", e.to_string());
        }
    }
}

fn show_history(state: &mut AppState) {
    let Some(root) = state.session.selection.root() else {
        state.session.status_message = "Choose a root folder first.".to_string();
        return;
    };
    match commit::read_history(root, &state.log_file_name) {
        Ok(blocks) => {
            state.history = blocks;
            state.show_history = true;
        }
        Err(e) => state.notice("Cannot read log", e.to_string()),
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::OpenRoot(_) => "OpenRoot",
        Action::SelectSubfolder(_) => "SelectSubfolder",
        Action::SelectFile(_) => "SelectFile",
        Action::SetFind(_) => "SetFind",
        Action::SetReplace(_) => "SetReplace",
        Action::CountOccurrences => "CountOccurrences",
        Action::SelectMatch(_) => "SelectMatch",
        Action::Commit(_) => "Commit",
        Action::ConfirmOverwrite => "ConfirmOverwrite",
        Action::CancelOverwrite => "CancelOverwrite",
        Action::SaveEdit => "SaveEdit",
        Action::ShowHistory => "ShowHistory",
        Action::DismissDialog => "DismissDialog",
    }
}
