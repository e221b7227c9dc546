// Corpus Cleaner - app/state.rs
//
// Application state management.
//
// `SessionState` is the navigation state machine
//   NoRootSelected -> RootSelected -> SubfolderSelected -> FileSelected
// plus the find/replace workbench. It only changes through the pure
// `reduce` function, so every transition is testable without a window or a
// filesystem. `AppState` wraps it with the form inputs, dialogs and the
// queue of actions the panels request; it is owned by the eframe::App
// implementation.

use crate::app::actions::Action;
use crate::core::logbook::LogBlock;
use crate::core::model::{FileCount, Listing, MatchCount, Segment, TextFile};
use crate::core::preview::{render_after, render_before};
use crate::util::constants::MAX_WARNINGS;
use crate::util::error::PatternField;
use std::path::{Path, PathBuf};

// =============================================================================
// Selection
// =============================================================================

/// How far down the root -> subfolder -> file hierarchy the user has gone.
/// Each level carries everything loaded for the levels above it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    NoRootSelected,
    RootSelected {
        root: PathBuf,
        subfolders: Vec<String>,
    },
    SubfolderSelected {
        root: PathBuf,
        subfolders: Vec<String>,
        subfolder: String,
        files: Vec<TextFile>,
    },
    FileSelected {
        root: PathBuf,
        subfolders: Vec<String>,
        subfolder: String,
        files: Vec<TextFile>,
        file: TextFile,
        text: String,
    },
}

impl Selection {
    pub fn root(&self) -> Option<&Path> {
        match self {
            Self::NoRootSelected => None,
            Self::RootSelected { root, .. }
            | Self::SubfolderSelected { root, .. }
            | Self::FileSelected { root, .. } => Some(root),
        }
    }

    pub fn subfolders(&self) -> &[String] {
        match self {
            Self::NoRootSelected => &[],
            Self::RootSelected { subfolders, .. }
            | Self::SubfolderSelected { subfolders, .. }
            | Self::FileSelected { subfolders, .. } => subfolders,
        }
    }

    pub fn subfolder(&self) -> Option<&str> {
        match self {
            Self::SubfolderSelected { subfolder, .. } | Self::FileSelected { subfolder, .. } => {
                Some(subfolder)
            }
            _ => None,
        }
    }

    pub fn files(&self) -> &[TextFile] {
        match self {
            Self::SubfolderSelected { files, .. } | Self::FileSelected { files, .. } => files,
            _ => &[],
        }
    }

    pub fn file(&self) -> Option<&TextFile> {
        match self {
            Self::FileSelected { file, .. } => Some(file),
            _ => None,
        }
    }

    /// Trimmed content of the selected file.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::FileSelected { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Drop back to `SubfolderSelected` (or stay where we are when no file
    /// is selected).
    fn without_file(self) -> Self {
        match self {
            Self::FileSelected {
                root,
                subfolders,
                subfolder,
                files,
                ..
            } => Self::SubfolderSelected {
                root,
                subfolders,
                subfolder,
                files,
            },
            other => other,
        }
    }
}

// =============================================================================
// Workbench
// =============================================================================

/// Find/replace inputs and everything derived from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workbench {
    pub find: String,
    pub replace: String,
    /// Selected file with find matches highlighted.
    pub before: Vec<Segment>,
    /// Selected file after substitution, replacements highlighted.
    pub after: Vec<Segment>,
    /// Message of the last pattern failure; blocks find/replace commits.
    pub pattern_error: Option<String>,
    pub pattern_error_field: Option<PatternField>,
    /// Corpus-wide match tally from the last count.
    pub occurrences: Vec<MatchCount>,
    pub selected_match: Option<String>,
    /// Files containing `selected_match`, most occurrences first.
    pub files_containing: Vec<FileCount>,
    /// Editable copy of the selected file's text.
    pub edit_buffer: String,
}

// =============================================================================
// Events and reducer
// =============================================================================

/// Something that happened: a user choice plus whatever I/O it produced.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    RootChosen {
        root: PathBuf,
        subfolders: Listing<String>,
    },
    SubfolderChosen {
        name: String,
        files: Listing<TextFile>,
    },
    FileChosen {
        file: TextFile,
        text: String,
    },
    FileUnreadable {
        file: TextFile,
        reason: String,
    },
    FindChanged(String),
    ReplaceChanged(String),
    OccurrencesCounted(Vec<MatchCount>),
    MatchChosen {
        matched: String,
        files: Vec<FileCount>,
    },
    FileContentSaved {
        text: String,
    },
    PatternRejected {
        field: PatternField,
        message: String,
    },
}

/// Navigation plus workbench state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub selection: Selection,
    pub workbench: Workbench,
    /// Status message for the status bar.
    pub status_message: String,
    /// Non-fatal warnings (unreadable folders or files), oldest first.
    pub warnings: Vec<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            selection: Selection::NoRootSelected,
            workbench: Workbench::default(),
            status_message: "Ready. Choose a root folder to begin.".to_string(),
            warnings: Vec::new(),
        }
    }
}

impl SessionState {
    /// Apply one event and return the next state.
    pub fn reduce(mut self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::RootChosen { root, subfolders } => {
                self.workbench = Workbench::default();
                self.status_message = match subfolders.diagnostic() {
                    Some(diagnostic) => {
                        self.push_warning(diagnostic.clone());
                        diagnostic
                    }
                    None => format!(
                        "{} subfolder(s) in '{}'.",
                        subfolders.entries().len(),
                        root.display()
                    ),
                };
                self.selection = Selection::RootSelected {
                    root,
                    subfolders: subfolders.into_entries(),
                };
            }

            SessionEvent::SubfolderChosen { name, files } => {
                let Some(root) = self.selection.root().map(Path::to_path_buf) else {
                    return self;
                };
                self.workbench = Workbench::default();
                self.status_message = match files.diagnostic() {
                    Some(diagnostic) => {
                        self.push_warning(diagnostic.clone());
                        diagnostic
                    }
                    None => format!("{} text file(s) in '{name}'.", files.entries().len()),
                };
                let subfolders = self.selection.subfolders().to_vec();
                self.selection = Selection::SubfolderSelected {
                    root,
                    subfolders,
                    subfolder: name,
                    files: files.into_entries(),
                };
            }

            SessionEvent::FileChosen { file, text } => {
                let (root, subfolders, subfolder, files) =
                    match std::mem::take(&mut self.selection).without_file() {
                        Selection::SubfolderSelected {
                            root,
                            subfolders,
                            subfolder,
                            files,
                        } => (root, subfolders, subfolder, files),
                        other => {
                            self.selection = other;
                            return self;
                        }
                    };
                self.status_message = format!("Viewing '{}'.", file.name);
                self.workbench.edit_buffer = text.clone();
                self.selection = Selection::FileSelected {
                    root,
                    subfolders,
                    subfolder,
                    files,
                    file,
                    text,
                };
                self.refresh_preview(true);
            }

            SessionEvent::FileUnreadable { file, reason } => {
                let message = format!("Cannot read '{}': {reason}", file.path.display());
                self.push_warning(message.clone());
                self.status_message = message;
            }

            SessionEvent::FindChanged(find) => {
                self.workbench.find = find;
                self.workbench.occurrences.clear();
                self.workbench.selected_match = None;
                self.workbench.files_containing.clear();
                self.refresh_preview(false);
            }

            SessionEvent::ReplaceChanged(replace) => {
                self.workbench.replace = replace;
                self.refresh_preview(false);
            }

            SessionEvent::OccurrencesCounted(counts) => {
                let total: usize = counts.iter().map(|c| c.count).sum();
                self.status_message = format!(
                    "{total} match(es), {} distinct, in '{}'.",
                    counts.len(),
                    self.selection.subfolder().unwrap_or_default()
                );
                self.workbench.occurrences = counts;
                self.workbench.selected_match = None;
                self.workbench.files_containing.clear();
            }

            SessionEvent::MatchChosen { matched, files } => {
                self.workbench.selected_match = Some(matched);
                self.workbench.files_containing = files;
            }

            SessionEvent::FileContentSaved { text } => {
                if let Selection::FileSelected {
                    file,
                    text: current,
                    ..
                } = &mut self.selection
                {
                    self.status_message = format!("Saved changes to '{}'.", file.name);
                    *current = text.clone();
                    self.workbench.edit_buffer = text;
                    self.refresh_preview(true);
                }
            }

            SessionEvent::PatternRejected { field, message } => {
                self.workbench.pattern_error = Some(message);
                self.workbench.pattern_error_field = Some(field);
            }
        }
        self
    }

    /// A find/replace commit may be attempted: a subfolder is selected and
    /// the current patterns compile. Empty patterns are reported when the
    /// commit runs.
    pub fn can_commit_find_replace(&self) -> bool {
        self.can_commit_transform() && self.workbench.pattern_error.is_none()
    }

    /// Normalize and lowercase only need a subfolder.
    pub fn can_commit_transform(&self) -> bool {
        self.selection.subfolder().is_some()
    }

    fn push_warning(&mut self, warning: String) {
        if self.warnings.len() >= MAX_WARNINGS {
            self.warnings.remove(0);
        }
        self.warnings.push(warning);
    }

    /// Re-validate the patterns and re-render the preview of the selected
    /// file. On a pattern error the previous segments stay on screen, unless
    /// the buffer itself changed: then the new text is shown unhighlighted so
    /// the preview never belongs to another file.
    fn refresh_preview(&mut self, buffer_changed: bool) {
        let text = self.selection.text().unwrap_or_default();
        let wb = &mut self.workbench;

        let rendered = render_before(text, &wb.find)
            .and_then(|before| Ok((before, render_after(text, &wb.find, &wb.replace)?)));
        match rendered {
            Ok((before, after)) => {
                wb.pattern_error = None;
                wb.pattern_error_field = None;
                if self.selection.file().is_some() {
                    wb.before = before;
                    wb.after = after;
                } else {
                    wb.before.clear();
                    wb.after.clear();
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "Pattern rejected");
                wb.pattern_error_field = Some(e.field());
                wb.pattern_error = Some(e.to_string());
                if buffer_changed {
                    wb.before = vec![Segment::plain(text)];
                    wb.after = vec![Segment::plain(text)];
                }
            }
        }
    }
}

// =============================================================================
// Application state
// =============================================================================

/// Which batch commit a button or dialog refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKind {
    FindReplace,
    Normalize,
    Lowercase,
}

impl CommitKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::FindReplace => "Commit find/replace",
            Self::Normalize => "Normalize unicode",
            Self::Lowercase => "Lowercase all",
        }
    }
}

/// A blocking dialog on top of the main window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Notice {
        title: String,
        message: String,
    },
    /// The destination of `kind` exists; waiting for the user to confirm
    /// replacing its files.
    ConfirmOverwrite {
        kind: CommitKind,
        path: PathBuf,
    },
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    pub session: SessionState,

    /// Root folder text field (editable, or filled by Browse).
    pub root_input: String,
    /// Name of the subfolder a batch commit writes to.
    pub destination_input: String,
    /// Free-text note recorded with the next batch commit.
    pub note_input: String,

    pub dialog: Option<Dialog>,

    /// Actions requested by panels this frame; drained by the app shell.
    pub pending: Vec<Action>,

    /// Whether the log history window is open.
    pub show_history: bool,
    /// Blocks read from the root's log when the history window was opened.
    pub history: Vec<LogBlock>,

    /// Operation log file name under each root.
    pub log_file_name: String,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    pub fn new(log_file_name: impl Into<String>, debug_mode: bool) -> Self {
        Self {
            session: SessionState::default(),
            root_input: String::new(),
            destination_input: String::new(),
            note_input: String::new(),
            dialog: None,
            pending: Vec::new(),
            show_history: false,
            history: Vec::new(),
            log_file_name: log_file_name.into(),
            debug_mode,
        }
    }

    /// Feed one event through the reducer.
    pub fn dispatch(&mut self, event: SessionEvent) {
        if self.debug_mode {
            tracing::debug!(event = ?event_name(&event), "Dispatch");
        }
        let session = std::mem::take(&mut self.session);
        self.session = session.reduce(event);
    }

    /// Queue an action for the app shell to perform.
    pub fn request(&mut self, action: Action) {
        self.pending.push(action);
    }

    /// Show a blocking notice.
    pub fn notice(&mut self, title: impl Into<String>, message: impl Into<String>) {
        let message = message.into();
        self.session.status_message = message.clone();
        self.dialog = Some(Dialog::Notice {
            title: title.into(),
            message,
        });
    }
}

fn event_name(event: &SessionEvent) -> &'static str {
    match event {
        SessionEvent::RootChosen { .. } => "RootChosen",
        SessionEvent::SubfolderChosen { .. } => "SubfolderChosen",
        SessionEvent::FileChosen { .. } => "FileChosen",
        SessionEvent::FileUnreadable { .. } => "FileUnreadable",
        SessionEvent::FindChanged(_) => "FindChanged",
        SessionEvent::ReplaceChanged(_) => "ReplaceChanged",
        SessionEvent::OccurrencesCounted(_) => "OccurrencesCounted",
        SessionEvent::MatchChosen { .. } => "MatchChosen",
        SessionEvent::FileContentSaved { .. } => "FileContentSaved",
        SessionEvent::PatternRejected { .. } => "PatternRejected",
    }
}
