// Corpus Cleaner - ui/panels/commit.rs
//
// Right panel, lower half: destination name, note, and the three batch
// commit buttons. Buttons are enabled per `can_commit_*`.

use crate::app::actions::Action;
use crate::app::state::{AppState, CommitKind};
use crate::ui::theme;

/// Render the commit form.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.strong("Commit to new subfolder");

    if let Some(source) = state.session.selection.subfolder() {
        ui.colored_label(
            theme::MUTED_TEXT,
            format!(
                "From '{source}' ({} file(s))",
                state.session.selection.files().len()
            ),
        );
    }

    ui.label("New subfolder name:");
    ui.add(
        egui::TextEdit::singleline(&mut state.destination_input)
            .hint_text("e.g. cleaned-v2")
            .desired_width(f32::INFINITY),
    );

    ui.label("Note:");
    ui.add(
        egui::TextEdit::multiline(&mut state.note_input)
            .hint_text("Why this change was made")
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(4.0);

    let can_find_replace = state.session.can_commit_find_replace();
    let can_transform = state.session.can_commit_transform();

    ui.add_enabled_ui(can_find_replace, |ui| {
        if ui
            .button(CommitKind::FindReplace.label())
            .on_hover_text("Apply Find/Replace to every file")
            .clicked()
        {
            state.request(Action::Commit(CommitKind::FindReplace));
        }
    });
    ui.add_enabled_ui(can_transform, |ui| {
        ui.horizontal(|ui| {
            if ui
                .button(CommitKind::Normalize.label())
                .on_hover_text("Strip diacritics and non-ASCII characters")
                .clicked()
            {
                state.request(Action::Commit(CommitKind::Normalize));
            }
            if ui.button(CommitKind::Lowercase.label()).clicked() {
                state.request(Action::Commit(CommitKind::Lowercase));
            }
        });
    });
}
