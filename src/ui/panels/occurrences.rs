// Corpus Cleaner - ui/panels/occurrences.rs
//
// Right panel, upper half: corpus-wide match tally and the files that
// contain the chosen match.

use crate::app::actions::Action;
use crate::app::state::AppState;
use crate::ui::theme;

/// Render the occurrence lists.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let has_subfolder = state.session.selection.subfolder().is_some();
    let has_find = !state.session.workbench.find.is_empty();

    ui.horizontal(|ui| {
        ui.strong("Occurrences");
        ui.add_enabled_ui(has_subfolder && has_find, |ui| {
            if ui
                .button("Update")
                .on_hover_text("Count every match of 'Find' in this subfolder")
                .clicked()
            {
                state.request(Action::CountOccurrences);
            }
        });
    });

    let counts: Vec<(String, usize)> = state
        .session
        .workbench
        .occurrences
        .iter()
        .map(|c| (c.matched.clone(), c.count))
        .collect();
    let selected = state.session.workbench.selected_match.clone();

    egui::ScrollArea::vertical()
        .id_salt("occurrence_list")
        .max_height(theme::LIST_HEIGHT)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            if counts.is_empty() {
                ui.colored_label(theme::MUTED_TEXT, "No counts yet.");
            }
            egui::Grid::new("occurrence_grid")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for (matched, count) in &counts {
                        let is_selected = selected.as_deref() == Some(matched.as_str());
                        // Show whitespace-only matches visibly.
                        let label = if matched.trim().is_empty() {
                            format!("{matched:?}")
                        } else {
                            matched.clone()
                        };
                        if ui.selectable_label(is_selected, label).clicked() {
                            state.request(Action::SelectMatch(matched.clone()));
                        }
                        ui.colored_label(theme::MUTED_TEXT, count.to_string());
                        ui.end_row();
                    }
                });
        });

    ui.add_space(6.0);
    ui.separator();

    let heading = match selected {
        Some(ref matched) => format!("Files containing {matched:?}"),
        None => "Files containing match".to_string(),
    };
    ui.strong(heading);

    let files: Vec<(String, usize)> = state
        .session
        .workbench
        .files_containing
        .iter()
        .map(|f| (f.file_name.clone(), f.count))
        .collect();

    egui::ScrollArea::vertical()
        .id_salt("files_containing_list")
        .max_height(theme::LIST_HEIGHT)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("files_containing_grid")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for (name, count) in &files {
                        if ui.selectable_label(false, name).clicked() {
                            state.request(Action::SelectFile(name.clone()));
                        }
                        ui.colored_label(theme::MUTED_TEXT, count.to_string());
                        ui.end_row();
                    }
                });
        });
}
