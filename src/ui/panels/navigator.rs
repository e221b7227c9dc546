// Corpus Cleaner - ui/panels/navigator.rs
//
// Left sidebar: root folder chooser, subfolder list and file list.
//
// Requests `OpenRoot`, `SelectSubfolder`, `SelectFile` and `ShowHistory`
// through `state.request`; gui.rs performs them next frame.

use crate::app::actions::Action;
use crate::app::state::AppState;
use crate::ui::theme;
use std::path::PathBuf;

/// Render the navigator sidebar.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.strong("Root folder");
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.root_input)
                .hint_text("Path to corpus root")
                .desired_width(ui.available_width() - 70.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Browse\u{2026}").clicked() {
            if let Some(path) = rfd::FileDialog::new().pick_folder() {
                state.request(Action::OpenRoot(path));
            }
        } else if submitted && !state.root_input.trim().is_empty() {
            let path = PathBuf::from(state.root_input.trim());
            state.request(Action::OpenRoot(path));
        }
    });

    let has_root = state.session.selection.root().is_some();
    ui.add_enabled_ui(has_root, |ui| {
        if ui.small_button("View log history").clicked() {
            state.request(Action::ShowHistory);
        }
    });

    ui.add_space(6.0);
    ui.separator();

    // Clone the names so the lists can queue actions on `state`.
    let subfolders = state.session.selection.subfolders().to_vec();
    let current_subfolder = state.session.selection.subfolder().map(str::to_string);

    ui.strong(format!("Subfolders ({})", subfolders.len()));
    egui::ScrollArea::vertical()
        .id_salt("subfolder_list")
        .max_height(theme::LIST_HEIGHT)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            if subfolders.is_empty() {
                ui.colored_label(theme::MUTED_TEXT, "No subfolders.");
            }
            for name in &subfolders {
                let selected = current_subfolder.as_deref() == Some(name.as_str());
                if ui.selectable_label(selected, name).clicked() && !selected {
                    state.request(Action::SelectSubfolder(name.clone()));
                }
            }
        });

    ui.add_space(6.0);
    ui.separator();

    let files: Vec<String> = state
        .session
        .selection
        .files()
        .iter()
        .map(|f| f.name.clone())
        .collect();
    let current_file = state.session.selection.file().map(|f| f.name.clone());

    ui.strong(format!("Files ({})", files.len()));
    egui::ScrollArea::vertical()
        .id_salt("file_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for name in &files {
                let selected = current_file.as_deref() == Some(name.as_str());
                if ui.selectable_label(selected, name).clicked() {
                    state.request(Action::SelectFile(name.clone()));
                }
            }
        });
}
