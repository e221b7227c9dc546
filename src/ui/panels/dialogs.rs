// Corpus Cleaner - ui/panels/dialogs.rs
//
// Blocking notice and overwrite confirmation, plus the log history window.
// Rendered as centred, non-collapsible windows on top of the main layout.

use crate::app::actions::Action;
use crate::app::state::{AppState, Dialog};
use crate::core::logbook::{KEY_NOTE, KEY_TIME};
use crate::ui::theme;

/// Render the active dialog, if any.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(dialog) = state.dialog.clone() else {
        return;
    };

    match dialog {
        Dialog::Notice { title, message } => {
            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .min_width(theme::DIALOG_WIDTH)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        if ui.button("OK").clicked() {
                            state.request(Action::DismissDialog);
                        }
                    });
                });
        }
        Dialog::ConfirmOverwrite { kind, path } => {
            egui::Window::new("Destination exists")
                .collapsible(false)
                .resizable(false)
                .min_width(theme::DIALOG_WIDTH)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(format!(
                        "'{}' already exists. {} will replace its files of the same name.",
                        path.display(),
                        kind.label()
                    ));
                    ui.label("Other files in that folder are left alone.");
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("Overwrite").clicked() {
                            state.request(Action::ConfirmOverwrite);
                        }
                        if ui.button("Cancel").clicked() {
                            state.request(Action::CancelOverwrite);
                        }
                    });
                });
        }
    }
}

/// Render the log history window (if `state.show_history` is true).
pub fn render_history(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_history {
        return;
    }

    let mut open = true;
    egui::Window::new("Log history")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .min_width(480.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if state.history.is_empty() {
                ui.colored_label(theme::MUTED_TEXT, "No operations logged yet.");
                return;
            }
            egui::ScrollArea::vertical()
                .id_salt("history_list")
                .max_height(400.0)
                .show(ui, |ui| {
                    // Newest first.
                    for block in state.history.iter().rev() {
                        ui.horizontal(|ui| {
                            ui.colored_label(theme::MUTED_TEXT, block.get(KEY_TIME).unwrap_or(""));
                            ui.label(block.summary());
                        });
                        if let Some(note) = block.get(KEY_NOTE).filter(|n| !n.is_empty()) {
                            ui.label(egui::RichText::new(note).italics());
                        }
                        ui.separator();
                    }
                });
        });

    if !open {
        state.show_history = false;
    }
}
