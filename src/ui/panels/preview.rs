// Corpus Cleaner - ui/panels/preview.rs
//
// Central panel: find/replace inputs, the before/after preview of the
// selected file, and the editable buffer for spot changes.

use crate::app::actions::Action;
use crate::app::state::AppState;
use crate::core::model::Segment;
use crate::ui::theme;
use crate::util::error::PatternField;
use egui::text::LayoutJob;

/// Render the pattern inputs and the preview.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    render_pattern_inputs(ui, state);
    ui.separator();

    let Some(file_name) = state.session.selection.file().map(|f| f.name.clone()) else {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.colored_label(
                theme::MUTED_TEXT,
                "Select a file to preview the transformation.",
            );
        });
        return;
    };

    let workbench = &state.session.workbench;
    ui.columns(2, |columns| {
        columns[0].strong(format!("Before: {file_name}"));
        segment_view(
            &mut columns[0],
            "preview_before",
            &workbench.before,
            theme::MATCH_BG,
        );
        columns[1].strong("After");
        segment_view(
            &mut columns[1],
            "preview_after",
            &workbench.after,
            theme::REPLACEMENT_BG,
        );
    });

    ui.add_space(6.0);
    ui.separator();
    ui.strong("Edit file");
    egui::ScrollArea::vertical()
        .id_salt("edit_buffer")
        .max_height(theme::PREVIEW_HEIGHT)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut state.session.workbench.edit_buffer)
                    .code_editor()
                    .desired_width(f32::INFINITY)
                    .desired_rows(8),
            );
        });

    let unchanged =
        state.session.selection.text() == Some(state.session.workbench.edit_buffer.as_str());
    ui.add_enabled_ui(!unchanged, |ui| {
        if ui.button("Save changes to this file").clicked() {
            state.request(Action::SaveEdit);
        }
    });
}

fn render_pattern_inputs(ui: &mut egui::Ui, state: &mut AppState) {
    let error_field = state.session.workbench.pattern_error_field;

    egui::Grid::new("pattern_inputs")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Find:");
            let mut find = state.session.workbench.find.clone();
            if ui
                .add(
                    egui::TextEdit::singleline(&mut find)
                        .code_editor()
                        .hint_text("regular expression")
                        .desired_width(f32::INFINITY)
                        .text_color_opt(error_colour(error_field, PatternField::Find)),
                )
                .changed()
            {
                state.request(Action::SetFind(find));
            }
            ui.end_row();

            ui.label("Replace:");
            let mut replace = state.session.workbench.replace.clone();
            if ui
                .add(
                    egui::TextEdit::singleline(&mut replace)
                        .code_editor()
                        .hint_text(r"replacement, e.g. \1 or ${name}")
                        .desired_width(f32::INFINITY)
                        .text_color_opt(error_colour(error_field, PatternField::Replace)),
                )
                .changed()
            {
                state.request(Action::SetReplace(replace));
            }
            ui.end_row();
        });

    if let Some(ref message) = state.session.workbench.pattern_error {
        ui.colored_label(theme::ERROR_TEXT, message);
    }
}

fn error_colour(error_field: Option<PatternField>, field: PatternField) -> Option<egui::Color32> {
    (error_field == Some(field)).then_some(theme::ERROR_TEXT)
}

/// Read-only rendering of preview segments, highlighted runs on `highlight`.
fn segment_view(ui: &mut egui::Ui, id: &str, segments: &[Segment], highlight: egui::Color32) {
    let font_id = egui::TextStyle::Monospace.resolve(ui.style());
    let text_colour = ui.visuals().text_color();

    let mut job = LayoutJob::default();
    job.wrap.max_width = ui.available_width();
    for segment in segments {
        let format = if segment.highlighted {
            egui::TextFormat {
                font_id: font_id.clone(),
                color: theme::HIGHLIGHT_TEXT,
                background: highlight,
                ..Default::default()
            }
        } else {
            egui::TextFormat {
                font_id: font_id.clone(),
                color: text_colour,
                ..Default::default()
            }
        };
        job.append(&segment.text, 0.0, format);
    }

    egui::ScrollArea::vertical()
        .id_salt(id)
        .max_height(theme::PREVIEW_HEIGHT)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.label(job);
        });
}
