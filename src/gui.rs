// Corpus Cleaner - gui.rs
//
// Top-level eframe::App implementation.
// Drains the actions panels queued last frame, then lays out the panels.

use crate::app::actions;
use crate::app::state::AppState;
use crate::ui;

/// The Corpus Cleaner application.
pub struct CorpusCleanerApp {
    pub state: AppState,
}

impl CorpusCleanerApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for CorpusCleanerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Perform actions requested by panels ----
        // Actions performed here may queue follow-ups; those run next frame.
        let pending = std::mem::take(&mut self.state.pending);
        let had_actions = !pending.is_empty();
        for action in pending {
            actions::perform(&mut self.state, action);
        }
        if had_actions {
            ctx.request_repaint();
        }

        let interactive = self.state.dialog.is_none();

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.session.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let warnings = self.state.session.warnings.len();
                    if warnings > 0 {
                        ui.colored_label(ui::theme::ERROR_TEXT, format!("{warnings} warning(s)"))
                            .on_hover_text(self.state.session.warnings.join("\n"));
                    }
                });
            });
        });

        // Left sidebar: navigation.
        egui::SidePanel::left("navigator")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui.add_enabled_ui(interactive, |ui| {
                    ui::panels::navigator::render(ui, &mut self.state);
                });
            });

        // Right sidebar: occurrence counts and the commit form.
        egui::SidePanel::right("occurrences_and_commit")
            .default_width(ui::theme::RIGHT_PANEL_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui.add_enabled_ui(interactive, |ui| {
                    ui::panels::occurrences::render(ui, &mut self.state);
                    ui.add_space(8.0);
                    ui.separator();
                    ui::panels::commit::render(ui, &mut self.state);
                });
            });

        // Central panel: patterns and preview.
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("central")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_enabled_ui(interactive, |ui| {
                        ui::panels::preview::render(ui, &mut self.state);
                    });
                });
        });

        ui::panels::dialogs::render(ctx, &mut self.state);
        ui::panels::dialogs::render_history(ctx, &mut self.state);
    }
}
