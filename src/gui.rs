// TicTacToe - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels; every state change happens synchronously
// inside `update` on the UI thread.

use crate::app::state::AppState;
use crate::ui;

/// The Tic Tac Toe application.
pub struct TicTacToeApp {
    pub state: AppState,
}

impl TicTacToeApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn sync_theme(&self, ctx: &egui::Context) {
        ui::theme::sync(ctx, self.state.theme.is_dark());
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_theme(ctx);
        ui::panels::board::handle_keys(ctx, &mut self.state);

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    let can_reset = self.state.can_reset();
                    if ui
                        .add_enabled(can_reset, egui::Button::new("Play again"))
                        .clicked()
                    {
                        self.state.reset();
                        ui.close_menu();
                    }
                    if ui.button("Reset scores").clicked() {
                        self.state.scores.reset_scores();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (icon, hint) = if self.state.theme.is_dark() {
                        ("\u{2600}", "Switch to light mode")
                    } else {
                        ("\u{263e}", "Switch to dark mode")
                    };
                    if ui.button(icon).on_hover_text(hint).clicked() {
                        self.state.toggle_theme();
                    }
                });
            });
        });

        // Score board
        egui::TopBottomPanel::bottom("score_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.vertical_centered(|ui| {
                ui::panels::scoreboard::render(ui, &self.state);
            });
            ui.add_space(4.0);
        });

        // Central panel: status line, board, reset control.
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui::panels::status::render(ui, &mut self.state);
                ui.add_space(12.0);
                ui::panels::board::render(ui, &mut self.state);

                if self.state.debug_mode {
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(format!(
                            "moves: {}  hovered: {:?}  recorded: {}",
                            self.state.board.moves_played(),
                            self.state.hover.hovered(),
                            self.state.scores.is_recorded()
                        ))
                        .monospace()
                        .small()
                        .weak(),
                    );
                }

                for warning in &self.state.warnings {
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(warning)
                            .small()
                            .color(egui::Color32::from_rgb(217, 119, 6)),
                    );
                }
            });
        });

        ui::panels::about::render(ctx, &mut self.state);

        // Outcome evaluation may run again for a board already counted; the
        // tracker ignores repeats.
        self.state.sync_outcome();

        // The toggle may have fired this frame.
        self.sync_theme(ctx);
    }
}
