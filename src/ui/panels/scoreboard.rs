// TicTacToe - ui/panels/scoreboard.rs
//
// Running totals: wins per player, ties and games played.

use crate::app::state::AppState;
use crate::core::model::Player;
use crate::ui::theme;

/// Render the score board as a compact grid.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let dark = state.theme.is_dark();
    let scores = &state.scores;

    egui::Grid::new("score_board")
        .num_columns(4)
        .min_col_width(theme::SCORE_COLUMN_WIDTH)
        .spacing([12.0, 2.0])
        .show(ui, |ui| {
            ui.colored_label(theme::mark_colour(Player::X, dark), "X");
            ui.colored_label(theme::mark_colour(Player::O, dark), "O");
            ui.label("Ties");
            ui.label("Games");
            ui.end_row();

            for value in [
                scores.wins(Player::X),
                scores.wins(Player::O),
                scores.ties(),
                scores.games_played(),
            ] {
                ui.label(egui::RichText::new(value.to_string()).size(18.0).strong());
            }
            ui.end_row();
        });
}
