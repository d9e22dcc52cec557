// TicTacToe - ui/panels/status.rs
//
// Status line (next player / winner / tie) and the reset control.

use crate::app::state::AppState;
use crate::core::model::GameOutcome;
use crate::ui::theme;

/// Render the status line and reset button.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let dark = state.theme.is_dark();
    let text = egui::RichText::new(state.status_text()).size(22.0).strong();
    let text = match state.outcome() {
        GameOutcome::Win(win) => text.color(theme::mark_colour(win.player, dark)),
        GameOutcome::InProgress => text.color(theme::mark_colour(state.board.next_player(), dark)),
        GameOutcome::Tie => text,
    };
    ui.label(text);

    ui.add_space(8.0);

    // Only offered once the game has ended.
    let reset = ui.add_enabled(state.can_reset(), egui::Button::new("Play again"));
    if reset.clicked() {
        state.reset();
    }
}
