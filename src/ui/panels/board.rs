// TicTacToe - ui/panels/board.rs
//
// The 3x3 grid: cell painting, hover preview, click handling, keyboard
// shortcuts and the winning-line indicator.
//
// Intents (click, hover enter/leave) are collected while painting and
// applied to `AppState` afterwards, so every cell in a frame is drawn from
// the same board snapshot.

use crate::app::state::AppState;
use crate::core::model::{Cell, GameOutcome, CELL_COUNT, SIDE};
use crate::ui::theme;
use crate::util::constants;
use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Vec2};

/// Screen rectangle of cell `index` inside a board whose top-left corner is
/// `origin`.
pub fn cell_rect(origin: Pos2, cell_size: f32, index: usize) -> Rect {
    let row = (index / SIDE) as f32;
    let col = (index % SIDE) as f32;
    let step = cell_size + constants::CELL_SPACING;
    Rect::from_min_size(
        origin + Vec2::new(col * step, row * step),
        Vec2::splat(cell_size),
    )
}

/// Total edge length of the board.
pub fn board_side(cell_size: f32) -> f32 {
    cell_size * SIDE as f32 + constants::CELL_SPACING * (SIDE - 1) as f32
}

/// Map the digit keys 1-9 onto cells 0-8 (row-major).
fn pressed_cell(input: &egui::InputState) -> Option<usize> {
    const KEYS: [egui::Key; CELL_COUNT] = [
        egui::Key::Num1,
        egui::Key::Num2,
        egui::Key::Num3,
        egui::Key::Num4,
        egui::Key::Num5,
        egui::Key::Num6,
        egui::Key::Num7,
        egui::Key::Num8,
        egui::Key::Num9,
    ];
    KEYS.iter().position(|&k| input.key_pressed(k))
}

/// Apply keyboard shortcuts: digits place a mark, `R` resets a finished game.
pub fn handle_keys(ctx: &egui::Context, state: &mut AppState) {
    let (cell, reset) = ctx.input(|i| (pressed_cell(i), i.key_pressed(egui::Key::R)));
    if let Some(index) = cell {
        state.play(index);
    }
    if reset && state.can_reset() {
        state.reset();
    }
}

/// Render the board at the current layout cursor.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let cell_size = state.config.cell_size;
    let side = board_side(cell_size);
    let dark = state.theme.is_dark();
    let outcome = state.outcome();

    let (board_rect, _) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());
    let origin = board_rect.min;
    let painter = ui.painter_at(board_rect);

    let mut clicked: Option<usize> = None;
    let mut entered: Option<usize> = None;
    let mut left: Option<usize> = None;

    for index in 0..CELL_COUNT {
        let rect = cell_rect(origin, cell_size, index);
        let response = ui.interact(rect, ui.id().with(("cell", index)), Sense::click());
        let hovered = response.hovered();

        if hovered && state.hover.hovered() != Some(index) {
            entered = Some(index);
        } else if !hovered && state.hover.hovered() == Some(index) {
            left = Some(index);
        }
        if response.clicked() {
            clicked = Some(index);
        }

        let open = state.board.cell(index).is_empty() && !outcome.is_finished();
        painter.rect_filled(rect, 6.0, theme::cell_fill(dark, hovered && open));
        if let GameOutcome::Win(win) = outcome {
            if win.line.contains(index) {
                painter.rect_filled(rect, 6.0, theme::WIN_CELL_TINT);
            }
        }

        let font = FontId::proportional(cell_size * constants::MARK_SCALE);
        match state.board.cell(index) {
            Cell::Taken(player) => {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    player.symbol(),
                    font,
                    theme::mark_colour(player, dark),
                );
            }
            Cell::Empty => {
                if let Some(player) = state.preview_at(index) {
                    painter.text(
                        rect.center(),
                        Align2::CENTER_CENTER,
                        player.symbol(),
                        font,
                        theme::preview_colour(player, dark),
                    );
                }
            }
        }
    }

    // Winning line between the centres of the two end cells.
    let line_id = ui.id().with("winning_line");
    let progress = if state.config.animate_winning_line {
        ui.ctx().animate_bool_with_time(
            line_id,
            outcome.winner().is_some(),
            constants::WIN_LINE_ANIMATION_SECS,
        )
    } else {
        1.0
    };
    if let GameOutcome::Win(win) = outcome {
        let (first, last) = win.line.endpoints();
        let start = cell_rect(origin, cell_size, first).center();
        let end = cell_rect(origin, cell_size, last).center();
        painter.line_segment(
            [start, start + (end - start) * progress],
            Stroke::new(constants::WIN_LINE_WIDTH, theme::win_line_colour(dark)),
        );
    }

    if let Some(index) = left {
        state.hover.leave(index);
    }
    if let Some(index) = entered {
        state.hover.enter(index);
    }
    if let Some(index) = clicked {
        state.play(index);
    }
}
