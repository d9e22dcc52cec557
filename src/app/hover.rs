// TicTacToe - app/hover.rs
//
// Transient hover state. Lives next to the board but never flows into it
// and is never persisted.

use crate::core::board::BoardState;
use crate::core::model::Player;

/// The cell currently under the pointer, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverPreview {
    hovered: Option<usize>,
}

impl HoverPreview {
    /// Pointer entered cell `index`.
    pub fn enter(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    /// Pointer left cell `index`. A stale leave for a cell that is no longer
    /// the hovered one is ignored.
    pub fn leave(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    pub fn clear(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// The mark to preview faintly at `index`, if any.
    ///
    /// Only an empty, hovered cell in an unfinished game shows a preview.
    pub fn preview_at(&self, index: usize, board: &BoardState) -> Option<Player> {
        if self.hovered != Some(index) || !board.cell(index).is_empty() || board.is_finished() {
            return None;
        }
        Some(board.next_player())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_shows_next_player_on_empty_cell() {
        let mut board = BoardState::new();
        let mut hover = HoverPreview::default();
        hover.enter(4);
        assert_eq!(hover.preview_at(4, &board), Some(Player::X));
        assert_eq!(hover.preview_at(3, &board), None);

        board.place(0);
        assert_eq!(hover.preview_at(4, &board), Some(Player::O));
    }

    #[test]
    fn test_no_preview_on_occupied_cell_or_finished_game() {
        let mut board = BoardState::new();
        let mut hover = HoverPreview::default();
        board.place(4);
        hover.enter(4);
        assert_eq!(hover.preview_at(4, &board), None);

        board.reset();
        for m in [0, 1, 3, 2, 6] {
            board.place(m);
        }
        hover.enter(8);
        assert_eq!(hover.preview_at(8, &board), None);
    }

    #[test]
    fn test_stale_leave_is_ignored() {
        let mut hover = HoverPreview::default();
        hover.enter(1);
        hover.enter(2);
        hover.leave(1);
        assert_eq!(hover.hovered(), Some(2));
        hover.leave(2);
        assert_eq!(hover.hovered(), None);
    }

    #[test]
    fn test_preview_never_touches_board() {
        let board = BoardState::new();
        let mut hover = HoverPreview::default();
        hover.enter(5);
        let _ = hover.preview_at(5, &board);
        assert_eq!(board, BoardState::new());
    }
}
