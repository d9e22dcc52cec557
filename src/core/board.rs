// TicTacToe - core/board.rs
//
// Board state: the nine cells and whose turn it is.
// The game outcome is derived from the cells on every read and never
// stored, so it cannot drift out of sync with the board.

use crate::core::model::{Cell, Cells, GameOutcome, Player, CELL_COUNT};
use crate::core::rules;

/// The nine cells plus the player to move.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    cells: Cells,
    next: Player,
}

impl BoardState {
    /// Empty board, X to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the current player's mark at `index`.
    ///
    /// Ignored (returns `false`, nothing changes) when the game is already
    /// won, the cell is taken, or the index is off the board. On success the
    /// turn passes to the other player.
    pub fn place(&mut self, index: usize) -> bool {
        if index >= CELL_COUNT {
            tracing::debug!(index, "Move rejected: index off the board");
            return false;
        }
        if rules::find_winner(&self.cells).is_some() {
            tracing::debug!(index, "Move rejected: game already won");
            return false;
        }
        if !self.cells[index].is_empty() {
            tracing::debug!(index, "Move rejected: cell occupied");
            return false;
        }

        self.cells[index] = Cell::Taken(self.next);
        tracing::debug!(index, player = %self.next, "Move accepted");
        self.next = self.next.other();
        true
    }

    /// Clear every cell and hand the first move back to X.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current outcome, derived from the cells.
    pub fn outcome(&self) -> GameOutcome {
        match rules::find_winner(&self.cells) {
            Some(win) => GameOutcome::Win(win),
            None if rules::is_full(&self.cells) => GameOutcome::Tie,
            None => GameOutcome::InProgress,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_finished()
    }

    /// Player whose mark the next accepted move will place.
    pub fn next_player(&self) -> Player {
        self.next
    }

    /// Contents of a cell; off-board indices read as empty.
    pub fn cell(&self, index: usize) -> Cell {
        self.cells.get(index).copied().unwrap_or_default()
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Number of marks on the board.
    pub fn moves_played(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Win, WinningLine};

    fn play(moves: &[usize]) -> BoardState {
        let mut board = BoardState::new();
        for &m in moves {
            assert!(board.place(m), "move {m} should be accepted");
        }
        board
    }

    #[test]
    fn test_new_board_is_empty_x_first() {
        let board = BoardState::new();
        assert_eq!(board.next_player(), Player::X);
        assert_eq!(board.moves_played(), 0);
        assert_eq!(board.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn test_place_writes_mark_and_flips_turn() {
        let mut board = BoardState::new();
        assert!(board.place(4));
        assert_eq!(board.cell(4), Cell::Taken(Player::X));
        assert_eq!(board.next_player(), Player::O);

        assert!(board.place(0));
        assert_eq!(board.cell(0), Cell::Taken(Player::O));
        assert_eq!(board.next_player(), Player::X);
    }

    #[test]
    fn test_place_on_occupied_cell_is_ignored() {
        let mut board = BoardState::new();
        assert!(board.place(4));
        let before = board.clone();
        assert!(!board.place(4));
        assert_eq!(board, before);
        assert_eq!(board.next_player(), Player::O);
    }

    #[test]
    fn test_place_off_board_is_ignored() {
        let mut board = BoardState::new();
        assert!(!board.place(9));
        assert_eq!(board, BoardState::new());
    }

    #[test]
    fn test_place_after_win_is_ignored() {
        let mut board = play(&[0, 1, 3, 2, 6]);
        let before = board.clone();
        assert!(!board.place(8));
        assert_eq!(board, before);
    }

    #[test]
    fn test_left_column_win_scenario() {
        let board = play(&[0, 1, 3, 2, 6]);
        assert_eq!(
            board.outcome(),
            GameOutcome::Win(Win {
                player: Player::X,
                line: WinningLine([0, 3, 6]),
            })
        );
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        // X O X / X O O / O X X
        let board = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(board.moves_played(), 9);
        assert_eq!(board.outcome(), GameOutcome::Tie);
    }

    #[test]
    fn test_win_on_last_cell_is_win_not_tie() {
        // X O X / O X O / O X X -- X completes the main diagonal on move nine.
        let board = play(&[0, 1, 2, 3, 4, 5, 7, 6, 8]);
        assert_eq!(board.outcome().winner(), Some(Player::X));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut board = play(&[0, 1, 3, 2, 6]);
        board.reset();
        assert_eq!(board, BoardState::new());
        assert_eq!(board.next_player(), Player::X);
        assert_eq!(board.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn test_marks_placed_equals_moves_accepted() {
        let mut board = BoardState::new();
        let mut accepted = 0;
        for m in [4, 4, 0, 9, 0, 8, 2, 6, 1, 3, 5, 7] {
            if board.place(m) {
                accepted += 1;
            }
        }
        assert_eq!(board.moves_played(), accepted);
    }
}
