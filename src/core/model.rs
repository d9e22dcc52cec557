// TicTacToe - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use std::fmt;

/// Number of cells on the board (3x3, row-major).
pub const CELL_COUNT: usize = 9;

/// Number of cells along one side of the board.
pub const SIDE: usize = 3;

// =============================================================================
// Player
// =============================================================================

/// One of the two players. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player {
    #[default]
    X,
    O,
}

impl Player {
    /// The player who moves after this one.
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Mark drawn on the board for this player.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// =============================================================================
// Cell
// =============================================================================

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }
}

/// The nine cells, indices 0-8 laid out row-major.
pub type Cells = [Cell; CELL_COUNT];

// =============================================================================
// Winning lines
// =============================================================================

/// One of the eight fixed index triples that win the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine(pub [usize; 3]);

impl WinningLine {
    /// The three cell indices, in board order.
    pub fn cells(self) -> [usize; 3] {
        self.0
    }

    /// First and last cell of the triple.
    ///
    /// The view draws the indicator between these two only; the middle cell
    /// is implied by the straight line.
    pub fn endpoints(self) -> (usize, usize) {
        (self.0[0], self.0[2])
    }

    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// All eight lines in evaluation order: rows top-to-bottom, columns
/// left-to-right, then the two diagonals.
pub const LINES: [WinningLine; 8] = [
    WinningLine([0, 1, 2]),
    WinningLine([3, 4, 5]),
    WinningLine([6, 7, 8]),
    WinningLine([0, 3, 6]),
    WinningLine([1, 4, 7]),
    WinningLine([2, 5, 8]),
    WinningLine([0, 4, 8]),
    WinningLine([2, 4, 6]),
];

// =============================================================================
// Outcome
// =============================================================================

/// A completed line: who made it and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    pub player: Player,
    pub line: WinningLine,
}

/// State of the game as derived from the board. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Win),
    Tie,
}

impl GameOutcome {
    /// True for `Win` and `Tie`.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Self::Win(w) => Some(w.player),
            _ => None,
        }
    }
}
