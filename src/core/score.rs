// TicTacToe - core/score.rs
//
// Running score totals across games.
//
// The tracker is notified with the derived outcome after every board
// mutation (and may be notified again for the same finished board on later
// frames). A per-game `recorded` flag makes the counting idempotent: each
// game contributes exactly once, on its first terminal observation.

use crate::core::model::{GameOutcome, Player};

/// Win counts per player plus the number of completed games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    x_wins: u32,
    o_wins: u32,
    games_played: u32,
    /// Set once the current game's result has been counted.
    recorded: bool,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count `outcome` if it is the first terminal outcome seen this game.
    ///
    /// Returns `true` when the totals changed.
    pub fn record_outcome(&mut self, outcome: &GameOutcome) -> bool {
        if self.recorded {
            return false;
        }
        match outcome {
            GameOutcome::InProgress => return false,
            GameOutcome::Win(win) => {
                match win.player {
                    Player::X => self.x_wins += 1,
                    Player::O => self.o_wins += 1,
                }
                tracing::info!(
                    winner = %win.player,
                    line = ?win.line.cells(),
                    games = self.games_played + 1,
                    "Game won"
                );
            }
            GameOutcome::Tie => {
                tracing::info!(games = self.games_played + 1, "Game tied");
            }
        }
        self.games_played += 1;
        self.recorded = true;
        true
    }

    /// Arm the tracker for the next game. Called whenever the board resets.
    pub fn rearm(&mut self) {
        self.recorded = false;
    }

    /// Zero every total. The current game's recorded state is kept so a
    /// finished board on screen is not counted a second time.
    pub fn reset_scores(&mut self) {
        self.x_wins = 0;
        self.o_wins = 0;
        self.games_played = 0;
        tracing::debug!("Scores cleared");
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Completed games that neither player won.
    pub fn ties(&self) -> u32 {
        self.games_played - self.x_wins - self.o_wins
    }

    /// Whether the current game has already been counted.
    pub fn is_recorded(&self) -> bool {
        self.recorded
    }
}
