// TicTacToe - app/state.rs
//
// Application state management. Holds the board, hover preview, score
// totals and theme preference, and turns user intents into state changes.
// Owned by the eframe::App implementation.
//
// Every board mutation goes through this type so the follow-up work
// (clear the hover preview, report the outcome to the score tracker)
// happens in one place.

use crate::app::hover::HoverPreview;
use crate::app::preferences::ThemePreference;
use crate::core::board::BoardState;
use crate::core::model::{GameOutcome, Player};
use crate::core::score::ScoreTracker;
use crate::platform::config::AppConfig;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The game in progress (or just finished).
    pub board: BoardState,

    /// Transient hover state; never part of the game.
    pub hover: HoverPreview,

    /// Totals across games this session.
    pub scores: ScoreTracker,

    /// Dark/light flag and its persistence.
    pub theme: ThemePreference,

    /// Validated config.toml values.
    pub config: AppConfig,

    /// Non-fatal warnings from startup (config validation).
    pub warnings: Vec<String>,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state: empty board, zero scores.
    pub fn new(theme: ThemePreference, config: AppConfig, debug_mode: bool) -> Self {
        Self {
            board: BoardState::new(),
            hover: HoverPreview::default(),
            scores: ScoreTracker::new(),
            theme,
            config,
            warnings: Vec::new(),
            show_about: false,
            debug_mode,
        }
    }

    /// Cell activated by the user.
    ///
    /// Returns whether the move was accepted. Rejected moves change nothing.
    pub fn play(&mut self, index: usize) -> bool {
        if !self.board.place(index) {
            return false;
        }
        self.hover.clear();
        self.sync_outcome();
        true
    }

    /// Start a new game. Score totals are kept.
    pub fn reset(&mut self) {
        self.board.reset();
        self.hover.clear();
        self.scores.rearm();
        tracing::debug!("Board reset");
    }

    /// Report the current outcome to the score tracker.
    ///
    /// Safe to call any number of times per frame; a finished game is only
    /// counted once.
    pub fn sync_outcome(&mut self) {
        let outcome = self.board.outcome();
        self.scores.record_outcome(&outcome);
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    /// The reset control is only offered once the game has ended.
    pub fn can_reset(&self) -> bool {
        self.board.is_finished()
    }

    /// Flip dark mode and persist it. Returns the new value.
    pub fn toggle_theme(&mut self) -> bool {
        self.theme.toggle()
    }

    /// Text for the status line.
    pub fn status_text(&self) -> String {
        match self.outcome() {
            GameOutcome::InProgress => format!("Next player: {}", self.board.next_player()),
            GameOutcome::Win(win) => format!("Winner: {}", win.player),
            GameOutcome::Tie => "It's a tie!".to_string(),
        }
    }

    /// Mark to preview faintly at `index`, honouring the config switch.
    pub fn preview_at(&self, index: usize) -> Option<Player> {
        if !self.config.hover_preview {
            return None;
        }
        self.hover.preview_at(index, &self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(ThemePreference::in_memory(false), AppConfig::default(), false)
    }

    #[test]
    fn test_win_is_scored_once() {
        let mut s = state();
        for m in [0, 1, 3, 2, 6] {
            assert!(s.play(m));
        }
        assert_eq!(s.outcome().winner(), Some(Player::X));
        for _ in 0..3 {
            s.sync_outcome();
        }
        assert!(!s.play(8));
        assert_eq!(s.scores.wins(Player::X), 1);
        assert_eq!(s.scores.games_played(), 1);
        assert_eq!(s.status_text(), "Winner: X");
    }

    #[test]
    fn test_move_clears_hover() {
        let mut s = state();
        s.hover.enter(4);
        assert_eq!(s.preview_at(4), Some(Player::X));
        s.play(4);
        assert_eq!(s.hover.hovered(), None);
        assert_eq!(s.preview_at(4), None);
    }

    #[test]
    fn test_rejected_move_keeps_hover() {
        let mut s = state();
        s.play(4);
        s.hover.enter(4);
        assert!(!s.play(4));
        assert_eq!(s.hover.hovered(), Some(4));
        assert_eq!(s.board.next_player(), Player::O);
    }

    #[test]
    fn test_reset_keeps_scores_and_rearms() {
        let mut s = state();
        for m in [0, 1, 3, 2, 6] {
            s.play(m);
        }
        assert!(s.can_reset());
        s.hover.enter(5);
        s.reset();
        assert!(!s.can_reset());
        assert_eq!(s.hover.hovered(), None);
        assert_eq!(s.status_text(), "Next player: X");
        assert_eq!(s.scores.games_played(), 1);

        // O wins the second game on the top row.
        for m in [3, 0, 4, 1, 8, 2] {
            s.play(m);
        }
        assert_eq!(s.scores.wins(Player::O), 1);
        assert_eq!(s.scores.games_played(), 2);
    }

    #[test]
    fn test_preview_disabled_by_config() {
        let config = AppConfig {
            hover_preview: false,
            ..AppConfig::default()
        };
        let mut s = AppState::new(ThemePreference::in_memory(false), config, false);
        s.hover.enter(0);
        assert_eq!(s.preview_at(0), None);
    }

    #[test]
    fn test_toggle_theme_twice_restores() {
        let mut s = state();
        assert!(s.toggle_theme());
        assert!(!s.toggle_theme());
        assert!(!s.theme.is_dark());
    }
}
