// TicTacToe - app/mod.rs
//
// Application layer: state management, hover tracking, theme persistence.
// Dependencies: core layer, platform config.
// Must NOT depend on: ui.

pub mod hover;
pub mod preferences;
pub mod state;
