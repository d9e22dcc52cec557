// TicTacToe - ui/panels/mod.rs

pub mod about;
pub mod board;
pub mod scoreboard;
pub mod status;
