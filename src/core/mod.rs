// TicTacToe - core/mod.rs
//
// Core game logic layer.
// Dependencies: standard library and `tracing` only.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod board;
pub mod model;
pub mod rules;
pub mod score;
