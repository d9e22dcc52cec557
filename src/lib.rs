// TicTacToe - lib.rs
//
// Library entry point, exposing all non-GUI modules for integration testing.
//
// The eframe `App` implementation lives in `gui.rs` on the binary side and
// is not part of the library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
