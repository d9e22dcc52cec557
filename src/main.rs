// TicTacToe - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. Theme preference loading
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use tictactoe::app;
pub use tictactoe::core;
pub use tictactoe::platform;
pub use tictactoe::ui;
pub use tictactoe::util;

use crate::util::error::TicTacToeError;
use clap::Parser;
use std::path::PathBuf;

/// Tic Tac Toe - two players, one window.
///
/// Scores are kept for the session; the dark/light choice is remembered
/// between runs.
#[derive(Parser, Debug)]
#[command(name = "tictactoe", version, about)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Start in dark mode for this run without changing the stored preference.
    #[arg(long, conflicts_with = "light")]
    dark: bool,

    /// Start in light mode for this run without changing the stored preference.
    #[arg(long)]
    light: bool,

    /// Directory holding the theme preference file (overrides the platform default).
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,
}

impl Cli {
    /// One-shot theme override from `--dark` / `--light`.
    fn theme_override(&self) -> Option<bool> {
        match (self.dark, self.light) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn run(cli: Cli) -> util::error::Result<()> {
    let platform_paths = platform::config::PlatformPaths::resolve();

    // Config is read before logging so its level can take effect; warnings
    // are logged once the subscriber is up.
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "Tic Tac Toe starting"
    );
    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    // Preference file: CLI override > platform default.
    let prefs_path = match cli.data_dir {
        Some(ref dir) => {
            std::fs::create_dir_all(dir).map_err(|source| TicTacToeError::Io {
                path: dir.clone(),
                operation: "create data directory",
                source,
            })?;
            dir.join(util::constants::PREFERENCES_FILE_NAME)
        }
        None => platform_paths.preferences_file(),
    };

    let mut theme = app::preferences::ThemePreference::load(prefs_path);
    if let Some(dark) = cli.theme_override() {
        tracing::debug!(dark_mode = dark, "Theme overridden from command line");
        theme = theme.with_override(dark);
    }

    let mut state = app::state::AppState::new(theme, config, cli.debug);
    state.warnings = config_warnings;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(util::constants::WINDOW_SIZE)
            .with_min_inner_size(util::constants::WINDOW_MIN_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::TicTacToeApp::new(state)))),
    )?;

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "Fatal error");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
