// TicTacToe - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Tic Tac Toe";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "TicTacToe";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Board layout
// =============================================================================

/// Default edge length of one board cell in points.
pub const DEFAULT_CELL_SIZE: f32 = 96.0;

/// Smallest accepted cell size (keeps marks legible).
pub const MIN_CELL_SIZE: f32 = 48.0;

/// Largest accepted cell size.
pub const MAX_CELL_SIZE: f32 = 200.0;

/// Gap between adjacent cells in points.
pub const CELL_SPACING: f32 = 6.0;

/// Mark glyph size relative to the cell edge.
pub const MARK_SCALE: f32 = 0.6;

/// Opacity of the hover preview mark (0-255).
pub const PREVIEW_ALPHA: u8 = 70;

// =============================================================================
// Winning line
// =============================================================================

/// Time for the winning line to sweep from one endpoint to the other.
pub const WIN_LINE_ANIMATION_SECS: f32 = 0.35;

/// Stroke width of the winning line in points.
pub const WIN_LINE_WIDTH: f32 = 6.0;

// =============================================================================
// Feature defaults
// =============================================================================

/// Whether hovering an empty cell previews the next mark.
pub const DEFAULT_HOVER_PREVIEW: bool = true;

/// Whether the winning line animates in (false draws it immediately).
pub const DEFAULT_ANIMATE_WIN_LINE: bool = true;

/// Theme when no preference has been stored.
pub const DEFAULT_DARK_MODE: bool = false;

// =============================================================================
// Logging
// =============================================================================

/// Default tracing filter when neither RUST_LOG, --debug nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted `[logging] level` values.
pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Files
// =============================================================================

/// Config file name (lives one level above the platform config dir).
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Theme preference file name (in the platform data dir).
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

// =============================================================================
// Window
// =============================================================================

/// Initial window size in points.
pub const WINDOW_SIZE: [f32; 2] = [420.0, 560.0];

/// Minimum window size in points.
pub const WINDOW_MIN_SIZE: [f32; 2] = [320.0, 440.0];
