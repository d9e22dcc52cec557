// TicTacToe - platform/config.rs
//
// Platform data/config directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for application data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/tictactoe/).
    pub config_dir: PathBuf,

    /// Data directory holding the theme preference file.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// Location of the persisted theme preference.
    pub fn preferences_file(&self) -> PathBuf {
        self.data_dir.join(constants::PREFERENCES_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Edge length of one cell in points.
    pub cell_size: Option<f32>,
    /// Show the faint next-mark preview on hover.
    pub hover_preview: Option<bool>,
    /// Sweep the winning line in instead of drawing it at once.
    pub animate_winning_line: Option<bool>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Cell edge length in points.
    pub cell_size: f32,
    /// Hover preview enabled.
    pub hover_preview: bool,
    /// Winning-line animation enabled.
    pub animate_winning_line: bool,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cell_size: constants::DEFAULT_CELL_SIZE,
            hover_preview: constants::DEFAULT_HOVER_PREVIEW,
            animate_winning_line: constants::DEFAULT_ANIMATE_WIN_LINE,
            log_level: None,
        }
    }
}

/// Path of config.toml for a given platform config directory.
///
/// On Linux and macOS the config dir is the application folder itself. On
/// Windows `ProjectDirs` adds a `config` subfolder, so the file goes one
/// level up to sit directly in `%APPDATA%\TicTacToe\`.
pub fn config_path(config_dir: &Path) -> PathBuf {
    let app_dir = match config_dir.parent() {
        Some(parent) if config_dir.file_name().is_some_and(|n| n == "config") => parent,
        _ => config_dir,
    };
    app_dir.join(constants::CONFIG_FILE_NAME)
}

/// Read and parse config.toml. `Ok(None)` when the file does not exist.
fn read_raw(path: &Path) -> Result<Option<RawConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(raw))
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults with a warning;
/// the application still starts.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let path = config_path(config_dir);
    let mut warnings: Vec<String> = Vec::new();

    let raw = match read_raw(&path) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
            return (AppConfig::default(), warnings);
        }
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %path.display(), "Loaded config.toml");
    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

/// Check each raw value against its named limits, accumulating warnings.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- UI: cell_size --
    if let Some(size) = raw.ui.cell_size {
        if (constants::MIN_CELL_SIZE..=constants::MAX_CELL_SIZE).contains(&size) {
            config.cell_size = size;
        } else {
            warnings.push(format!(
                "[ui] cell_size = {size} is out of range ({}-{}). Using default ({}).",
                constants::MIN_CELL_SIZE,
                constants::MAX_CELL_SIZE,
                constants::DEFAULT_CELL_SIZE,
            ));
        }
    }

    if let Some(enabled) = raw.ui.hover_preview {
        config.hover_preview = enabled;
    }
    if let Some(enabled) = raw.ui.animate_winning_line {
        config.animate_winning_line = enabled;
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level);
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    config
}
