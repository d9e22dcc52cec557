// TicTacToe - app/preferences.rs
//
// Theme preference persistence: a single dark/light flag stored as
// `{"darkMode": bool}` in the platform data directory.
//
// Design principles:
// - Read once at startup. A missing, unreadable or malformed file means
//   light mode; it never stops the application.
// - Written on every toggle, atomically (write->temp, rename->final) so a
//   crash during save never corrupts the previous value.
// - The data directory is created on first save.

use crate::util::error::PreferenceError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk shape of the preference file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPreferences {
    /// Absent key reads as light mode.
    #[serde(default)]
    pub dark_mode: bool,
}

/// Save `prefs` to `path` atomically (write temp, then rename).
pub fn save(prefs: &StoredPreferences, path: &Path) -> Result<(), PreferenceError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| PreferenceError::Io {
            path: parent.to_path_buf(),
            operation: "create directory for",
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(prefs).map_err(|source| PreferenceError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes()).map_err(|source| PreferenceError::Io {
        path: tmp.clone(),
        operation: "write",
        source,
    })?;

    std::fs::rename(&tmp, path).map_err(|source| {
        let _ = std::fs::remove_file(&tmp);
        PreferenceError::Io {
            path: path.to_path_buf(),
            operation: "finalise",
            source,
        }
    })?;

    tracing::debug!(path = %path.display(), dark_mode = prefs.dark_mode, "Preferences saved");
    Ok(())
}

/// Read the preference file. `Ok(None)` when it does not exist yet.
pub fn load(path: &Path) -> Result<Option<StoredPreferences>, PreferenceError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PreferenceError::Io {
                path: path.to_path_buf(),
                operation: "read",
                source,
            })
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| PreferenceError::Json {
            path: path.to_path_buf(),
            source,
        })
}

// =============================================================================
// ThemePreference
// =============================================================================

/// The in-memory dark mode flag and where it is persisted.
#[derive(Debug, Clone)]
pub struct ThemePreference {
    dark: bool,
    /// `None` keeps the flag in memory only.
    path: Option<PathBuf>,
}

impl ThemePreference {
    /// Load the stored flag from `path`, falling back to light mode.
    pub fn load(path: PathBuf) -> Self {
        let dark = match load(&path) {
            Ok(Some(prefs)) => {
                tracing::info!(
                    path = %path.display(),
                    dark_mode = prefs.dark_mode,
                    "Theme preference loaded"
                );
                prefs.dark_mode
            }
            Ok(None) => {
                tracing::debug!(path = %path.display(), "No stored theme preference; using light");
                crate::util::constants::DEFAULT_DARK_MODE
            }
            Err(e) => {
                tracing::warn!(error = %e, "Theme preference unreadable; using light");
                crate::util::constants::DEFAULT_DARK_MODE
            }
        };
        Self {
            dark,
            path: Some(path),
        }
    }

    /// A preference that is never written anywhere.
    pub fn in_memory(dark: bool) -> Self {
        Self { dark, path: None }
    }

    /// Replace the flag for this session only, without persisting it.
    pub fn with_override(mut self, dark: bool) -> Self {
        self.dark = dark;
        self
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flip the flag and persist the new value.
    ///
    /// A failed write is logged; the in-memory flag still flips so the
    /// window follows the user's choice. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        tracing::debug!(dark_mode = self.dark, "Theme toggled");
        if let Some(ref path) = self.path {
            let prefs = StoredPreferences {
                dark_mode: self.dark,
            };
            if let Err(e) = save(&prefs, path) {
                tracing::warn!(error = %e, "Failed to persist theme preference");
            }
        }
        self.dark
    }
}

// =============================================================================
// Unit tests
// =============================================================================
