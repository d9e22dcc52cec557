// TicTacToe - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation. Nothing in the game itself can fail.
// Preference and config errors are leaf types: callers log them or turn them
// into startup warnings and carry on with defaults. Only launch failures
// reach `TicTacToeError`.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal startup errors.
#[derive(Debug)]
pub enum TicTacToeError {
    /// The native window could not be created.
    Gui(eframe::Error),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for TicTacToeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gui(e) => write!(f, "Failed to launch GUI: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for TicTacToeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gui(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Preference errors
// ---------------------------------------------------------------------------

/// Errors reading or writing the persisted theme preference.
#[derive(Debug)]
pub enum PreferenceError {
    /// File system error on the preference file or its directory.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// Preference file content is not valid JSON for the expected shape.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "cannot {operation} preference file '{}': {source}",
                path.display()
            ),
            Self::Json { path, source } => {
                write!(f, "malformed preference file '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PreferenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<eframe::Error> for TicTacToeError {
    fn from(e: eframe::Error) -> Self {
        Self::Gui(e)
    }
}

/// Convenience type alias for TicTacToe results.
pub type Result<T> = std::result::Result<T, TicTacToeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_preference_error_keeps_source_chain() {
        let err = PreferenceError::Io {
            path: PathBuf::from("/tmp/preferences.json"),
            operation: "write",
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("cannot write preference file"), "{msg}");
        assert!(msg.contains("preferences.json"), "{msg}");
        assert!(err.source().is_some(), "io::Error must be preserved");
    }

    #[test]
    fn test_startup_io_error_names_path_and_operation() {
        let err = TicTacToeError::Io {
            path: PathBuf::from("/data/tictactoe"),
            operation: "create data directory",
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("create data directory"), "{msg}");
        assert!(msg.contains("/data/tictactoe"), "{msg}");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Io {
            path: PathBuf::from("config.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().starts_with("Config I/O error 'config.toml'"));
    }
}
