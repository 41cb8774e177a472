//! Error types for scenedoc

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for scenedoc operations
///
/// Parsing and rendering never fail; everything here comes from the
/// filesystem or configuration layers around them.
#[derive(Debug, Error)]
pub enum SceneDocError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(String),

    #[error("Config parse error in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Path not found: {0}")]
    InvalidPath(PathBuf),

    #[error("No scene files found in {0}")]
    NoSceneFiles(PathBuf),
}

/// Result type alias for scenedoc operations
pub type Result<T> = std::result::Result<T, SceneDocError>;

impl From<walkdir::Error> for SceneDocError {
    fn from(err: walkdir::Error) -> Self {
        SceneDocError::Walk(err.to_string())
    }
}

impl SceneDocError {
    /// Build a config error from a TOML deserialization failure
    pub fn config(path: impl Into<PathBuf>, err: toml::de::Error) -> Self {
        SceneDocError::ConfigParse {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
