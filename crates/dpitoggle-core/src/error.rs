use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that end a toggle attempt.
///
/// A missing registry key or value is not an error; readers report it as
/// `None` and the controller falls back to the default flag.
#[derive(Debug, Error)]
pub enum ToggleError {
    #[error("invalid image name {image:?}: {reason}")]
    InvalidImage { image: String, reason: String },

    #[error("could not read {key}\\{name}: {reason}")]
    RegistryRead {
        key: String,
        name: String,
        reason: String,
    },

    #[error("could not write {}: {source}", path.display())]
    ScriptWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not launch {program}: {reason}")]
    Launch { program: String, reason: String },

    #[error("could not determine elevation state: {0}")]
    Elevation(String),

    #[error("restart failed: {0}")]
    Restart(String),
}

/// Result alias used across the toggle workflow.
pub type ToggleResult<T> = Result<T, ToggleError>;
