mod loader;
pub mod template;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;
use crate::registry::check_image_name;

pub use loader::{config_dir, config_path, load, try_load};

/// Executable whose DPI awareness is toggled when none is configured.
pub const DEFAULT_IMAGE: &str = "devenv.exe";

const MIN_SHUTDOWN_SECS: u64 = 1;
const MAX_SHUTDOWN_SECS: u64 = 600;
const MAX_LOG_FILE_MB: u64 = 1024;

/// Top-level configuration for dpitoggle.
///
/// Loaded from `~/.config/dpitoggle/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which executable is reconfigured.
    pub target: TargetConfig,
    /// How the target is restarted after a change.
    pub restart: RestartConfig,
    /// How messages are shown.
    pub ui: UiConfig,
    /// File logging.
    pub logging: LogConfig,
}

/// The executable whose Image File Execution Options are edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Image file name, e.g. `devenv.exe`. Used as the registry subkey.
    pub image: String,
    /// Full path used to relaunch the target. When unset, the path of the
    /// running instance is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executable: Option<PathBuf>,
}

/// Restart behaviour after the flag is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestartConfig {
    /// Restart the target automatically.
    pub enabled: bool,
    /// Seconds to wait for running instances to close.
    pub shutdown_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show message boxes instead of console output.
    pub dialogs: bool,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            image: DEFAULT_IMAGE.into(),
            executable: None,
        }
    }
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            shutdown_timeout_secs: 30,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { dialogs: true }
    }
}

impl Config {
    /// Clamps values to usable ranges and restores the default image when
    /// the configured one is blank or not a plain file name.
    pub fn validate(&mut self) {
        let image = self.target.image.trim();
        self.target.image = if image.is_empty() {
            DEFAULT_IMAGE.into()
        } else if let Err(reason) = check_image_name(image) {
            eprintln!("Warning: invalid target.image {image:?} ({reason}); using {DEFAULT_IMAGE}");
            DEFAULT_IMAGE.into()
        } else {
            image.into()
        };
        self.logging.max_file_mb = self.logging.max_file_mb.min(MAX_LOG_FILE_MB);
        self.restart.shutdown_timeout_secs = self
            .restart
            .shutdown_timeout_secs
            .clamp(MIN_SHUTDOWN_SECS, MAX_SHUTDOWN_SECS);
    }
}

#[cfg(test)]
mod tests;
