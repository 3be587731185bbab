use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::flag::DpiAwarenessFlag;
use crate::registry::RegistryTarget;
use crate::{ToggleError, ToggleResult};

/// File name of the pending edit inside the temp directory.
pub const SCRIPT_FILE_NAME: &str = "DpiAwarenessTemp.reg";

const HEADER: &str = "Windows Registry Editor Version 5.00";

/// A single-value `.reg` script setting the DPI awareness DWORD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryScript {
    key: String,
    name: String,
    value: u32,
}

impl RegistryScript {
    pub fn new(target: &RegistryTarget, flag: DpiAwarenessFlag) -> Self {
        Self {
            key: target.full_key_path(),
            name: target.value_name().to_string(),
            value: flag.dword(),
        }
    }

    /// Default location of the script: `%TEMP%\DpiAwarenessTemp.reg`.
    pub fn default_path() -> PathBuf {
        std::env::temp_dir().join(SCRIPT_FILE_NAME)
    }

    /// Renders the script text with CRLF line endings, as regedit writes it.
    pub fn render(&self) -> String {
        format!(
            "{HEADER}\r\n\r\n[{key}]\r\n\"{name}\"=dword:{value:08X}\r\n",
            key = self.key,
            name = self.name,
            value = self.value,
        )
    }

    /// Replaces any stale script at `path` with this one.
    pub fn write_to(&self, path: &Path) -> ToggleResult<()> {
        let to_error = |source: io::Error| ToggleError::ScriptWrite {
            path: path.to_path_buf(),
            source,
        };

        match fs::remove_file(path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(to_error(e)),
        }
        fs::write(path, self.render()).map_err(to_error)
    }
}
