//! Narrow view of the registry used by the toggle workflow.
//!
//! Reads go straight to the store through [`DwordReader`]. Writes are
//! never made in-process: they are rendered as a `.reg` script and handed
//! to a [`RegistryMerger`], which applies it with elevated rights.

use std::path::Path;

use crate::{ToggleError, ToggleResult};

/// Parent key holding per-executable launch options.
pub const IFEO_KEY: &str = r"SOFTWARE\Microsoft\Windows NT\CurrentVersion\Image File Execution Options";

/// Name of the DWORD value controlling DPI awareness.
pub const DPI_VALUE_NAME: &str = "dpiAwareness";

/// Root hive name as it appears in registry scripts.
pub const HKLM: &str = "HKEY_LOCAL_MACHINE";

/// Characters that would escape the IFEO subkey or the `[...]` key line
/// of a registry script.
const FORBIDDEN_IMAGE_CHARS: &[char] = &['\\', '/', '[', ']', '"'];

/// Checks that `image` is a plain file name such as `devenv.exe`.
pub fn check_image_name(image: &str) -> Result<(), String> {
    if image.is_empty() {
        return Err("name is empty".into());
    }
    if let Some(c) = image.chars().find(|c| FORBIDDEN_IMAGE_CHARS.contains(c)) {
        return Err(format!("'{c}' is not allowed in a file name"));
    }
    if image.chars().any(char::is_control) {
        return Err("control characters are not allowed".into());
    }
    if image.contains("..") {
        return Err("'..' is not allowed".into());
    }
    Ok(())
}

/// The registry location of one executable's DPI awareness flag.
///
/// The image is always a plain file name, so the key stays directly
/// under Image File Execution Options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryTarget {
    image: String,
}

impl RegistryTarget {
    /// Creates a target for an executable image name such as `devenv.exe`.
    pub fn new(image: impl Into<String>) -> ToggleResult<Self> {
        let image = image.into();
        check_image_name(&image).map_err(|reason| ToggleError::InvalidImage {
            image: image.clone(),
            reason,
        })?;
        Ok(Self { image })
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Key path relative to `HKEY_LOCAL_MACHINE`.
    pub fn key_path(&self) -> String {
        format!(r"{IFEO_KEY}\{}", self.image)
    }

    /// Fully qualified key path, including the hive.
    pub fn full_key_path(&self) -> String {
        format!(r"{HKLM}\{}", self.key_path())
    }

    pub fn value_name(&self) -> &'static str {
        DPI_VALUE_NAME
    }
}

/// Read-only access to DWORD values under `HKEY_LOCAL_MACHINE`.
pub trait DwordReader {
    /// Returns the DWORD stored at `key\name`.
    ///
    /// A missing key or value is `Ok(None)`. Access failures and values
    /// of another type are errors.
    fn get_dword(&self, key: &str, name: &str) -> ToggleResult<Option<u32>>;
}

/// Applies a registry script with the privileges needed to write HKLM.
pub trait RegistryMerger {
    /// Starts merging `script` and returns without waiting for the result.
    fn merge(&self, script: &Path) -> ToggleResult<()>;
}

impl<T: DwordReader + ?Sized> DwordReader for &T {
    fn get_dword(&self, key: &str, name: &str) -> ToggleResult<Option<u32>> {
        (**self).get_dword(key, name)
    }
}

impl<T: RegistryMerger + ?Sized> RegistryMerger for &T {
    fn merge(&self, script: &Path) -> ToggleResult<()> {
        (**self).merge(script)
    }
}
