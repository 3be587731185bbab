//! Reads DWORD values under `HKEY_LOCAL_MACHINE`.
//!
//! Keys are opened read-only in the 64-bit view so a 32-bit build sees
//! the same Image File Execution Options that Windows consults.

use dpitoggle_core::{DwordReader, ToggleError, ToggleResult};
use windows::Win32::Foundation::{
    ERROR_FILE_NOT_FOUND, ERROR_MORE_DATA, ERROR_PATH_NOT_FOUND, WIN32_ERROR,
};
use windows::Win32::System::Registry::{
    HKEY, HKEY_LOCAL_MACHINE, KEY_READ, KEY_WOW64_64KEY, REG_DWORD, REG_VALUE_TYPE, RegCloseKey,
    RegOpenKeyExW, RegQueryValueExW,
};

use crate::wide::WideString;

/// [`DwordReader`] backed by the live registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct HklmReader;

impl DwordReader for HklmReader {
    fn get_dword(&self, key: &str, name: &str) -> ToggleResult<Option<u32>> {
        let to_error = |reason: String| ToggleError::RegistryRead {
            key: key.to_string(),
            name: name.to_string(),
            reason,
        };

        let Some(hkey) = open_key(key).map_err(to_error)? else {
            return Ok(None);
        };
        let result = query_dword(hkey, name);
        close_key(hkey);
        result.map_err(to_error)
    }
}

/// Opens `key` under HKLM for reading. A missing key is `Ok(None)`.
fn open_key(key: &str) -> Result<Option<HKEY>, String> {
    let wide_key = WideString::new(key);
    let mut hkey = HKEY::default();
    // SAFETY: RegOpenKeyExW is a standard Win32 registry API. The key name
    // outlives the call and the returned handle is closed by the caller.
    let status = unsafe {
        RegOpenKeyExW(
            HKEY_LOCAL_MACHINE,
            wide_key.as_pcwstr(),
            None,
            KEY_READ | KEY_WOW64_64KEY,
            &mut hkey,
        )
    };
    if is_missing(status) {
        return Ok(None);
    }
    if status.is_err() {
        return Err(describe(status));
    }
    Ok(Some(hkey))
}

/// Reads a REG_DWORD value. A missing value is `Ok(None)`.
fn query_dword(hkey: HKEY, name: &str) -> Result<Option<u32>, String> {
    let wide_name = WideString::new(name);
    let mut kind = REG_VALUE_TYPE::default();
    let mut data: u32 = 0;
    let mut size = std::mem::size_of::<u32>() as u32;
    // SAFETY: `data` is a u32 and `size` tells the API it may write at most
    // four bytes into it.
    let status = unsafe {
        RegQueryValueExW(
            hkey,
            wide_name.as_pcwstr(),
            None,
            Some(&mut kind),
            Some((&mut data as *mut u32).cast::<u8>()),
            Some(&mut size),
        )
    };
    if is_missing(status) {
        return Ok(None);
    }
    if status == ERROR_MORE_DATA {
        return Err(format!("value is not a DWORD (type {})", kind.0));
    }
    if status.is_err() {
        return Err(describe(status));
    }
    if kind != REG_DWORD || size != 4 {
        return Err(format!("value is not a DWORD (type {})", kind.0));
    }
    Ok(Some(data))
}

fn is_missing(status: WIN32_ERROR) -> bool {
    status == ERROR_FILE_NOT_FOUND || status == ERROR_PATH_NOT_FOUND
}

fn describe(status: WIN32_ERROR) -> String {
    status.to_hresult().message()
}

fn close_key(key: HKEY) {
    // SAFETY: RegCloseKey is safe to call on any valid HKEY.
    let _ = unsafe { RegCloseKey(key) };
}
