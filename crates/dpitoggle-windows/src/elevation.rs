use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::Security::{GetTokenInformation, TOKEN_ELEVATION, TOKEN_QUERY, TokenElevation};
use windows::Win32::System::Threading::{
    GetCurrentProcess, OpenProcess, OpenProcessToken, PROCESS_QUERY_LIMITED_INFORMATION,
};

/// Whether this process runs elevated.
pub fn is_current_process_elevated() -> windows::core::Result<bool> {
    // SAFETY: GetCurrentProcess returns a pseudo-handle that needs no close.
    token_elevated(unsafe { GetCurrentProcess() })
}

/// Whether another process runs elevated.
///
/// A non-elevated caller usually cannot open the token of an elevated
/// process; that surfaces as `E_ACCESSDENIED`.
pub fn is_process_elevated(pid: u32) -> windows::core::Result<bool> {
    // SAFETY: the handle is closed below.
    let process = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) }?;
    let result = token_elevated(process);
    // SAFETY: we own `process`.
    unsafe {
        let _ = CloseHandle(process);
    }
    result
}

fn token_elevated(process: HANDLE) -> windows::core::Result<bool> {
    let mut token = HANDLE::default();
    // SAFETY: `token` receives a handle that is closed below.
    unsafe { OpenProcessToken(process, TOKEN_QUERY, &mut token) }?;

    let mut elevation = TOKEN_ELEVATION::default();
    let mut returned = 0u32;
    // SAFETY: the buffer is a TOKEN_ELEVATION and its size is passed along.
    let result = unsafe {
        GetTokenInformation(
            token,
            TokenElevation,
            Some((&mut elevation as *mut TOKEN_ELEVATION).cast()),
            std::mem::size_of::<TOKEN_ELEVATION>() as u32,
            &mut returned,
        )
    };
    // SAFETY: we own `token`.
    unsafe {
        let _ = CloseHandle(token);
    }

    result?;
    Ok(elevation.TokenIsElevated != 0)
}
