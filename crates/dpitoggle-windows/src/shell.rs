use std::path::Path;

use windows::Win32::UI::Shell::{SHELLEXECUTEINFOW, ShellExecuteExW};
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;
use windows::core::PCWSTR;

use crate::wide::WideString;

/// Shell verb that asks for elevation through UAC.
pub const VERB_RUNAS: &str = "runas";
/// Shell verb that launches with the caller's token.
pub const VERB_OPEN: &str = "open";

/// Launches `file` through the shell and returns without waiting.
///
/// With [`VERB_RUNAS`] the user sees a UAC prompt; declining it is
/// reported as an error ("The operation was canceled by the user").
pub fn shell_execute(verb: &str, file: &Path, parameters: Option<&str>) -> Result<(), String> {
    let wide_verb = WideString::new(verb);
    let wide_file = WideString::new(&file.to_string_lossy());
    let wide_params = parameters.map(WideString::new);

    let mut info = SHELLEXECUTEINFOW {
        cbSize: std::mem::size_of::<SHELLEXECUTEINFOW>() as u32,
        lpVerb: wide_verb.as_pcwstr(),
        lpFile: wide_file.as_pcwstr(),
        lpParameters: wide_params
            .as_ref()
            .map_or(PCWSTR::null(), WideString::as_pcwstr),
        nShow: SW_SHOWNORMAL.0,
        ..Default::default()
    };

    // SAFETY: every string pointer in `info` borrows a WideString that
    // lives until the end of this function.
    unsafe { ShellExecuteExW(&mut info) }.map_err(|e| e.message())
}
