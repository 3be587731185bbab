use dpitoggle_core::MessageKind;
use windows::Win32::UI::WindowsAndMessaging::{
    MB_ICONERROR, MB_ICONINFORMATION, MB_OK, MB_SETFOREGROUND, MessageBoxW,
};

use crate::wide::WideString;

/// Title of every message box.
pub const TITLE: &str = "DPI awareness";

/// Shows a blocking message box with an icon matching `kind`.
pub fn show(kind: MessageKind, text: &str) {
    let icon = match kind {
        MessageKind::Info => MB_ICONINFORMATION,
        MessageKind::Error => MB_ICONERROR,
    };
    let wide_text = WideString::new(text);
    let wide_title = WideString::new(TITLE);
    // SAFETY: both strings are NUL-terminated and outlive the call.
    let _ = unsafe {
        MessageBoxW(
            None,
            wide_text.as_pcwstr(),
            wide_title.as_pcwstr(),
            MB_OK | icon | MB_SETFOREGROUND,
        )
    };
}
