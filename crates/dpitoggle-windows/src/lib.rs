//! Win32 implementations of the dpitoggle capabilities.
#![cfg(windows)]

/// Message boxes.
pub mod dialog;

/// Token elevation queries.
pub mod elevation;

/// `Host` implementation for a standalone Windows application.
pub mod host;

/// Process discovery, graceful close and exit waits.
pub mod process;

/// Elevated `regedit.exe` merges.
pub mod regedit;

/// HKLM DWORD reads.
pub mod registry;

/// `ShellExecuteExW` wrapper.
pub mod shell;

mod wide;

pub use host::WindowsHost;
pub use regedit::RegeditMerger;
pub use registry::HklmReader;
