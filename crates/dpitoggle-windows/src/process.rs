use std::path::PathBuf;
use std::time::{Duration, Instant};

use windows::Win32::Foundation::{CloseHandle, HWND, LPARAM, WAIT_OBJECT_0, WPARAM};
use windows::Win32::System::Diagnostics::ToolHelp::{
    CreateToolhelp32Snapshot, PROCESSENTRY32W, Process32FirstW, Process32NextW,
    TH32CS_SNAPPROCESS,
};
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION, PROCESS_SYNCHRONIZE,
    QueryFullProcessImageNameW, WaitForSingleObject,
};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetWindowThreadProcessId, IsWindowVisible, PostMessageW, WM_CLOSE,
};
use windows::core::{BOOL, PWSTR};

use crate::wide::from_wide;

/// Returns the PIDs of all running processes whose image name matches
/// `image` (case-insensitive, e.g. `devenv.exe`).
pub fn find_processes(image: &str) -> Result<Vec<u32>, String> {
    // SAFETY: a process snapshot has no preconditions; the handle is
    // closed below.
    let snapshot = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) }
        .map_err(|e| format!("could not list processes: {}", e.message()))?;

    let mut entry = PROCESSENTRY32W {
        dwSize: std::mem::size_of::<PROCESSENTRY32W>() as u32,
        ..Default::default()
    };
    let mut pids = Vec::new();

    // SAFETY: `entry.dwSize` is initialised as the API requires.
    let mut more = unsafe { Process32FirstW(snapshot, &mut entry) }.is_ok();
    while more {
        if from_wide(&entry.szExeFile).eq_ignore_ascii_case(image) {
            pids.push(entry.th32ProcessID);
        }
        // SAFETY: same snapshot and entry as above.
        more = unsafe { Process32NextW(snapshot, &mut entry) }.is_ok();
    }

    // SAFETY: the snapshot handle is owned here and no longer used.
    unsafe {
        let _ = CloseHandle(snapshot);
    }
    Ok(pids)
}

/// Returns the full executable path of a running process.
pub fn image_path(pid: u32) -> Option<PathBuf> {
    // SAFETY: PROCESS_QUERY_LIMITED_INFORMATION is enough for
    // QueryFullProcessImageNameW, even across integrity levels.
    let handle = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) }.ok()?;

    let mut buf = [0u16; 1024];
    let mut len = buf.len() as u32;
    // SAFETY: `len` holds the buffer capacity in characters.
    let result = unsafe {
        QueryFullProcessImageNameW(handle, PROCESS_NAME_WIN32, PWSTR(buf.as_mut_ptr()), &mut len)
    };
    // SAFETY: we opened the handle above.
    unsafe {
        let _ = CloseHandle(handle);
    }

    result.ok()?;
    Some(PathBuf::from(String::from_utf16_lossy(&buf[..len as usize])))
}

struct CloseRequest<'a> {
    pids: &'a [u32],
    windows: Vec<HWND>,
}

/// Posts `WM_CLOSE` to every visible top-level window owned by `pids`.
///
/// Applications get the chance to prompt for unsaved work. Returns how
/// many windows were asked to close.
pub fn close_windows(pids: &[u32]) -> usize {
    let mut request = CloseRequest {
        pids,
        windows: Vec::new(),
    };

    // SAFETY: EnumWindows runs synchronously, so `request` outlives every
    // callback that receives a pointer to it.
    unsafe {
        let _ = EnumWindows(
            Some(collect_window),
            LPARAM(&mut request as *mut CloseRequest as isize),
        );
    }

    request
        .windows
        .iter()
        .filter(|&&hwnd| {
            // SAFETY: posting a message to a window handle has no memory
            // safety requirements; a stale handle just fails.
            unsafe { PostMessageW(Some(hwnd), WM_CLOSE, WPARAM(0), LPARAM(0)) }.is_ok()
        })
        .count()
}

unsafe extern "system" fn collect_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam points at the CloseRequest owned by close_windows().
    let request = unsafe { &mut *(lparam.0 as *mut CloseRequest) };

    let mut pid: u32 = 0;
    // SAFETY: simple query functions reading window state.
    let visible = unsafe {
        let _ = GetWindowThreadProcessId(hwnd, Some(&mut pid));
        IsWindowVisible(hwnd).as_bool()
    };
    if visible && request.pids.contains(&pid) {
        request.windows.push(hwnd);
    }

    BOOL(1)
}

/// Waits until every process in `pids` has exited or `timeout` elapses.
///
/// Returns `true` when all of them are gone. A process that can no
/// longer be opened counts as exited.
pub fn wait_for_exit(pids: &[u32], timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;

    pids.iter().all(|&pid| {
        // SAFETY: SYNCHRONIZE access is all WaitForSingleObject needs.
        let Ok(handle) = (unsafe { OpenProcess(PROCESS_SYNCHRONIZE, false, pid) }) else {
            return true;
        };
        let remaining = deadline.saturating_duration_since(Instant::now());
        let millis = u32::try_from(remaining.as_millis()).unwrap_or(u32::MAX);
        // SAFETY: the handle is valid until closed below.
        let exited = unsafe { WaitForSingleObject(handle, millis) } == WAIT_OBJECT_0;
        // SAFETY: we opened the handle above.
        unsafe {
            let _ = CloseHandle(handle);
        }
        exited
    })
}
