//! Window discovery by title keyword.

use anyhow::{anyhow, Result};
use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;

use windows::Win32::Foundation::{BOOL, HWND, LPARAM, RECT, TRUE};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetWindowRect, GetWindowTextLengthW, GetWindowTextW, IsWindowVisible,
};

use super::{first_matching_window, WindowInfo};
use crate::frame::Region;

/// Finds the first visible top-level window whose title contains
/// `keyword` as a case-sensitive substring, and returns its title and
/// screen rectangle.
///
/// Enumeration order is whatever `EnumWindows` yields; when several
/// windows match, the first enumerated one wins.
pub fn find_window_by_title(keyword: &str) -> Result<WindowInfo> {
    let candidates = visible_windows()?;
    crate::log(&format!(
        "Enumerated {} visible titled windows",
        candidates.len()
    ));

    first_matching_window(candidates, keyword)
        .ok_or_else(|| anyhow!("No visible window title contains \"{}\"", keyword))
}

/// Enumerates all visible top-level windows that carry a title, as
/// (title, screen rectangle) pairs.
fn visible_windows() -> Result<Vec<WindowInfo>> {
    unsafe extern "system" fn enum_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
        unsafe {
            let windows = &mut *(lparam.0 as *mut Vec<WindowInfo>);

            // Skip invisible windows
            if !IsWindowVisible(hwnd).as_bool() {
                return TRUE;
            }

            // Skip windows without title (usually not main windows)
            let title_len = GetWindowTextLengthW(hwnd);
            if title_len <= 0 {
                return TRUE;
            }
            let mut title_buf: Vec<u16> = vec![0; (title_len + 1) as usize];
            GetWindowTextW(hwnd, &mut title_buf);
            let title = OsString::from_wide(&title_buf[..title_len as usize])
                .to_string_lossy()
                .to_string();
            if title.is_empty() {
                return TRUE;
            }

            let mut rect = RECT::default();
            if GetWindowRect(hwnd, &mut rect).is_err() {
                return TRUE;
            }

            windows.push(WindowInfo {
                title,
                rect: Region {
                    left: rect.left,
                    top: rect.top,
                    width: (rect.right - rect.left).max(0) as u32,
                    height: (rect.bottom - rect.top).max(0) as u32,
                },
            });

            TRUE
        }
    }

    let mut windows: Vec<WindowInfo> = Vec::new();
    unsafe {
        EnumWindows(
            Some(enum_callback),
            LPARAM(&mut windows as *mut _ as isize),
        )?;
    }

    Ok(windows)
}
