//! Window queries and positioning
//!
//! This module handles:
//! - Reading a window's screen rectangle
//! - Moving a not-yet-shown dialog without repainting it
//! - Listing the top-level windows owned by this process

use crate::domain::core::{Point, Rect, WindowHandle};
use crate::platform::windows::{handle_from_hwnd, win32_rect_to_rect};
use crate::platform::{PlatformError, TopLevelWindow};
use windows::Win32::Foundation::{BOOL, FALSE, HWND, LPARAM, RECT, TRUE};
use windows::Win32::System::Threading::GetCurrentProcessId;
use windows::Win32::UI::Input::KeyboardAndMouse::GetActiveWindow;
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetForegroundWindow, GetWindowRect, GetWindowThreadProcessId, IsWindow,
    IsWindowVisible, MoveWindow,
};

/// Outer rectangle of `hwnd` in screen coordinates
pub fn window_rect(hwnd: HWND) -> Result<Rect, PlatformError> {
    unsafe {
        if !is_window(hwnd) {
            return Err(PlatformError::InvalidHandle(handle_from_hwnd(hwnd)));
        }

        let mut rect = RECT::default();
        if GetWindowRect(hwnd, &mut rect).is_err() {
            return Err(PlatformError::RectQueryFailed(handle_from_hwnd(hwnd)));
        }

        Ok(win32_rect_to_rect(&rect))
    }
}

/// Moves `hwnd` to `origin`, keeping its size
///
/// Repaint is suppressed: the dialog has not been shown yet when this runs.
///
/// # Arguments
/// * `hwnd` - Window to move
/// * `origin` - New top-left corner in screen coordinates
/// * `width` - Current width of the window, passed through unchanged
/// * `height` - Current height of the window, passed through unchanged
///
/// # Returns
/// `MoveFailed` if the window manager rejected the move
pub fn move_window(hwnd: HWND, origin: Point, width: i32, height: i32) -> Result<(), PlatformError> {
    unsafe {
        MoveWindow(hwnd, origin.x, origin.y, width, height, FALSE)
            .map_err(|_| PlatformError::MoveFailed(handle_from_hwnd(hwnd)))
    }
}

pub fn is_window(hwnd: HWND) -> bool {
    unsafe { IsWindow(hwnd).as_bool() }
}

pub fn is_visible(hwnd: HWND) -> bool {
    unsafe { IsWindowVisible(hwnd).as_bool() }
}

/// Window the user is currently working in, from any process
///
/// # Returns
/// `None` while no window has the foreground, e.g. during activation changes
pub fn foreground_window() -> Option<WindowHandle> {
    let hwnd = unsafe { GetForegroundWindow() };
    Some(handle_from_hwnd(hwnd)).filter(|handle| !handle.is_null())
}

/// Context for window enumeration callback
struct EnumContext {
    process_id: u32,
    active: HWND,
    windows: Vec<TopLevelWindow>,
}

unsafe extern "system" fn enum_window_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
    unsafe {
        let context = &mut *(lparam.0 as *mut EnumContext);

        let mut process_id = 0u32;
        GetWindowThreadProcessId(hwnd, Some(&mut process_id));
        if process_id != context.process_id {
            return TRUE;
        }

        context.windows.push(TopLevelWindow {
            handle: handle_from_hwnd(hwnd),
            is_active: hwnd == context.active,
            is_visible: IsWindowVisible(hwnd).as_bool(),
        });

        TRUE
    }
}

/// Top-level windows of the current process in z-order
pub fn process_windows() -> Vec<TopLevelWindow> {
    let mut context = unsafe {
        EnumContext {
            process_id: GetCurrentProcessId(),
            active: GetActiveWindow(),
            windows: Vec::new(),
        }
    };

    unsafe {
        if let Err(err) = EnumWindows(Some(enum_window_proc), LPARAM(&mut context as *mut _ as isize)) {
            log::warn!("EnumWindows failed: {err}");
        }
    }

    context.windows
}
