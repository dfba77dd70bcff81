//! Monitor work area queries
//!
//! This module is responsible for:
//! - Finding the monitor nearest to a window
//! - Reading that monitor's work area (excluding taskbar)
//! - Reading the desktop work area used as fallback
//!
//! CRITICAL: secondary monitors can have negative coordinates in the virtual
//! screen; rectangles are passed through unchanged.

use crate::domain::core::Rect;
use crate::platform::PlatformError;
use crate::platform::windows::{handle_from_hwnd, win32_rect_to_rect};
use windows::Win32::Foundation::{FALSE, HWND, RECT};
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, MONITOR_DEFAULTTONEAREST, MONITORINFO, MonitorFromWindow,
};
use windows::Win32::UI::WindowsAndMessaging::{
    SPI_GETWORKAREA, SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS, SystemParametersInfoW,
};

/// Work area of the monitor nearest to `hwnd`
///
/// # Arguments
/// * `hwnd` - Window whose monitor is looked up; off-screen windows map to the nearest monitor
///
/// # Returns
/// `MonitorLookupFailed` if the monitor information cannot be read
pub fn work_area_for_window(hwnd: HWND) -> Result<Rect, PlatformError> {
    unsafe {
        let hmonitor = MonitorFromWindow(hwnd, MONITOR_DEFAULTTONEAREST);
        if hmonitor.is_invalid() {
            return Err(PlatformError::MonitorLookupFailed(handle_from_hwnd(hwnd)));
        }

        let mut monitor_info = MONITORINFO {
            cbSize: std::mem::size_of::<MONITORINFO>() as u32,
            ..Default::default()
        };
        if GetMonitorInfoW(hmonitor, &mut monitor_info) == FALSE {
            return Err(PlatformError::MonitorLookupFailed(handle_from_hwnd(hwnd)));
        }

        Ok(win32_rect_to_rect(&monitor_info.rcWork))
    }
}

/// Size of the desktop work area reported by the system
pub fn desktop_work_area_size() -> Result<(i32, i32), PlatformError> {
    let mut work_area = RECT::default();

    unsafe {
        SystemParametersInfoW(
            SPI_GETWORKAREA,
            0,
            Some(&mut work_area as *mut _ as *mut _),
            SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
        )
        .map_err(|_| PlatformError::WorkAreaQueryFailed)?;
    }

    let area = win32_rect_to_rect(&work_area);
    Ok((area.width(), area.height()))
}
