//! Win32 implementation of [`WindowSystem`]
//!
//! Wires the hook, monitor and window helpers together and owns the call into
//! the native message box.

use std::rc::Rc;

use crate::domain::core::{Point, Rect, WindowHandle};
use crate::domain::message_box::{MessageBoxRequest, UserChoice};
use crate::platform::{
    ActivationSink, HookToken, PlatformError, TopLevelWindow, WindowSystem, hook, monitors, window,
};
use windows::Win32::Foundation::{GetLastError, HWND, RECT};
use windows::Win32::UI::WindowsAndMessaging::{MESSAGEBOX_STYLE, MessageBoxW};
use windows::core::PCWSTR;

/// Window system backed by user32 on the calling thread
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32WindowSystem;

impl Win32WindowSystem {
    pub fn new() -> Self {
        Self
    }

    /// Foreground window of the desktop, which may belong to another process
    pub fn foreground_window(&self) -> Option<WindowHandle> {
        window::foreground_window()
    }
}

pub fn hwnd_from_handle(handle: WindowHandle) -> HWND {
    HWND(handle.0)
}

pub fn handle_from_hwnd(hwnd: HWND) -> WindowHandle {
    WindowHandle(hwnd.0)
}

/// Converts a Windows RECT to domain rectangle
pub fn win32_rect_to_rect(rect: &RECT) -> Rect {
    Rect::new(rect.left, rect.top, rect.right, rect.bottom)
}

fn to_wstring(input: &str) -> Vec<u16> {
    input.encode_utf16().chain(std::iter::once(0)).collect()
}

impl WindowSystem for Win32WindowSystem {
    fn window_rect(&self, window: WindowHandle) -> Result<Rect, PlatformError> {
        window::window_rect(hwnd_from_handle(window))
    }

    fn monitor_work_area(&self, window: WindowHandle) -> Result<Rect, PlatformError> {
        monitors::work_area_for_window(hwnd_from_handle(window))
    }

    fn desktop_work_area_size(&self) -> Result<(i32, i32), PlatformError> {
        monitors::desktop_work_area_size()
    }

    fn move_window(
        &self,
        window: WindowHandle,
        origin: Point,
        width: i32,
        height: i32,
    ) -> Result<(), PlatformError> {
        window::move_window(hwnd_from_handle(window), origin, width, height)
    }

    fn is_window(&self, window: WindowHandle) -> bool {
        window::is_window(hwnd_from_handle(window))
    }

    fn is_visible(&self, window: WindowHandle) -> bool {
        window::is_visible(hwnd_from_handle(window))
    }

    fn application_windows(&self) -> Vec<TopLevelWindow> {
        window::process_windows()
    }

    fn install_activation_hook(&self, sink: Rc<dyn ActivationSink>) -> Option<HookToken> {
        hook::install(sink)
    }

    fn remove_activation_hook(&self, token: HookToken) {
        hook::remove(token)
    }

    fn show_message_box(
        &self,
        owner: Option<WindowHandle>,
        request: &MessageBoxRequest,
    ) -> Result<UserChoice, PlatformError> {
        let text = to_wstring(&request.text);
        let caption = to_wstring(&request.caption);
        let owner = hwnd_from_handle(owner.unwrap_or(WindowHandle::NULL));

        let result = unsafe {
            MessageBoxW(
                owner,
                PCWSTR(text.as_ptr()),
                PCWSTR(caption.as_ptr()),
                MESSAGEBOX_STYLE(request.style_bits()),
            )
        };

        if result.0 == 0 {
            let code = unsafe { GetLastError() };
            return Err(PlatformError::DialogFailed { code: code.0 });
        }

        Ok(UserChoice::from_native(result.0))
    }
}
