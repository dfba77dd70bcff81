//! Owner windows that may not have a native handle yet

use crate::domain::core::WindowHandle;

/// A window that can own a message box
///
/// Toolkits often create the native window lazily. The presenter asks for the
/// handle first and only forces realization when there is none yet.
pub trait OwnerWindow {
    /// Native handle, or `None` if the window has not been realized
    fn native_handle(&self) -> Option<WindowHandle>;

    /// Creates the native window without showing it and returns its handle
    fn ensure_handle(&self) -> Option<WindowHandle>;

    /// Handle to use for the dialog, realizing the window if needed
    fn resolve_handle(&self) -> Option<WindowHandle> {
        self.native_handle()
            .or_else(|| self.ensure_handle())
            .filter(|handle| !handle.is_null())
    }
}

impl OwnerWindow for WindowHandle {
    fn native_handle(&self) -> Option<WindowHandle> {
        (!self.is_null()).then_some(*self)
    }

    fn ensure_handle(&self) -> Option<WindowHandle> {
        self.native_handle()
    }
}
