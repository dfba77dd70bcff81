//! Platform abstraction over the window manager
//!
//! The dialog layer only talks to the window manager through [`WindowSystem`].
//! The Win32 implementation lives in the `cfg(windows)` submodules; tests use
//! an in-memory implementation.

use std::rc::Rc;

use crate::domain::core::{Point, Rect, WindowHandle};
use crate::domain::message_box::{MessageBoxRequest, UserChoice};

pub mod geometry;

#[cfg(windows)]
pub mod hook;
#[cfg(windows)]
pub mod monitors;
#[cfg(windows)]
pub mod window;
#[cfg(windows)]
pub mod windows;

#[cfg(test)]
pub(crate) mod fake;

#[cfg(windows)]
pub use self::windows::Win32WindowSystem;

/// Errors reported by window manager calls
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    #[error("Invalid window handle {0:?}")]
    InvalidHandle(WindowHandle),
    #[error("Failed to query rectangle of window {0:?}")]
    RectQueryFailed(WindowHandle),
    #[error("No monitor information for window {0:?}")]
    MonitorLookupFailed(WindowHandle),
    #[error("Failed to query the desktop work area")]
    WorkAreaQueryFailed,
    #[error("Failed to move window {0:?}")]
    MoveFailed(WindowHandle),
    #[error("Native message box failed with error code {code}")]
    DialogFailed { code: u32 },
}

/// Token standing for one installed activation hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookToken(pub isize);

/// Notification delivered to an installed activation hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    /// The given window is about to become active
    Activating(WindowHandle),
    /// Any other notification class, identified by its raw code
    Other(i32),
}

/// Callback object registered alongside an activation hook
///
/// The window system keeps the sink alive exactly as long as the native
/// registration exists and drops it when the hook is removed.
pub trait ActivationSink {
    fn on_event(&self, event: HookEvent);
}

/// Top-level window of the running application, as seen at query time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopLevelWindow {
    pub handle: WindowHandle,
    pub is_active: bool,
    pub is_visible: bool,
}

/// Window manager operations the dialog presenter depends on
///
/// Every call happens on the thread that shows the dialog.
pub trait WindowSystem {
    /// Outer rectangle of a window in screen coordinates
    fn window_rect(&self, window: WindowHandle) -> Result<Rect, PlatformError>;

    /// Work area of the monitor nearest to `window`
    fn monitor_work_area(&self, window: WindowHandle) -> Result<Rect, PlatformError>;

    /// Width and height of the desktop work area
    fn desktop_work_area_size(&self) -> Result<(i32, i32), PlatformError>;

    /// Moves a window without resizing it and without repainting it
    fn move_window(&self, window: WindowHandle, origin: Point, width: i32, height: i32)
    -> Result<(), PlatformError>;

    /// Returns true if `window` identifies an existing window
    fn is_window(&self, window: WindowHandle) -> bool;

    fn is_visible(&self, window: WindowHandle) -> bool;

    /// Top-level windows of the running application in z-order
    fn application_windows(&self) -> Vec<TopLevelWindow>;

    /// Installs a thread-scoped activation hook that forwards to `sink`
    ///
    /// Returns `None` if the window manager refused the hook.
    fn install_activation_hook(&self, sink: Rc<dyn ActivationSink>) -> Option<HookToken>;

    /// Removes a hook installed by [`WindowSystem::install_activation_hook`]
    ///
    /// Removing a token that is no longer installed does nothing.
    fn remove_activation_hook(&self, token: HookToken);

    /// Shows the native modal message box and blocks until it is dismissed
    fn show_message_box(
        &self,
        owner: Option<WindowHandle>,
        request: &MessageBoxRequest,
    ) -> Result<UserChoice, PlatformError>;
}
