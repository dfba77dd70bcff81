//! In-memory window system for tests
//!
//! Mirrors the Win32 behavior that matters to the dialog layer: hooks are
//! registered with their sink, removing a token twice is harmless, and a
//! notification reaches the most recently installed sink only.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::domain::core::{Point, Rect, WindowHandle};
use crate::domain::message_box::{MessageBoxRequest, UserChoice};
use crate::platform::{
    ActivationSink, HookEvent, HookToken, PlatformError, TopLevelWindow, WindowSystem,
};

/// Native message box call captured by the fake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownDialog {
    pub owner: Option<WindowHandle>,
    pub request: MessageBoxRequest,
    /// Number of hooks installed while the dialog was up
    pub hooks_installed: usize,
}

#[derive(Default)]
pub struct FakeWindowSystem {
    rects: RefCell<HashMap<WindowHandle, Rect>>,
    work_areas: RefCell<HashMap<WindowHandle, Rect>>,
    desktop_size: Cell<Option<(i32, i32)>>,
    windows: RefCell<Vec<TopLevelWindow>>,
    hooks: RefCell<Vec<(HookToken, Rc<dyn ActivationSink>)>>,
    next_token: Cell<isize>,
    refuse_hooks: Cell<bool>,
    fail_moves: Cell<bool>,
    pub installs: Cell<usize>,
    pub removals: RefCell<Vec<HookToken>>,
    pub moves: RefCell<Vec<(WindowHandle, Rect)>>,
    pub shown: RefCell<Vec<ShownDialog>>,
    /// Window activated while the next dialog is up
    dialog_window: Cell<Option<WindowHandle>>,
    dialog_result: Cell<Option<Result<UserChoice, PlatformError>>>,
}

impl FakeWindowSystem {
    pub fn new() -> Self {
        let system = Self::default();
        system.desktop_size.set(Some((1920, 1040)));
        system.next_token.set(1);
        system
    }

    pub fn set_window_rect(&self, window: WindowHandle, rect: Rect) {
        self.rects.borrow_mut().insert(window, rect);
    }

    pub fn set_monitor_work_area(&self, window: WindowHandle, area: Rect) {
        self.work_areas.borrow_mut().insert(window, area);
    }

    pub fn set_desktop_size(&self, size: Option<(i32, i32)>) {
        self.desktop_size.set(size);
    }

    pub fn add_window(&self, handle: WindowHandle, is_active: bool, is_visible: bool) {
        self.windows.borrow_mut().push(TopLevelWindow {
            handle,
            is_active,
            is_visible,
        });
    }

    pub fn refuse_hooks(&self) {
        self.refuse_hooks.set(true);
    }

    pub fn fail_moves(&self) {
        self.fail_moves.set(true);
    }

    /// Makes the next `show_message_box` activate `window` before returning
    pub fn activate_on_show(&self, window: WindowHandle) {
        self.dialog_window.set(Some(window));
    }

    pub fn set_dialog_result(&self, result: Result<UserChoice, PlatformError>) {
        self.dialog_result.set(Some(result));
    }

    pub fn installed_hooks(&self) -> usize {
        self.hooks.borrow().len()
    }

    /// Delivers a notification to the most recently installed hook
    pub fn fire(&self, event: HookEvent) {
        // The sink may remove itself while handling the event.
        let sink = self.hooks.borrow().last().map(|(_, sink)| Rc::clone(sink));
        if let Some(sink) = sink {
            sink.on_event(event);
        }
    }
}

impl WindowSystem for FakeWindowSystem {
    fn window_rect(&self, window: WindowHandle) -> Result<Rect, PlatformError> {
        self.rects
            .borrow()
            .get(&window)
            .copied()
            .ok_or(PlatformError::RectQueryFailed(window))
    }

    fn monitor_work_area(&self, window: WindowHandle) -> Result<Rect, PlatformError> {
        self.work_areas
            .borrow()
            .get(&window)
            .copied()
            .ok_or(PlatformError::MonitorLookupFailed(window))
    }

    fn desktop_work_area_size(&self) -> Result<(i32, i32), PlatformError> {
        self.desktop_size
            .get()
            .ok_or(PlatformError::WorkAreaQueryFailed)
    }

    fn move_window(
        &self,
        window: WindowHandle,
        origin: Point,
        width: i32,
        height: i32,
    ) -> Result<(), PlatformError> {
        if self.fail_moves.get() {
            return Err(PlatformError::MoveFailed(window));
        }
        let rect = Rect::from_origin_size(origin, width, height);
        self.moves.borrow_mut().push((window, rect));
        self.rects.borrow_mut().insert(window, rect);
        Ok(())
    }

    fn is_window(&self, window: WindowHandle) -> bool {
        self.rects.borrow().contains_key(&window)
            || self.windows.borrow().iter().any(|w| w.handle == window)
    }

    fn is_visible(&self, window: WindowHandle) -> bool {
        self.windows
            .borrow()
            .iter()
            .any(|w| w.handle == window && w.is_visible)
    }

    fn application_windows(&self) -> Vec<TopLevelWindow> {
        self.windows.borrow().clone()
    }

    fn install_activation_hook(&self, sink: Rc<dyn ActivationSink>) -> Option<HookToken> {
        if self.refuse_hooks.get() {
            return None;
        }
        let token = HookToken(self.next_token.get());
        self.next_token.set(token.0 + 1);
        self.hooks.borrow_mut().push((token, sink));
        self.installs.set(self.installs.get() + 1);
        Some(token)
    }

    fn remove_activation_hook(&self, token: HookToken) {
        let removed = {
            let mut hooks = self.hooks.borrow_mut();
            let before = hooks.len();
            hooks.retain(|(installed, _)| *installed != token);
            before != hooks.len()
        };
        if removed {
            self.removals.borrow_mut().push(token);
        }
    }

    fn show_message_box(
        &self,
        owner: Option<WindowHandle>,
        request: &MessageBoxRequest,
    ) -> Result<UserChoice, PlatformError> {
        self.shown.borrow_mut().push(ShownDialog {
            owner,
            request: request.clone(),
            hooks_installed: self.installed_hooks(),
        });
        if let Some(dialog) = self.dialog_window.take() {
            self.fire(HookEvent::Other(3));
            self.fire(HookEvent::Activating(dialog));
        }
        self.dialog_result.take().unwrap_or(Ok(UserChoice::Ok))
    }
}
