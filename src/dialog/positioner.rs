//! Owner-centering hook for one message box presentation
//!
//! A [`Positioner`] installs a thread-scoped activation hook right before the
//! native message box is shown. The first activation it observes is the
//! message box itself: the hook moves it over the owner and uninstalls itself.
//! Dropping the positioner removes the hook if it never fired.
//!
//! State machine: `Idle -> Installed -> Fired -> Removed`. `Idle` covers both
//! "no owner" and "the window manager refused the hook".

use std::cell::Cell;
use std::rc::Rc;

use crate::domain::core::WindowHandle;
use crate::domain::placement;
use crate::platform::geometry::work_area_for;
use crate::platform::{ActivationSink, HookEvent, HookToken, WindowSystem};

/// Lifecycle phase of the centering hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPhase {
    Idle,
    Installed,
    Fired,
    Removed,
}

/// Hook callback state shared between the guard and the window system
struct CenteringSink<S: WindowSystem> {
    system: Rc<S>,
    owner: WindowHandle,
    token: Cell<Option<HookToken>>,
    phase: Cell<HookPhase>,
}

impl<S: WindowSystem> CenteringSink<S> {
    /// Uninstalls the hook; a missing token means there is nothing to do
    fn remove(&self) {
        if let Some(token) = self.token.take() {
            self.system.remove_activation_hook(token);
            log::debug!("Centering hook {token:?} removed");
        }
        self.phase.set(HookPhase::Removed);
    }

    fn center_dialog(&self, dialog: WindowHandle) {
        if self.owner.is_null() || dialog.is_null() {
            return;
        }

        let (owner_rect, dialog_rect) = match (
            self.system.window_rect(self.owner),
            self.system.window_rect(dialog),
        ) {
            (Ok(owner_rect), Ok(dialog_rect)) => (owner_rect, dialog_rect),
            (Err(err), _) | (_, Err(err)) => {
                log::debug!("Skipping dialog centering: {err}");
                return;
            }
        };
        if owner_rect.is_degenerate() || dialog_rect.is_degenerate() {
            log::debug!("Skipping dialog centering: empty owner {owner_rect:?} or dialog {dialog_rect:?}");
            return;
        }

        let work_area = work_area_for(&*self.system, self.owner);
        let origin = if work_area.is_degenerate() {
            placement::centered_origin(&owner_rect, &dialog_rect)
        } else {
            placement::center(&owner_rect, &dialog_rect, &work_area)
        };

        log::debug!("Moving dialog {dialog:?} to ({}, {}) over owner {owner_rect:?}", origin.x, origin.y);
        if let Err(err) =
            self.system
                .move_window(dialog, origin, dialog_rect.width(), dialog_rect.height())
        {
            log::debug!("{err}");
        }
    }
}

impl<S: WindowSystem> ActivationSink for CenteringSink<S> {
    fn on_event(&self, event: HookEvent) {
        let HookEvent::Activating(dialog) = event else {
            return;
        };
        if self.phase.get() != HookPhase::Installed {
            return;
        }

        self.phase.set(HookPhase::Fired);
        self.center_dialog(dialog);
        self.remove();
    }
}

/// Scoped owner of the centering hook
///
/// The hook is removed exactly once: on the first activation, or when the
/// positioner is disposed or dropped, whichever comes first.
pub struct Positioner<S: WindowSystem + 'static> {
    sink: Rc<CenteringSink<S>>,
}

impl<S: WindowSystem + 'static> Positioner<S> {
    /// Installs the hook for `owner` on the calling thread
    ///
    /// Without an owner, or if the window manager refuses the hook, the
    /// positioner stays idle and does nothing.
    ///
    /// # Arguments
    /// * `system` - Window system the hook is installed into; shared with the hook callback
    /// * `owner` - Window to center over; `None` or a null handle leaves the positioner idle
    ///
    /// # Returns
    /// A guard that removes the hook when disposed or dropped
    pub fn activate(system: &Rc<S>, owner: Option<WindowHandle>) -> Self {
        let sink = Rc::new(CenteringSink {
            system: Rc::clone(system),
            owner: owner.unwrap_or(WindowHandle::NULL),
            token: Cell::new(None),
            phase: Cell::new(HookPhase::Idle),
        });

        if !sink.owner.is_null() {
            let callback: Rc<dyn ActivationSink> = sink.clone();
            match system.install_activation_hook(callback) {
                Some(token) => {
                    sink.token.set(Some(token));
                    sink.phase.set(HookPhase::Installed);
                    log::debug!("Centering hook {token:?} installed for owner {:?}", sink.owner);
                }
                None => log::warn!("Failed to install centering hook, dialog will not be centered"),
            }
        }

        Self { sink }
    }

    pub fn phase(&self) -> HookPhase {
        self.sink.phase.get()
    }

    pub fn is_installed(&self) -> bool {
        self.phase() == HookPhase::Installed
    }

    /// Removes the hook if it is still installed; safe to call repeatedly
    pub fn dispose(&self) {
        if self.sink.phase.get() == HookPhase::Idle && self.sink.token.get().is_none() {
            return;
        }
        self.sink.remove();
    }
}

impl<S: WindowSystem + 'static> Drop for Positioner<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
