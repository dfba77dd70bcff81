//! Message box presentation centered over an owner window
//!
//! The presenter resolves the owner, keeps a [`Positioner`] alive for the
//! duration of the blocking native call and returns the user's choice
//! unchanged.

use std::rc::Rc;

use crate::config::PresenterConfig;
use crate::dialog::DialogError;
use crate::dialog::owner::OwnerWindow;
use crate::dialog::positioner::Positioner;
use crate::domain::core::WindowHandle;
use crate::domain::message_box::{MessageBoxRequest, UserChoice};
use crate::platform::WindowSystem;

/// Shows native message boxes centered over their owner window
pub struct DialogPresenter<S: WindowSystem + 'static> {
    system: Rc<S>,
    config: PresenterConfig,
}

impl<S: WindowSystem + 'static> DialogPresenter<S> {
    pub fn new(system: S) -> Self {
        Self::with_config(system, PresenterConfig::default())
    }

    pub fn with_config(system: S, config: PresenterConfig) -> Self {
        Self {
            system: Rc::new(system),
            config,
        }
    }

    pub fn config(&self) -> &PresenterConfig {
        &self.config
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    /// Shows a message box, inferring the owner from the application's windows
    pub fn show(&self, request: &MessageBoxRequest) -> Result<UserChoice, DialogError> {
        self.show_core(None, request)
    }

    /// Shows a message box owned by `owner`
    ///
    /// Fails with [`DialogError::InvalidOwner`] before anything is shown if the
    /// owner has no native handle or the handle no longer names a window.
    ///
    /// # Arguments
    /// * `owner` - Window the dialog is centered over and modal to
    /// * `request` - Text, caption, buttons and options of the dialog
    ///
    /// # Returns
    /// The button the user dismissed the dialog with
    pub fn show_owned(
        &self,
        owner: &dyn OwnerWindow,
        request: &MessageBoxRequest,
    ) -> Result<UserChoice, DialogError> {
        let handle = owner
            .resolve_handle()
            .filter(|handle| self.system.is_window(*handle))
            .ok_or(DialogError::InvalidOwner)?;
        self.show_core(Some(handle), request)
    }

    fn show_core(
        &self,
        owner: Option<WindowHandle>,
        request: &MessageBoxRequest,
    ) -> Result<UserChoice, DialogError> {
        if request.options.bypasses_owner() {
            if let Some(owner) = owner {
                log::warn!(
                    "Options {:?} cannot be combined with an owner, ignoring {owner:?}",
                    request.options
                );
            }
            return Ok(self.system.show_message_box(None, request)?);
        }

        let owner = owner.or_else(|| self.infer_owner());
        log::debug!("Showing message box {:?} with owner {owner:?}", request.caption);

        let positioner = self
            .config
            .center_on_owner
            .then(|| Positioner::activate(&self.system, owner));
        let result = self.system.show_message_box(owner, request);
        drop(positioner);

        Ok(result?)
    }

    /// Picks the window a message box without explicit owner should belong to
    ///
    /// Order: the active visible window, the configured main window if
    /// visible, then the first visible window.
    pub fn infer_owner(&self) -> Option<WindowHandle> {
        if !self.config.infer_owner {
            return None;
        }

        let windows = self.system.application_windows();
        let owner = windows
            .iter()
            .find(|window| window.is_active && window.is_visible)
            .map(|window| window.handle)
            .or_else(|| {
                self.config
                    .main_window
                    .filter(|main| !main.is_null() && self.system.is_visible(*main))
            })
            .or_else(|| {
                windows
                    .iter()
                    .find(|window| window.is_visible)
                    .map(|window| window.handle)
            });

        if owner.is_none() {
            log::debug!("No visible application window to own the message box");
        }
        owner
    }
}
