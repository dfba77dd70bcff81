use crate::domain::core::WindowHandle;
use thiserror::Error;

/// Behavior switches for [`crate::dialog::DialogPresenter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenterConfig {
    /// Install the centering hook when an owner is known
    pub center_on_owner: bool,
    /// Look for an owner among the application's windows when none is given
    pub infer_owner: bool,
    /// Window consulted after the active window during owner inference
    pub main_window: Option<WindowHandle>,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            center_on_owner: true,
            infer_owner: true,
            main_window: None,
        }
    }
}

impl PresenterConfig {
    pub fn with_centering(mut self, enabled: bool) -> Self {
        self.center_on_owner = enabled;
        self
    }

    pub fn with_owner_inference(mut self, enabled: bool) -> Self {
        self.infer_owner = enabled;
        self
    }

    pub fn with_main_window(mut self, main_window: WindowHandle) -> Self {
        self.main_window = Some(main_window);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.main_window {
            Some(handle) if handle.is_null() => Err(ConfigError::NullMainWindow),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Main window handle must not be null")]
    NullMainWindow,
}
