//! centered-msgbox: native message boxes centered over their owner window
//!
//! Layers:
//! - `domain`: pure geometry, placement math and the message box request model
//! - `platform`: the window manager abstraction and its Win32 implementation
//! - `dialog`: owner resolution and the scoped centering hook
//! - `config`: presenter settings

pub mod config;
pub mod dialog;
pub mod domain;
pub mod platform;

pub use config::PresenterConfig;
pub use dialog::{DialogError, DialogPresenter, OwnerWindow, Positioner};
pub use domain::core::{Point, Rect, WindowHandle};
pub use domain::message_box::{
    ButtonSet, MessageBoxOptions, MessageBoxRequest, MessageIcon, UserChoice,
};
pub use platform::WindowSystem;
#[cfg(windows)]
pub use platform::Win32WindowSystem;
