//! Owner-centered message boxes
//!
//! [`DialogPresenter`] is the entry point. [`Positioner`] is the scoped hook it
//! keeps alive around each native call.

pub mod owner;
pub mod positioner;
pub mod presenter;

pub use owner::OwnerWindow;
pub use positioner::{HookPhase, Positioner};
pub use presenter::DialogPresenter;

use crate::platform::PlatformError;

/// Errors surfaced to callers of the presenter
#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    #[error("Owner window has no native handle")]
    InvalidOwner,
    #[error("Message box could not be shown: {0}")]
    Native(#[from] PlatformError),
}
