//! Configuration module for centered-msgbox
//!
//! Holds the typed settings that control how the presenter picks an owner and
//! whether it centers dialogs over it.

pub mod presenter;

pub use presenter::{ConfigError, PresenterConfig};
