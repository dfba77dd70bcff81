//! Message box request model
//!
//! Describes what the user sees (text, caption, buttons, icon, default
//! button, presentation options) and encodes it into the native style word.
//! The bit values are the window manager's `MB_*` constants, kept here so the
//! encoding can be tested on any platform.

use bitflags::bitflags;

/// Set of buttons shown by the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSet {
    #[default]
    Ok,
    OkCancel,
    AbortRetryIgnore,
    YesNoCancel,
    YesNo,
    RetryCancel,
    CancelTryContinue,
}

impl ButtonSet {
    /// Native style bits selecting this button set
    pub fn style_bits(self) -> u32 {
        match self {
            ButtonSet::Ok => 0x0,
            ButtonSet::OkCancel => 0x1,
            ButtonSet::AbortRetryIgnore => 0x2,
            ButtonSet::YesNoCancel => 0x3,
            ButtonSet::YesNo => 0x4,
            ButtonSet::RetryCancel => 0x5,
            ButtonSet::CancelTryContinue => 0x6,
        }
    }

    /// Buttons in the order the dialog lays them out
    pub fn choices(self) -> &'static [UserChoice] {
        match self {
            ButtonSet::Ok => &[UserChoice::Ok],
            ButtonSet::OkCancel => &[UserChoice::Ok, UserChoice::Cancel],
            ButtonSet::AbortRetryIgnore => {
                &[UserChoice::Abort, UserChoice::Retry, UserChoice::Ignore]
            }
            ButtonSet::YesNoCancel => &[UserChoice::Yes, UserChoice::No, UserChoice::Cancel],
            ButtonSet::YesNo => &[UserChoice::Yes, UserChoice::No],
            ButtonSet::RetryCancel => &[UserChoice::Retry, UserChoice::Cancel],
            ButtonSet::CancelTryContinue => {
                &[UserChoice::Cancel, UserChoice::TryAgain, UserChoice::Continue]
            }
        }
    }

    /// Style bits marking `choice` as the default button
    ///
    /// A choice that is not part of this set leaves the first button as the
    /// default.
    pub fn default_button_bits(self, choice: UserChoice) -> u32 {
        const MB_DEFBUTTON_STEP: u32 = 0x100;

        self.choices()
            .iter()
            .position(|candidate| *candidate == choice)
            .map_or(0, |index| index as u32 * MB_DEFBUTTON_STEP)
    }
}

/// Icon shown next to the message text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageIcon {
    #[default]
    None,
    Error,
    Question,
    Warning,
    Information,
}

impl MessageIcon {
    pub fn style_bits(self) -> u32 {
        match self {
            MessageIcon::None => 0x00,
            MessageIcon::Error => 0x10,
            MessageIcon::Question => 0x20,
            MessageIcon::Warning => 0x30,
            MessageIcon::Information => 0x40,
        }
    }
}

/// Button the user dismissed the dialog with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserChoice {
    /// The dialog returned a code this crate does not know
    #[default]
    None,
    Ok,
    Cancel,
    Abort,
    Retry,
    Ignore,
    Yes,
    No,
    TryAgain,
    Continue,
}

impl UserChoice {
    /// Decodes the native dialog result (`ID*` values)
    pub fn from_native(code: i32) -> Self {
        match code {
            1 => UserChoice::Ok,
            2 => UserChoice::Cancel,
            3 => UserChoice::Abort,
            4 => UserChoice::Retry,
            5 => UserChoice::Ignore,
            6 => UserChoice::Yes,
            7 => UserChoice::No,
            10 => UserChoice::TryAgain,
            11 => UserChoice::Continue,
            _ => UserChoice::None,
        }
    }
}

bitflags! {
    /// Presentation options for the dialog
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MessageBoxOptions: u32 {
        /// Show on the default desktop even if another one is active
        const DEFAULT_DESKTOP_ONLY = 0x0002_0000;
        /// Right-align the message text
        const RIGHT_ALIGN = 0x0008_0000;
        /// Right-to-left reading order
        const RTL_READING = 0x0010_0000;
        /// Show on the active desktop from a service without a logged-on user
        const SERVICE_NOTIFICATION = 0x0020_0000;
    }
}

impl MessageBoxOptions {
    /// Options under which the dialog cannot have an owner window
    pub const OWNERLESS: MessageBoxOptions = MessageBoxOptions::DEFAULT_DESKTOP_ONLY
        .union(MessageBoxOptions::SERVICE_NOTIFICATION);

    /// Returns true if owner resolution and centering must be skipped
    pub fn bypasses_owner(self) -> bool {
        self.intersects(Self::OWNERLESS)
    }
}

/// Everything the native message box needs to know, apart from the owner
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageBoxRequest {
    pub text: String,
    pub caption: String,
    pub buttons: ButtonSet,
    pub icon: MessageIcon,
    pub default_choice: UserChoice,
    pub options: MessageBoxOptions,
}

impl MessageBoxRequest {
    /// Creates an OK-only request with no caption and no icon
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            default_choice: UserChoice::Ok,
            ..Default::default()
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn buttons(mut self, buttons: ButtonSet) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn icon(mut self, icon: MessageIcon) -> Self {
        self.icon = icon;
        self
    }

    pub fn default_choice(mut self, choice: UserChoice) -> Self {
        self.default_choice = choice;
        self
    }

    pub fn options(mut self, options: MessageBoxOptions) -> Self {
        self.options = options;
        self
    }

    /// Full native style word for this request
    pub fn style_bits(&self) -> u32 {
        self.buttons.style_bits()
            | self.icon.style_bits()
            | self.buttons.default_button_bits(self.default_choice)
            | self.options.bits()
    }
}
