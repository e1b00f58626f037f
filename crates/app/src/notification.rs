//! Transient notifications shown to the operator.

use crate::error::{Action, ActionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS modifier for the toast.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
        }
    }
}

/// A message to show in a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            text: text.into(),
        }
    }

    /// Confirmation after the pump was switched.
    #[must_use]
    pub fn pump_switched(on: bool) -> Self {
        if on {
            Self::success("Pump turned on")
        } else {
            Self::success("Pump turned off")
        }
    }

    /// Confirmation after a successful action other than the pump toggle.
    #[must_use]
    pub fn completed(action: Action) -> Self {
        match action {
            Action::TogglePump => Self::success("Pump updated"),
            Action::SaveConfig => Self::success("Configuration saved"),
            Action::DownloadHistory => Self::success("Data downloaded"),
            Action::ClearHistory => Self::success("History cleared"),
        }
    }
}

impl From<&ActionError> for Notification {
    fn from(err: &ActionError) -> Self {
        Self::error(err.user_message())
    }
}
