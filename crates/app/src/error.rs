//! Application error types.

use riego_domain::error::DomainError;

/// Failure talking to the irrigation backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The request never produced a response (offline, DNS, CORS, …).
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("backend answered HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// A user-triggered operation, used to phrase notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TogglePump,
    SaveConfig,
    DownloadHistory,
    ClearHistory,
}

impl Action {
    /// Message shown to the operator when the action fails.
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::TogglePump => "Could not control the pump",
            Self::SaveConfig => "Could not save the configuration",
            Self::DownloadHistory => "Could not download the data",
            Self::ClearHistory => "Could not clear the history",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TogglePump => f.write_str("pump toggle"),
            Self::SaveConfig => f.write_str("config save"),
            Self::DownloadHistory => f.write_str("history download"),
            Self::ClearHistory => f.write_str("history clear"),
        }
    }
}

/// Failure of a user-triggered action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The backend call behind the action failed.
    #[error("{action} failed")]
    Backend {
        action: Action,
        #[source]
        source: BackendError,
    },

    /// The input was rejected before any request was made.
    #[error("invalid configuration")]
    Invalid(#[from] DomainError),
}

impl ActionError {
    pub(crate) fn backend(action: Action) -> impl FnOnce(BackendError) -> Self {
        move |source| Self::Backend { action, source }
    }

    /// Text for the error notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend { action, .. } => action.failure_message().to_string(),
            Self::Invalid(err) => format!("Invalid configuration: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn should_display_status_error() {
        let err = BackendError::Status {
            status: 503,
            message: "busy".to_string(),
        };
        assert_eq!(err.to_string(), "backend answered HTTP 503: busy");
    }

    #[test]
    fn should_keep_backend_error_as_source() {
        let err = ActionError::backend(Action::TogglePump)(BackendError::Network(
            "offline".to_string(),
        ));
        assert_eq!(err.to_string(), "pump toggle failed");
        assert_eq!(
            err.source().map(ToString::to_string),
            Some("request failed: offline".to_string())
        );
        assert_eq!(err.user_message(), "Could not control the pump");
    }

    #[test]
    fn should_describe_invalid_config_for_the_operator() {
        let err: ActionError = DomainError::ZeroInterval.into();
        assert_eq!(
            err.user_message(),
            "Invalid configuration: irrigation interval must be greater than zero"
        );
    }
}
