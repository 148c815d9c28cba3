use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of a single request. These never leave the client: each
/// operation folds them into an [`crate::ApiResult::Failure`] message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request was superseded by a newer request of the same kind")]
    Canceled,
    #[error("unable to reach the server: {0}")]
    Network(#[from] reqwest::Error),
    #[error("request failed ({status})")]
    Http {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("failed to decode response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unexpected response shape: {0}")]
    InvalidFormat(&'static str),
}

impl ApiError {
    /// Message shown to callers for this error, given the operation's default.
    ///
    /// Server-supplied messages are only honored when `use_server_message` is
    /// set; read operations keep their fixed wording.
    pub fn user_message(&self, default: &str, use_server_message: bool) -> String {
        match self {
            Self::Canceled => CANCELED_MESSAGE.to_string(),
            Self::InvalidFormat(message) => (*message).to_string(),
            Self::Http {
                message: Some(message),
                ..
            } if use_server_message => message.clone(),
            Self::Network(_) | Self::Http { .. } | Self::Parse(_) => default.to_string(),
        }
    }
}

pub const CANCELED_MESSAGE: &str = "Request was canceled.";

#[cfg(test)]
mod tests {
    use super::{ApiError, CANCELED_MESSAGE};
    use reqwest::StatusCode;

    #[test]
    fn canceled_ignores_default() {
        assert_eq!(
            ApiError::Canceled.user_message("Failed to add user.", true),
            CANCELED_MESSAGE
        );
    }

    #[test]
    fn http_message_respects_flag() {
        let err = ApiError::Http {
            status: StatusCode::BAD_REQUEST,
            message: Some("Invalid email".to_string()),
        };
        assert_eq!(err.user_message("Failed to add user.", true), "Invalid email");
        assert_eq!(err.user_message("User not found.", false), "User not found.");
    }

    #[test]
    fn http_without_message_uses_default() {
        let err = ApiError::Http {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };
        assert_eq!(
            err.user_message("Failed to delete user.", true),
            "Failed to delete user."
        );
    }

    #[test]
    fn invalid_format_keeps_its_own_message() {
        let err = ApiError::InvalidFormat("Invalid response format: Expected an array.");
        assert_eq!(
            err.user_message("Failed to load users.", false),
            "Invalid response format: Expected an array."
        );
    }
}
