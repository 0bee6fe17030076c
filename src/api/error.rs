use thiserror::Error;

/// Generic user-facing message when the backend did not supply one.
pub const FALLBACK_MESSAGE: &str = "Service error, please try again later";

/// Message shown once per session-expiry episode.
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired, please log in again";

#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level 401: the session expired or the token is invalid.
    #[error("Unauthorized - session expired or token invalid")]
    Unauthorized,

    /// HTTP completed with a non-2xx status other than 401.
    #[error("Request failed with status {status}")]
    Transport {
        status: reqwest::StatusCode,
        message: Option<String>,
    },

    /// HTTP succeeded but the envelope's status discriminator signals
    /// failure. Carries the full envelope so callers can inspect it.
    #[error("{}", message.as_deref().unwrap_or(FALLBACK_MESSAGE))]
    Business {
        status: i64,
        message: Option<String>,
        data: serde_json::Value,
    },

    /// The request never completed: connect failure, timeout.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not a parseable response envelope.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Message to surface to the user for this failure.
    pub fn user_message(&self) -> &str {
        match self {
            ApiError::Unauthorized => SESSION_EXPIRED_MESSAGE,
            ApiError::Transport { message, .. } | ApiError::Business { message, .. } => {
                message.as_deref().unwrap_or(FALLBACK_MESSAGE)
            }
            ApiError::Network(_) | ApiError::InvalidResponse(_) => FALLBACK_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_error_display_uses_message() {
        let err = ApiError::Business {
            status: 1,
            message: Some("title already exists".to_string()),
            data: serde_json::Value::Null,
        };
        assert_eq!(err.to_string(), "title already exists");
        assert_eq!(err.user_message(), "title already exists");
    }

    #[test]
    fn test_business_error_falls_back_without_message() {
        let err = ApiError::Business {
            status: 1,
            message: None,
            data: serde_json::Value::Null,
        };
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    }
}
