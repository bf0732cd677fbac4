//! Error types for reply resolution.
//!
//! None of these reach the user: resolvers log them and substitute the
//! fallback reply.

use stylux_core::error::StyluxError;

/// Errors from the chat engine.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("endpoint returned status {0}")]
    Status(u16),
    #[error("malformed reply: {0}")]
    MalformedReply(String),
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ChatError::MalformedReply(err.to_string())
        } else if let Some(status) = err.status() {
            ChatError::Status(status.as_u16())
        } else {
            ChatError::Transport(err.to_string())
        }
    }
}

impl From<ChatError> for StyluxError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::Config(msg) => StyluxError::Config(msg),
            other => StyluxError::Server(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        assert_eq!(
            ChatError::Transport("connection refused".to_string()).to_string(),
            "request failed: connection refused"
        );
        assert_eq!(
            ChatError::Status(502).to_string(),
            "endpoint returned status 502"
        );
        assert_eq!(
            ChatError::MalformedReply("missing field `reply`".to_string()).to_string(),
            "malformed reply: missing field `reply`"
        );
        assert_eq!(
            ChatError::Config("bad url".to_string()).to_string(),
            "configuration error: bad url"
        );
    }

    #[test]
    fn test_config_error_maps_to_core_config() {
        let err: StyluxError = ChatError::Config("bad url".to_string()).into();
        assert!(matches!(err, StyluxError::Config(ref m) if m == "bad url"));

        let err: StyluxError = ChatError::Status(500).into();
        assert!(matches!(err, StyluxError::Server(_)));
    }
}
