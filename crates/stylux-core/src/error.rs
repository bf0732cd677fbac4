use thiserror::Error;

/// Top-level error type for the Stylux workspace.
///
/// Subsystem crates define their own error types and implement
/// `From<StyluxError>` where they need to cross a crate boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StyluxError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for StyluxError {
    fn from(err: toml::de::Error) -> Self {
        StyluxError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for StyluxError {
    fn from(err: toml::ser::Error) -> Self {
        StyluxError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for StyluxError {
    fn from(err: serde_json::Error) -> Self {
        StyluxError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Stylux operations.
pub type Result<T> = std::result::Result<T, StyluxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let cases: Vec<(StyluxError, &str)> = vec![
            (
                StyluxError::Config("bad key".to_string()),
                "Configuration error: bad key",
            ),
            (
                StyluxError::UnknownRoute("/nope".to_string()),
                "Unknown route: /nope",
            ),
            (
                StyluxError::Server("bind failed".to_string()),
                "Server error: bind failed",
            ),
            (
                StyluxError::Serialization("invalid json".to_string()),
                "Serialization error: invalid json",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: StyluxError = io_err.into();
        assert!(matches!(err, StyluxError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let err: std::result::Result<toml::Value, _> = toml::from_str("invalid = [[[");
        let err: StyluxError = err.unwrap_err().into();
        assert!(matches!(err, StyluxError::Config(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let err: std::result::Result<serde_json::Value, _> = serde_json::from_str("{ nope }");
        let err: StyluxError = err.unwrap_err().into();
        assert!(matches!(err, StyluxError::Serialization(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let value = io_result?;
            Ok(value.to_string())
        }

        assert_eq!(inner().unwrap(), "42");
    }
}
