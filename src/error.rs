//! Error types for toolhub
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

use crate::api::ApiError;

/// All error types that can occur in toolhub
#[derive(Debug, Error)]
pub enum ToolhubError {
    /// Request to the tools API failed
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(String),

    /// Clipboard write was rejected by the host
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for toolhub operations
pub type Result<T> = std::result::Result<T, ToolhubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = ToolhubError::Config("base_url is empty".to_string());
        assert_eq!(err.to_string(), "Config error: base_url is empty");
    }

    #[test]
    fn test_clipboard_error() {
        let err = ToolhubError::Clipboard("permission denied".to_string());
        assert_eq!(err.to_string(), "Clipboard error: permission denied");
    }

    #[test]
    fn test_api_error_conversion() {
        let api_err = ApiError::Status {
            status: 404,
            url: "http://localhost/api/tools".to_string(),
        };
        let err: ToolhubError = api_err.into();
        assert!(matches!(err, ToolhubError::Api(_)));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ToolhubError = io_err.into();
        assert!(matches!(err, ToolhubError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ToolhubError = json_err.into();
        assert!(matches!(err, ToolhubError::Json(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(ToolhubError::Config("test".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
