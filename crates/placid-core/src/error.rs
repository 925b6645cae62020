//! Error types for the Placid core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Placid.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Hook configuration is unusable.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Key/value store rejected a write.
    #[error("Storage error for key `{key}`: {message}")]
    Storage { key: String, message: String },

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new storage error.
    pub fn storage(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Storage {
            key: key.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_config_error() {
        let err = CoreError::config("empty selector");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("empty selector"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_config_error_with_source() {
        let inner = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = CoreError::config_with_source("bad hooks", inner);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_storage_error() {
        let err = CoreError::storage("placid-theme", "quota exceeded");
        assert!(err.to_string().contains("placid-theme"));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("{").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(err.to_string().contains("JSON parse error"));
    }
}
