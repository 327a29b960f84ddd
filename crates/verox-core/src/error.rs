//! Error types for the VeroX advisor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the VeroX crates.
///
/// The advisor itself is total: classification, recommendation and view
/// transitions never fail. Errors only arise at the edges, when a caller
/// addresses an unknown entity or when configuration and catalog fixtures
/// are loaded from disk.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VeroxError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A catalog fixture violates a record invariant
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl VeroxError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an InvalidCatalog error
    pub fn invalid_catalog(message: impl Into<String>) -> Self {
        Self::InvalidCatalog(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a catalog validation error
    pub fn is_invalid_catalog(&self) -> bool {
        matches!(self, Self::InvalidCatalog(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for VeroxError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for VeroxError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for VeroxError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, VeroxError>`.
pub type Result<T> = std::result::Result<T, VeroxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = VeroxError::not_found("Conversation", "abc");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: Conversation 'abc'");
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: VeroxError = parse_err.into();
        assert!(err.is_serialization());
        match err {
            VeroxError::Serialization { format, .. } => assert_eq!(format, "TOML"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_config_error_display() {
        let err = VeroxError::config("Cannot find config directory");
        assert_eq!(err.to_string(), "Configuration error: Cannot find config directory");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: VeroxError = io.into();
        assert!(matches!(err, VeroxError::Io { .. }));
        assert!(err.to_string().contains("NotFound"));
    }
}
