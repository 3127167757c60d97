//! Error types for the TAI application.

use thiserror::Error;

/// A shared error type for the entire TAI workspace.
///
/// Chat and tool failures are normally absorbed into fallback text before they
/// reach a user; this type is what travels between layers until that point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaiError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// HTTP error talking to the backend. `status` is `None` for transport
    /// failures where no response was received.
    #[error("HTTP error{}: {message}", status_suffix(.status))]
    Http {
        status: Option<u16>,
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// User input rejected before any request was made
    #[error("Validation error: {0}")]
    Validation(String),

    /// Capability not available in the current front end
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaiError {
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

    /// Creates an HTTP error
    pub fn http(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a Serialization error for the given format
    pub fn serialization(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an Unsupported error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an HTTP error
    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an unsupported-capability error
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }

    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => *status,
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for TaiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for TaiError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization("JSON", err.to_string())
    }
}

impl From<toml::de::Error> for TaiError {
    fn from(err: toml::de::Error) -> Self {
        Self::serialization("TOML", err.to_string())
    }
}

impl From<minijinja::Error> for TaiError {
    fn from(err: minijinja::Error) -> Self {
        Self::Template(err.to_string())
    }
}

/// Conversion from String (for error messages)
impl From<String> for TaiError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" ({code})")).unwrap_or_default()
}

/// A type alias for `Result<T, TaiError>`.
pub type Result<T> = std::result::Result<T, TaiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_display_with_and_without_status() {
        let with_status = TaiError::http(Some(500), "Internal Server Error");
        assert_eq!(with_status.to_string(), "HTTP error (500): Internal Server Error");

        let transport = TaiError::http(None, "connection refused");
        assert_eq!(transport.to_string(), "HTTP error: connection refused");
        assert_eq!(transport.status(), None);
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let tai: TaiError = err.into();
        assert!(tai.is_serialization());
        assert!(tai.to_string().starts_with("Serialization error: JSON"));
    }

    #[test]
    fn test_type_checks() {
        assert!(TaiError::not_found("message", "abc").is_not_found());
        assert!(TaiError::validation("empty").is_validation());
        assert!(TaiError::unsupported("voice").is_unsupported());
        assert!(TaiError::config("bad").is_config());
        assert!(!TaiError::from("x".to_string()).is_http());
    }
}
