//! Error types for the PlayCove application.

use serde::Serialize;
use thiserror::Error;

/// A shared error type for the entire PlayCove application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. The variants map directly
/// onto HTTP status classes at the server boundary.
#[derive(Error, Debug, Clone, Serialize)]
pub enum CoveError {
    /// A referenced entity does not exist
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Malformed or self-referential input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The acting user lacks permission for the requested operation
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Duplicate record or already-transitioned state
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Data access error (repository/storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// An external collaborator (identity provider, chat model) failed
    #[error("External service error: {service} - {message}")]
    ExternalService { service: String, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoveError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates a Forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates an ExternalService error
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalService {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a Conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Check if this is a Forbidden error
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }

    /// Check if this is an InvalidArgument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Whether the error is a caller-side precondition failure.
    ///
    /// These surface as 4xx responses and must not be retried.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::InvalidArgument(_) | Self::Forbidden(_) | Self::Conflict(_)
        )
    }
}

impl From<std::io::Error> for CoveError {
    fn from(err: std::io::Error) -> Self {
        Self::DataAccess(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for CoveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CoveError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CoveError>`.
pub type Result<T> = std::result::Result<T, CoveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_helpers() {
        assert!(CoveError::not_found("user", "u-1").is_not_found());
        assert!(CoveError::conflict("dup").is_conflict());
        assert!(CoveError::forbidden("nope").is_forbidden());
        assert!(CoveError::invalid_argument("bad").is_invalid_argument());
    }

    #[test]
    fn client_errors_are_the_four_precondition_variants() {
        assert!(CoveError::not_found("game", "g-1").is_client_error());
        assert!(CoveError::conflict("dup").is_client_error());
        assert!(!CoveError::internal("boom").is_client_error());
        assert!(!CoveError::external_service("llm", "down").is_client_error());
    }
}
