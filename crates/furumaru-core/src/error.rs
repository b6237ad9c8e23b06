//! Unified error type for the gateway.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised at the fallible edges of the gateway.
///
/// Entity-to-response mapping never fails; these variants cover feed
/// serialization, configuration loading and logging setup.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Response could not be serialized
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: &'static str,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Serialization { .. } => "SERIALIZATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a serialization error for the given wire format.
    #[must_use]
    pub fn serialization<T: ToString>(format: &'static str, err: T) -> Self {
        Self::Serialization {
            format,
            message: err.to_string(),
        }
    }

    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

/// Error body handed to clients when feed rendering or setup fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn from_error(error: &GatewayError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}
