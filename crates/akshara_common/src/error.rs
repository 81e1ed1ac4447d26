// --- File: crates/akshara_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Akshara errors.
///
/// This enum provides a common set of error variants that can be used across all crates.
/// Crates with richer taxonomies define their own error type and convert into this one.
#[derive(Error, Debug)]
pub enum AksharaError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

// Common error conversions
impl From<reqwest::Error> for AksharaError {
    fn from(err: reqwest::Error) -> Self {
        AksharaError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for AksharaError {
    fn from(err: serde_json::Error) -> Self {
        AksharaError::ParseError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> AksharaError {
    AksharaError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> AksharaError {
    AksharaError::ValidationError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> AksharaError {
    AksharaError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> AksharaError {
    AksharaError::InternalError(message.to_string())
}
