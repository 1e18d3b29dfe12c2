// --- File: crates/noor_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by all Noor crates.
///
/// Each crate keeps its own error enum; at the composition root those are
/// folded into this type through [`Context`].
#[derive(Error, Debug)]
pub enum NoorError {
    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred while reading or writing device storage
    #[error("Storage error: {0}")]
    StorageError(String),

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

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, NoorError>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, NoorError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| NoorError::InternalError(format!("{}: {}", context, error)))
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> NoorError {
    NoorError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> NoorError {
    NoorError::ValidationError(message.to_string())
}

pub fn storage_error<T: fmt::Display>(message: T) -> NoorError {
    NoorError::StorageError(message.to_string())
}
