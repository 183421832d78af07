/*!
 * Error types for the srclate application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to a translation backend
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// The payload plus prompt overhead exceeded the model context window.
    ///
    /// Distinguished from a generic API error so a higher layer can pick a
    /// strategy (skip, truncate, split). Never fatal for the whole run.
    #[error("Model context window exceeded: {0}")]
    ContextOverflow(String),
}

impl ProviderError {
    /// Whether this error signals a context-window overflow
    pub fn is_context_overflow(&self) -> bool {
        matches!(self, Self::ContextOverflow(_))
    }
}

/// Errors that can occur while translating a payload or a source file
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the backend transport
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error appending to the glossary sink
    #[error("Glossary error: {0}")]
    Glossary(String),
}

impl TranslationError {
    /// Whether the underlying cause is a context-window overflow
    pub fn is_context_overflow(&self) -> bool {
        matches!(self, Self::Provider(p) if p.is_context_overflow())
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
