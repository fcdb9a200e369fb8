//! Error types for the Travel Companion Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while splitting bills, loading
//! configuration or managing the notification feed.

use thiserror::Error;

/// The main error type for the Travel Companion Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently in the hosting application.
///
/// # Example
///
/// ```
/// use travel_companion_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/planner.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/planner.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but its values are inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },

    /// An operation was called with input it refuses to process.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was rejected.
        field: String,
        /// A description of why the input was rejected.
        message: String,
    },

    /// No notification with the given ID exists in the feed.
    #[error("Notification not found: {id}")]
    NotificationNotFound {
        /// The ID that was looked up.
        id: String,
    },

    /// The notification carries no action that could be performed.
    #[error("Notification '{id}' has no action")]
    NotActionable {
        /// The ID of the notification.
        id: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
