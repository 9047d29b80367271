//! Unified application error types for the folder forest.
//!
//! Loader, configuration, and CLI failures are mapped into [`AppError`] for
//! consistent propagation through the `?` operator. Relocation failures have
//! their own [`MoveError`] so callers can match on the exact kind.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested folder or organization was not found.
    NotFound,
    /// Input validation failed.
    Validation,
    /// A conflict occurred (folder already linked, etc.).
    Conflict,
    /// An internal error occurred.
    Internal,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// A filesystem I/O error occurred.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Io => write!(f, "IO"),
        }
    }
}

/// The unified application error.
///
/// Crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

/// Reasons a folder relocation is rejected.
///
/// Every check runs before any link or path is touched, so receiving one of
/// these means the forest is exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// No registered folder carries the source name.
    #[error("source folder '{0}' does not exist")]
    SourceNotFound(String),
    /// No registered folder carries the destination name.
    #[error("destination folder '{0}' does not exist")]
    DestinationNotFound(String),
    /// Source and destination resolve to the same folder.
    #[error("cannot move folder '{0}' to itself")]
    MoveToSelf(String),
    /// The destination sits inside the source's subtree.
    #[error("cannot move folder '{0}' to a child of itself")]
    MoveIntoOwnDescendant(String),
    /// Source and destination belong to different organizations.
    #[error("cannot move folder '{0}' to a different organization")]
    CrossOrganizationMove(String),
}

impl MoveError {
    /// The broad error category for this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceNotFound(_) | Self::DestinationNotFound(_) => ErrorKind::NotFound,
            Self::MoveToSelf(_) | Self::MoveIntoOwnDescendant(_) | Self::CrossOrganizationMove(_) => {
                ErrorKind::Validation
            }
        }
    }

    /// Name of the folder the caller asked to move (or look up).
    pub fn folder(&self) -> &str {
        match self {
            Self::SourceNotFound(name)
            | Self::DestinationNotFound(name)
            | Self::MoveToSelf(name)
            | Self::MoveIntoOwnDescendant(name)
            | Self::CrossOrganizationMove(name) => name,
        }
    }
}

impl From<MoveError> for AppError {
    fn from(err: MoveError) -> Self {
        let kind = err.kind();
        Self::with_source(kind, err.to_string(), err)
    }
}
