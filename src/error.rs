//! Error types for civento-json
//!
//! This module defines all error types used throughout the library.
//! Configuration mistakes, documents that do not have the civento shape,
//! and file access failures are kept apart so the batch driver can decide which
//! ones abort a single file and which ones abort the whole run.

use std::fmt;
use thiserror::Error;

/// Result type alias using the civento-json Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for civento-json operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid combination of options, detected before any file is touched
    #[error("configuration error: {0}")]
    Config(String),

    /// The document does not have the expected civento shape
    #[error("structure error: {0}")]
    Structure(#[from] StructureError),

    /// Resource loading or writing error
    #[error("resource error: {0}")]
    Resource(String),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if the error only concerns the file being converted
    ///
    /// Configuration errors concern the whole invocation.
    pub fn is_per_file(&self) -> bool {
        !matches!(self, Error::Config(_))
    }
}

/// The parsed document does not match the civento schema shape
#[derive(Debug, Clone)]
pub struct StructureError {
    /// Error message
    pub message: String,
    /// Element path where the mismatch was detected
    pub path: Option<String>,
    /// What was found instead
    pub found: Option<String>,
}

impl StructureError {
    /// Create a new structure error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            found: None,
        }
    }

    /// Create an error for a missing element or attribute
    pub fn missing(what: impl fmt::Display) -> Self {
        Self::new(format!("cannot find {} in current XML", what))
    }

    /// Set the element path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set what was found instead
    pub fn with_found(mut self, found: impl Into<String>) -> Self {
        self.found = Some(found.into());
        self
    }
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref path) = self.path {
            write!(f, "\n\nPath: {}", path)?;
        }

        if let Some(ref found) = self.found {
            write!(f, "\n\nFound: {}", found)?;
        }

        Ok(())
    }
}

impl std::error::Error for StructureError {}
