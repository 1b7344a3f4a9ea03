//! Resource loading utilities
//!
//! This module reads civento export files into memory.

use crate::error::{Error, Result};
use crate::limits::Limits;
use std::fs;
use std::path::Path;

/// Resource loader for civento export documents
#[derive(Debug, Default)]
pub struct Loader {
    /// Resource limits
    limits: Limits,
}

impl Loader {
    /// Create a new loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Get the limits
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Load a file as a string
    pub fn load(&self, path: &Path) -> Result<String> {
        let metadata = fs::metadata(path).map_err(|e| {
            Error::Resource(format!("Failed to read file '{}': {}", path.display(), e))
        })?;

        // Refuse oversized files before reading them
        self.limits.check_xml_size(metadata.len() as usize)?;

        fs::read_to_string(path).map_err(|e| {
            Error::Resource(format!("Failed to read file '{}': {}", path.display(), e))
        })
    }
}
