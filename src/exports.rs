//! JSON export utilities
//!
//! This module decides where the JSON overview of an export file is written
//! and serializes it. The document is rendered completely in memory before
//! the target file is created, so a failed conversion never leaves a
//! truncated file behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::schema::OutputDocument;

/// Configuration for JSON export
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    /// Whether to pretty-print the JSON output
    pub pretty: bool,
}

impl ExportConfig {
    /// Create a new export configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to pretty-print
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Default output path: the input path with its extension replaced by `.json`
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// Writes extracted documents as JSON
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    /// Create a new exporter
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Render a document as a JSON string
    pub fn render(&self, document: &OutputDocument) -> Result<String> {
        let json = if self.config.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        Ok(json)
    }

    /// Write a document to `path`
    pub fn write(&self, document: &OutputDocument, path: &Path) -> Result<()> {
        let json = self.render(document)?;
        fs::write(path, json).map_err(|e| {
            Error::Resource(format!("Failed to write file '{}': {}", path.display(), e))
        })
    }
}
