//! # civento-json
//!
//! Converts civento process-export XML into a JSON overview of the process's
//! data model: one table per `Objekt` of the metadata definition, each
//! mapping field and list names to their types.
//!
//! ## Pipeline
//!
//! 1. [`loaders`] reads the export into memory
//! 2. [`documents`] parses it into an element tree
//! 3. [`converters`] turns the tree into generic ordered mappings
//! 4. [`schema`] walks the mappings and extracts the tables
//! 5. [`exports`] writes the result as JSON
//!
//! ## Example
//!
//! ```rust,ignore
//! use civento_json::conversion::FileConverter;
//! use civento_json::exports::ExportConfig;
//! use civento_json::schema::{ExtractorConfig, Verbosity};
//!
//! let converter = FileConverter::new(
//!     ExtractorConfig::new().with_verbosity(Verbosity::Detailed),
//!     ExportConfig::default(),
//! );
//! let json_path = converter.convert_file("export.xml".as_ref(), None)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Foundation
pub mod error;
pub mod limits;

// Reading and parsing
pub mod loaders;
pub mod documents;
pub mod converters;
pub mod nodes;

// Extraction and output
pub mod schema;
pub mod exports;
pub mod conversion;

// Re-exports for convenience
pub use error::{Error, Result, StructureError};
pub use schema::{extract, OutputDocument, Verbosity};

/// Version of the civento-json library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root tags of a civento export, tried in order
pub const DEFAULT_ROOT_TAGS: [&str; 2] = ["ns2:Bibliothek", "ns3:Bibliothek"];

/// Tag of the process definition under the root
pub const PROCESS_TAG: &str = "Vorgang";

/// Tag of one metadata definition (one table) under the process
pub const METADATA_TAG: &str = "Metadatendefinition";

/// Tag of the table object inside a metadata definition
pub const OBJECT_TAG: &str = "Objekt";
