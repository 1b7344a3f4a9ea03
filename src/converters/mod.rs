//! XML to mapping-tree conversion
//!
//! This module turns a parsed [`Element`](crate::documents::Element) tree into
//! a generic tree of ordered JSON mappings, the shape the schema extractor
//! walks:
//!
//! - attributes become keys carrying a marker prefix (`@Name`, `@Datentyp`)
//! - child elements become keys named after their tag
//! - a tag that occurs once maps to a bare value, a repeated tag to a sequence
//! - text next to attributes or children is kept under the text key (`#text`)
//! - an element without attributes, children or text maps to `null`

mod base;

pub use base::{ConverterConfig, TreeConverter};

use serde_json::{Map, Value as JsonValue};

/// Type alias for one mapping of the converted tree
pub type Mapping = Map<String, JsonValue>;
