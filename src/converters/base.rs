//! Base converter types
//!
//! This module provides the configuration and the converter that produce the
//! mapping tree.

use super::Mapping;
use crate::documents::{Document, Element};
use crate::error::{Error, Result};
use serde_json::Value as JsonValue;

/// Configuration for converters
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Key used for text content in decoded output
    text_key: String,
    /// Prefix for attribute names in decoded output
    attr_prefix: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            text_key: "#text".to_string(),
            attr_prefix: "@".to_string(),
        }
    }
}

impl ConverterConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the text key
    pub fn text_key(&self) -> &str {
        &self.text_key
    }

    /// Get the attribute prefix
    pub fn attr_prefix(&self) -> &str {
        &self.attr_prefix
    }

    /// Set text key
    pub fn with_text_key(mut self, key: impl Into<String>) -> Self {
        self.text_key = key.into();
        self
    }

    /// Set attribute prefix
    pub fn with_attr_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.attr_prefix = prefix.into();
        self
    }
}

/// Converts elements into the generic mapping tree
#[derive(Debug, Clone, Default)]
pub struct TreeConverter {
    config: ConverterConfig,
}

impl TreeConverter {
    /// Create a new TreeConverter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration
    pub fn with_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Decode a whole document, keeping the root tag as the single top-level key
    pub fn decode_document(&self, doc: &Document) -> Result<Mapping> {
        let root = doc
            .root()
            .ok_or_else(|| Error::Xml("XML document has no root element".to_string()))?;

        let mut result = Mapping::new();
        result.insert(root.name.clone(), self.decode(root));
        Ok(result)
    }

    /// Decode a single element
    pub fn decode(&self, elem: &Element) -> JsonValue {
        let mut result = Mapping::new();
        let attr_prefix = self.config.attr_prefix();

        for (name, value) in &elem.attributes {
            let key = format!("{}{}", attr_prefix, name);
            result.insert(key, JsonValue::String(value.clone()));
        }

        for child in &elem.children {
            let value = self.decode(child);
            if let Some(existing) = result.get_mut(&child.name) {
                // Convert to array if not already
                if let JsonValue::Array(arr) = existing {
                    arr.push(value);
                } else {
                    let old = existing.take();
                    *existing = JsonValue::Array(vec![old, value]);
                }
            } else {
                result.insert(child.name.clone(), value);
            }
        }

        match &elem.text {
            Some(text) if result.is_empty() => JsonValue::String(text.clone()),
            Some(text) => {
                result.insert(
                    self.config.text_key().to_string(),
                    JsonValue::String(text.clone()),
                );
                JsonValue::Object(result)
            }
            None if result.is_empty() => JsonValue::Null,
            None => JsonValue::Object(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn decode(xml: &str) -> JsonValue {
        let doc = Document::from_string(xml).unwrap();
        JsonValue::Object(TreeConverter::new().decode_document(&doc).unwrap())
    }

    #[test]
    fn test_converter_config_builder() {
        let config = ConverterConfig::new()
            .with_text_key("$")
            .with_attr_prefix("-");

        assert_eq!(config.text_key(), "$");
        assert_eq!(config.attr_prefix(), "-");
    }

    #[test]
    fn test_decode_text_only() {
        assert_eq!(decode("<Von>1</Von>"), json!({"Von": "1"}));
    }

    #[test]
    fn test_decode_empty_element() {
        assert_eq!(decode("<Metadatenobjekt/>"), json!({"Metadatenobjekt": null}));
    }

    #[test]
    fn test_decode_attributes_and_text() {
        assert_eq!(
            decode(r#"<Wert Schluessel="a">Alpha</Wert>"#),
            json!({"Wert": {"@Schluessel": "a", "#text": "Alpha"}})
        );
    }

    #[test]
    fn test_decode_single_child_is_bare() {
        let json = decode(r#"<Objekt Name="Kunde"><Metadatenfeld Name="Name"/></Objekt>"#);
        assert!(json["Objekt"]["Metadatenfeld"].is_object());
        assert_eq!(json["Objekt"]["Metadatenfeld"]["@Name"], "Name");
    }

    #[test]
    fn test_decode_repeated_children_become_sequence() {
        let json = decode(
            r#"<Objekt><Metadatenfeld Name="a"/><Metadatenliste Name="l"/><Metadatenfeld Name="b"/></Objekt>"#,
        );
        assert_eq!(
            json["Objekt"]["Metadatenfeld"],
            json!([{"@Name": "a"}, {"@Name": "b"}])
        );
        assert_eq!(json["Objekt"]["Metadatenliste"], json!({"@Name": "l"}));
    }

    #[test]
    fn test_decode_custom_prefix() {
        let converter =
            TreeConverter::with_config(ConverterConfig::new().with_attr_prefix("-"));
        let doc = Document::from_string(r#"<a b="c"/>"#).unwrap();
        assert_eq!(
            converter.decode(doc.root().unwrap()),
            json!({"-b": "c"})
        );
    }

    #[test]
    fn test_decode_document_without_root() {
        let err = TreeConverter::new()
            .decode_document(&Document::new())
            .unwrap_err();
        assert!(matches!(err, Error::Xml(_)));
    }
}
