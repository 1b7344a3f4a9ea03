//! Schema extraction
//!
//! This module walks the mapping tree of a civento process export and
//! produces one table per `Objekt` of the process's metadata definition.
//! Each table maps field and list names to their type, at one of three
//! [`Verbosity`] levels.

mod fields;
mod traversal;
mod types;

pub use fields::{describe_field, FieldInfo};
pub use traversal::{traverse_vars, FIELD_TAG, LIST_CONTENT_TAG, LIST_TAG};
pub use types::{FieldType, Verbosity};

use crate::converters::{ConverterConfig, Mapping};
use crate::error::{Result, StructureError};
use crate::nodes::Node;
use crate::{DEFAULT_ROOT_TAGS, METADATA_TAG, OBJECT_TAG, PROCESS_TAG};
use serde_json::Value as JsonValue;
use tracing::debug;

/// Extracted document: table name to table description
pub type OutputDocument = Mapping;

/// Configuration for schema extraction
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Output detail level
    verbosity: Verbosity,
    /// Accepted root tags, tried in order
    root_tags: Vec<String>,
    /// Shape of the mapping tree
    converter: ConverterConfig,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            root_tags: DEFAULT_ROOT_TAGS.iter().map(|t| t.to_string()).collect(),
            converter: ConverterConfig::default(),
        }
    }
}

impl ExtractorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the verbosity
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Get the accepted root tags
    pub fn root_tags(&self) -> &[String] {
        &self.root_tags
    }

    /// Get the converter configuration
    pub fn converter(&self) -> &ConverterConfig {
        &self.converter
    }

    /// Set verbosity
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set the accepted root tags
    pub fn with_root_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.root_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the converter configuration
    pub fn with_converter(mut self, converter: ConverterConfig) -> Self {
        self.converter = converter;
        self
    }
}

/// Extracts table descriptions from a mapping tree
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new extractor with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract all tables of the process definition
    pub fn extract(&self, tree: &Mapping) -> Result<OutputDocument> {
        let root = self.find_root(tree)?;
        let process = root.require_child(PROCESS_TAG)?;

        let mut output = OutputDocument::new();
        for definition in process.children(METADATA_TAG)? {
            let object = definition.require_child(OBJECT_TAG)?;
            let name = object.require_attr("Name")?;
            debug!(table = name, "extracting table");

            let mut table = Mapping::new();
            traverse_vars(&object, &mut table, self.config.verbosity)?;
            output.insert(name.to_string(), JsonValue::Object(table));
        }

        Ok(output)
    }

    fn find_root<'a>(&'a self, tree: &'a Mapping) -> Result<Node<'a>> {
        for tag in &self.config.root_tags {
            match tree.get(tag.as_str()) {
                Some(JsonValue::Object(root)) => {
                    return Ok(Node::new(root, tag.as_str(), &self.config.converter))
                }
                Some(_) => {
                    return Err(StructureError::new(format!("root <{}> has no content", tag))
                        .with_path(tag.as_str())
                        .into())
                }
                None => {}
            }
        }

        let found: Vec<&str> = tree.keys().map(|k| k.as_str()).collect();
        Err(StructureError::missing(format_args!(
            "root node <{}>",
            self.config.root_tags.join("> or <")
        ))
        .with_found(found.join(", "))
        .into())
    }
}

/// Extract all tables with the default root tags
pub fn extract(tree: &Mapping, verbosity: Verbosity) -> Result<OutputDocument> {
    Extractor::with_config(ExtractorConfig::new().with_verbosity(verbosity)).extract(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn tree(value: JsonValue) -> Mapping {
        match value {
            JsonValue::Object(map) => map,
            _ => panic!("Expected object"),
        }
    }

    fn kunde(root: &str) -> Mapping {
        let mut doc = Mapping::new();
        doc.insert(root.to_string(), json!({
            "@xmlns:ns2": "urn:civento",
            "Vorgang": {
                "@Name": "Kundenantrag",
                "Metadatendefinition": [
                    {"Objekt": {"@Name": "Kunde", "Metadatenfeld": {
                        "@Name": "Name", "@Datentyp": "STRING",
                        "Textfeld": {"Titel": {"@Standard": "Vollständiger Name"}}
                    }}},
                    {"Objekt": {"@Name": "Leer"}}
                ]
            }
        }));
        doc
    }

    #[test]
    fn test_extract_detailed() {
        let output = extract(&kunde("ns2:Bibliothek"), Verbosity::Detailed).unwrap();
        assert_eq!(
            JsonValue::Object(output),
            json!({
                "Kunde": {"Name": {"title": "Vollständiger Name", "type": "STRING"}},
                "Leer": {}
            })
        );
    }

    #[test]
    fn test_extract_alternate_root() {
        let output = extract(&kunde("ns3:Bibliothek"), Verbosity::Types).unwrap();
        assert_eq!(output["Kunde"], json!({"Name": "STRING"}));
    }

    #[test]
    fn test_extract_first_root_wins() {
        let both = tree(json!({
            "ns3:Bibliothek": {"Vorgang": {"Metadatendefinition": {"Objekt": {"@Name": "Drei"}}}},
            "ns2:Bibliothek": {"Vorgang": {"Metadatendefinition": {"Objekt": {"@Name": "Zwei"}}}}
        }));
        let output = extract(&both, Verbosity::Types).unwrap();
        assert!(output.contains_key("Zwei"));
        assert!(!output.contains_key("Drei"));
    }

    #[test]
    fn test_extract_missing_root() {
        let err = extract(&tree(json!({"Bibliothek": {}})), Verbosity::Types).unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, Error::Structure(_)));
        assert!(msg.contains("<ns2:Bibliothek> or <ns3:Bibliothek>"));
        assert!(msg.contains("Found: Bibliothek"));
    }

    #[test]
    fn test_extract_missing_process() {
        let err = extract(
            &tree(json!({"ns2:Bibliothek": {"@Version": "1"}})),
            Verbosity::Types,
        )
        .unwrap_err();
        assert!(err.to_string().contains("node <Vorgang>"));
    }

    #[test]
    fn test_extract_without_metadata() {
        let output = extract(
            &tree(json!({"ns2:Bibliothek": {"Vorgang": {"@Name": "leer"}}})),
            Verbosity::Types,
        )
        .unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_extract_custom_root_tags() {
        let config = ExtractorConfig::new().with_root_tags(["ns9:Bibliothek"]);
        let extractor = Extractor::with_config(config);
        assert!(extractor.extract(&kunde("ns2:Bibliothek")).is_err());
        assert!(extractor.extract(&kunde("ns9:Bibliothek")).is_ok());
    }

    #[test]
    fn test_extractor_config_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.verbosity(), Verbosity::Types);
        assert_eq!(config.root_tags(), ["ns2:Bibliothek", "ns3:Bibliothek"]);
        assert_eq!(config.converter().attr_prefix(), "@");
    }
}
