//! Navigation over the mapping tree
//!
//! The converted tree stores a tag that occurs once as a bare mapping and a
//! repeated tag as a sequence. [`Node`] hides that difference: every lookup
//! of repeatable children returns an ordered sequence, so the extractor never
//! branches on the shape. Lookups also track the element path for error
//! reporting.

use crate::converters::{ConverterConfig, Mapping};
use crate::error::{Result, StructureError};
use serde_json::Value as JsonValue;

/// Borrowed view of one element in the mapping tree
#[derive(Debug, Clone)]
pub struct Node<'a> {
    /// Content of the element; `None` for elements without attributes or children
    mapping: Option<&'a Mapping>,
    /// Text of a text-only element
    text: Option<&'a str>,
    /// Slash-separated element path from the document root
    path: String,
    config: &'a ConverterConfig,
}

impl<'a> Node<'a> {
    /// Create a node over a mapping
    pub fn new(mapping: &'a Mapping, path: impl Into<String>, config: &'a ConverterConfig) -> Self {
        Self {
            mapping: Some(mapping),
            text: None,
            path: path.into(),
            config,
        }
    }

    /// Create a node over a single (non-sequence) value
    fn from_value(value: &'a JsonValue, path: String, config: &'a ConverterConfig) -> Result<Self> {
        let (mapping, text) = match value {
            JsonValue::Object(map) => (Some(map), None),
            JsonValue::String(s) => (None, Some(s.as_str())),
            JsonValue::Null => (None, None),
            JsonValue::Array(items) => {
                return Err(StructureError::new(format!(
                    "expected a single element, found {} of them",
                    items.len()
                ))
                .with_path(path)
                .into())
            }
            other => {
                return Err(StructureError::new("expected an element")
                    .with_path(path)
                    .with_found(other.to_string())
                    .into())
            }
        };
        Ok(Self {
            mapping,
            text,
            path,
            config,
        })
    }

    /// Get the element path
    pub fn path(&self) -> &str {
        &self.path
    }

    fn child_path(&self, tag: &str) -> String {
        if self.path.is_empty() {
            tag.to_string()
        } else {
            format!("{}/{}", self.path, tag)
        }
    }

    /// Get a raw child value by tag
    pub fn get(&self, tag: &str) -> Option<&'a JsonValue> {
        self.mapping.and_then(|m| m.get(tag))
    }

    /// Get the text content of the element
    pub fn text(&self) -> Option<&'a str> {
        match self.text {
            Some(text) => Some(text),
            None => self
                .get(self.config.text_key())
                .and_then(|value| value.as_str()),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        let key = format!("{}{}", self.config.attr_prefix(), name);
        self.get(&key).and_then(|value| value.as_str())
    }

    /// Get a mandatory attribute value
    pub fn require_attr(&self, name: &str) -> Result<&'a str> {
        self.attr(name).ok_or_else(|| {
            StructureError::missing(format_args!("attribute '{}'", name))
                .with_path(self.path.clone())
                .into()
        })
    }

    /// Get a single child element, if present
    pub fn child(&self, tag: &str) -> Result<Option<Node<'a>>> {
        match self.get(tag) {
            Some(value) => Node::from_value(value, self.child_path(tag), self.config).map(Some),
            None => Ok(None),
        }
    }

    /// Get a mandatory single child element
    pub fn require_child(&self, tag: &str) -> Result<Node<'a>> {
        self.child(tag)?.ok_or_else(|| {
            let mut err = StructureError::missing(format_args!("node <{}>", tag))
                .with_path(self.path.clone());
            if let Some(mapping) = self.mapping {
                let present: Vec<&str> = mapping.keys().map(|k| k.as_str()).collect();
                err = err.with_found(present.join(", "));
            }
            err.into()
        })
    }

    /// Get all child elements with a tag, in document order
    ///
    /// A bare mapping counts as a sequence of one; an absent tag as an empty
    /// sequence.
    pub fn children(&self, tag: &str) -> Result<Vec<Node<'a>>> {
        match self.get(tag) {
            None => Ok(Vec::new()),
            Some(JsonValue::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let path = format!("{}[{}]", self.child_path(tag), i + 1);
                    Node::from_value(item, path, self.config)
                })
                .collect(),
            Some(value) => Ok(vec![Node::from_value(value, self.child_path(tag), self.config)?]),
        }
    }
}
