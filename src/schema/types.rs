//! Field type tags and verbosity levels

use crate::error::Error;
use std::fmt;

/// Data type of a civento metadata field
///
/// Decoded once from the `Datentyp` attribute. Unknown tags are carried
/// through unchanged so they still appear in the output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Repeatable group
    List,
    /// Selection from a value list
    Choice,
    /// Free text
    String,
    /// Yes/no flag
    Boolean,
    /// Whole number, optionally bounded
    Integer,
    /// Person record
    Personendatensatz,
    /// Any other tag
    Other(String),
}

impl FieldType {
    /// Decode a `Datentyp` tag
    pub fn parse(tag: &str) -> Self {
        match tag {
            "LIST" => Self::List,
            "CHOICE" => Self::Choice,
            "STRING" => Self::String,
            "BOOLEAN" => Self::Boolean,
            "INTEGER" => Self::Integer,
            "PERSONENDATENSATZ" => Self::Personendatensatz,
            other => Self::Other(other.to_string()),
        }
    }

    /// Get the tag as written in the export
    pub fn as_str(&self) -> &str {
        match self {
            Self::List => "LIST",
            Self::Choice => "CHOICE",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
            Self::Integer => "INTEGER",
            Self::Personendatensatz => "PERSONENDATENSATZ",
            Self::Other(tag) => tag,
        }
    }

    /// Get the tag of the type-specific sub-node holding title, help and bounds
    pub fn detail_tag(&self) -> Option<&'static str> {
        match self {
            Self::Choice => Some("Auswahlfeld"),
            Self::String => Some("Textfeld"),
            Self::Boolean => Some("JaNeinFeld"),
            Self::Integer => Some("Zahlenfeld"),
            Self::Personendatensatz => Some("Personendatensatz"),
            Self::List | Self::Other(_) => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output detail level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Bare type strings, lists as plain nested mappings
    #[default]
    Types,
    /// Types wrapped in `{"type": ...}`, lists as `{"type": "LIST", "value": ...}`
    Typed,
    /// Like `Typed`, plus title, help, bounds and choice values
    Detailed,
}

impl Verbosity {
    /// Get the numeric level
    pub fn level(self) -> u8 {
        match self {
            Self::Types => 0,
            Self::Typed => 1,
            Self::Detailed => 2,
        }
    }
}

impl TryFrom<u8> for Verbosity {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Self::Types),
            1 => Ok(Self::Typed),
            2 => Ok(Self::Detailed),
            other => Err(Error::Config(format!(
                "verbosity must be 0, 1 or 2, got {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_known_tags() {
        for tag in ["LIST", "CHOICE", "STRING", "BOOLEAN", "INTEGER", "PERSONENDATENSATZ"] {
            let parsed = FieldType::parse(tag);
            assert!(!matches!(parsed, FieldType::Other(_)), "{} should be known", tag);
            assert_eq!(parsed.as_str(), tag);
        }
    }

    #[test]
    fn test_field_type_passthrough() {
        let parsed = FieldType::parse("DATUM");
        assert_eq!(parsed, FieldType::Other("DATUM".to_string()));
        assert_eq!(parsed.to_string(), "DATUM");
        assert_eq!(parsed.detail_tag(), None);
    }

    #[test]
    fn test_detail_tags() {
        assert_eq!(FieldType::Choice.detail_tag(), Some("Auswahlfeld"));
        assert_eq!(FieldType::Boolean.detail_tag(), Some("JaNeinFeld"));
        assert_eq!(FieldType::Integer.detail_tag(), Some("Zahlenfeld"));
        assert_eq!(FieldType::List.detail_tag(), None);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(Verbosity::default(), Verbosity::Types);
        assert_eq!(Verbosity::try_from(2).unwrap(), Verbosity::Detailed);
        assert_eq!(Verbosity::Typed.level(), 1);
        assert!(Verbosity::Detailed > Verbosity::Typed);
    }

    #[test]
    fn test_verbosity_out_of_range() {
        assert!(matches!(Verbosity::try_from(3), Err(Error::Config(_))));
    }
}
