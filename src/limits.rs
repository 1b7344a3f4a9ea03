//! Limits for civento document processing
//!
//! Documents are read fully into memory and walked recursively, so both the
//! input size and the element nesting depth are bounded.

use crate::error::{Error, Result};

/// Resource limits applied while loading and parsing a document
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum element nesting depth
    pub max_xml_depth: usize,

    /// Maximum XML file size in bytes
    pub max_xml_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_xml_depth: 1000,
            max_xml_size: 100 * 1024 * 1024, // 100 MB
        }
    }
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create strict limits (more restrictive)
    pub fn strict() -> Self {
        Self {
            max_xml_depth: 100,
            max_xml_size: 10 * 1024 * 1024, // 10 MB
        }
    }

    /// Create permissive limits (less restrictive, use with caution)
    pub fn permissive() -> Self {
        Self {
            max_xml_depth: 10000,
            max_xml_size: 1024 * 1024 * 1024, // 1 GB
        }
    }

    /// Check if XML depth is within limits
    pub fn check_xml_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_xml_depth {
            Err(Error::LimitExceeded(format!(
                "XML depth {} exceeds maximum {}",
                depth, self.max_xml_depth
            )))
        } else {
            Ok(())
        }
    }

    /// Check if XML size is within limits
    pub fn check_xml_size(&self, size: usize) -> Result<()> {
        if size > self.max_xml_size {
            Err(Error::LimitExceeded(format!(
                "XML size {} bytes exceeds maximum {} bytes",
                size, self.max_xml_size
            )))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_xml_depth, 1000);
        assert_eq!(limits.max_xml_size, 100 * 1024 * 1024);
    }

    #[test]
    fn test_strict_is_tighter_than_permissive() {
        let strict = Limits::strict();
        let permissive = Limits::permissive();
        assert!(strict.max_xml_depth < permissive.max_xml_depth);
        assert!(strict.max_xml_size < permissive.max_xml_size);
    }

    #[test]
    fn test_check_xml_depth() {
        let limits = Limits::strict();
        assert!(limits.check_xml_depth(100).is_ok());
        assert!(matches!(
            limits.check_xml_depth(101),
            Err(Error::LimitExceeded(_))
        ));
    }

    #[test]
    fn test_check_xml_size() {
        let limits = Limits::new();
        assert!(limits.check_xml_size(1024).is_ok());
        assert!(limits.check_xml_size(200 * 1024 * 1024).is_err());
    }
}
