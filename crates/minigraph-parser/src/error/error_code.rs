//! Error codes for minigraph diagnostics.
//!
//! Codes are grouped by processing phase:
//! - `E0xx` - Document decoding errors
//! - `E1xx` - Node tree errors

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E0xx)
    // =========================================================================
    /// Invalid YAML.
    ///
    /// The input text could not be decoded as a YAML (or JSON) document.
    E001,

    /// Top level is not a mapping.
    ///
    /// A document must be a mapping with `graph`, `reverse graph`, `html`
    /// and `csv` keys.
    E002,

    /// Unsupported mapping key.
    ///
    /// Mapping keys must be strings, numbers or booleans.
    E003,

    /// Invalid auxiliary section.
    ///
    /// `html` must map names to markup trees and `csv` must map names to
    /// comma separated text.
    E004,

    /// Unknown top-level section.
    ///
    /// The key is not one of the recognised sections and is ignored.
    E005,

    // =========================================================================
    // Node Tree Errors (E1xx)
    // =========================================================================
    /// Malformed fragment.
    ///
    /// A number, boolean or null appeared where a node tree was required.
    E100,

    /// Nesting depth exceeded.
    ///
    /// The document nests deeper than the configured maximum, or deeper than
    /// the YAML decoder accepts.
    E101,

    /// Node namespace on a graph root.
    ///
    /// An edge or cascade attribute declared directly on `graph` or
    /// `reverse graph` has no node to apply to. It is passed on as a
    /// graph-level attribute with its prefix kept.
    E102,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::E005 => "E005",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "invalid YAML",
            ErrorCode::E002 => "top level is not a mapping",
            ErrorCode::E003 => "unsupported mapping key",
            ErrorCode::E004 => "invalid auxiliary section",
            ErrorCode::E005 => "unknown top-level section",
            ErrorCode::E100 => "malformed fragment",
            ErrorCode::E101 => "nesting depth exceeded",
            ErrorCode::E102 => "node namespace on a graph root",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E101.to_string(), "E101");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E100.description(), "malformed fragment");
        assert_eq!(ErrorCode::E005.description(), "unknown top-level section");
    }
}
