//! The core diagnostic type.
//!
//! A [`Diagnostic`] is a single error or warning about an input document.
//! Decoded documents carry no source positions, so a diagnostic points at the
//! offending fragment through its [`FragmentPath`] instead of a span.

use std::fmt;

use crate::{error::ErrorCode, path::FragmentPath};

/// The severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Processing cannot produce a graph.
    Error,
    /// Something was ignored; processing continues.
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A diagnostic message about a document fragment.
///
/// # Example
///
/// ```text
/// error[E101]: nesting depth exceeds the limit of 64
///   at: graph > a > b > c > ...
///   help: flatten the document or raise `limits.max_depth`
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    path: Option<FragmentPath>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Location of the offending fragment, if known.
    pub fn path(&self) -> Option<&FragmentPath> {
        self.path.as_ref()
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_path(mut self, path: FragmentPath) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            path: None,
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "error[E100]: message" or "warning: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_defaults() {
        let diag = Diagnostic::error("bad fragment");

        assert!(diag.severity().is_error());
        assert!(!diag.severity().is_warning());
        assert_eq!(diag.message(), "bad fragment");
        assert!(diag.code().is_none());
        assert!(diag.path().is_none());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_builder_chain() {
        let path = FragmentPath::root().child("graph").index(2);
        let diag = Diagnostic::error("nesting too deep")
            .with_code(ErrorCode::E101)
            .with_path(path.clone())
            .with_help("raise the limit");

        assert_eq!(diag.code(), Some(ErrorCode::E101));
        assert_eq!(diag.path(), Some(&path));
        assert_eq!(diag.help(), Some("raise the limit"));
    }

    #[test]
    fn test_display_with_code() {
        let diag = Diagnostic::error("top level is not a mapping").with_code(ErrorCode::E002);
        assert_eq!(diag.to_string(), "error[E002]: top level is not a mapping");
    }

    #[test]
    fn test_display_warning_without_code() {
        let diag = Diagnostic::warning("section ignored");
        assert_eq!(diag.to_string(), "warning: section ignored");
    }
}
