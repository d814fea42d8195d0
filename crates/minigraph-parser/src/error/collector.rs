//! Collector for accumulating diagnostics while decoding a document.
//!
//! Decoding keeps going after a recoverable problem so that every bad key and
//! every bad auxiliary section is reported in one run.

use log::warn;

use crate::error::{Diagnostic, ParseError};

#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic, remembering whether any error was seen.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection.
    ///
    /// - If any error was emitted, returns `Err(ParseError)` with all diagnostics.
    /// - Otherwise logs the warnings and returns them.
    pub fn finish(self) -> Result<Vec<Diagnostic>, ParseError> {
        if self.has_errors {
            return Err(ParseError::new(self.diagnostics));
        }

        for diagnostic in &self.diagnostics {
            match diagnostic.path() {
                Some(path) => warn!(path = path.to_string(); "{diagnostic}"),
                None => warn!("{diagnostic}"),
            }
        }
        Ok(self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_empty_collector_is_ok() {
        let collector = DiagnosticCollector::new();
        assert_eq!(collector.finish(), Ok(Vec::new()));
    }

    #[test]
    fn test_warnings_only_are_returned() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::warning("ignored").with_code(ErrorCode::E005));

        let warnings = collector.finish().expect("warnings are not fatal");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code(), Some(ErrorCode::E005));
    }

    #[test]
    fn test_errors_keep_every_diagnostic() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::error("first"));
        collector.emit(Diagnostic::warning("note"));
        collector.emit(Diagnostic::error("second"));

        assert!(collector.has_errors);
        let err = collector.finish().unwrap_err();
        assert_eq!(err.diagnostics().len(), 3);
        assert_eq!(err.diagnostics()[2].message(), "second");
    }
}
