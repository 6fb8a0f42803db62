//! Error adapter for converting RadarError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Malformed JSON is
//! reported with a label pointing at the offending position in the document.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use techradar::RadarError;

/// Adapter implementing [`MietteDiagnostic`] for a [`RadarError`].
pub struct ErrorAdapter<'a>(pub &'a RadarError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.0 {
            // The JSON error text is already part of the message.
            RadarError::Json { .. } => None,
            other => std::error::Error::source(other),
        }
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            RadarError::Io(_) => "techradar::io",
            RadarError::Read { .. } => "techradar::read",
            RadarError::Json { .. } => "techradar::json",
            RadarError::Validation(_) => "techradar::validation",
            RadarError::Export(_) => "techradar::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            RadarError::Validation(_) => {
                "fix the radar document; every entry needs Name, Quadrant, Ring, Link, Moved, \
                 Description, Tags, Downloads, Forks, Activity Metric and Languages"
            }
            RadarError::Read { .. } => {
                "check the input path, or use --data-root and --mode to locate the document"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.0 {
            RadarError::Json { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let RadarError::Json { err, src } = self.0 else {
            return None;
        };
        let offset = json_error_offset(src, err.line(), err.column());
        let span = SourceSpan::new(offset.into(), 0);
        let label = LabeledSpan::new_primary_with_span(Some("here".to_string()), span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Byte offset of a 1-based `line`/`column` position in `src`, clamped to
/// the end of the text.
fn json_error_offset(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(src.len())
}

/// Convert a [`RadarError`] into a reportable miette diagnostic.
pub fn to_reportable(err: &RadarError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use techradar::RadarBuilder;

    use super::*;

    #[test]
    fn test_json_error_has_label() {
        let err = RadarBuilder::default()
            .parse("{\n  \"rings\": [,]\n}", "")
            .unwrap_err();
        let adapter = to_reportable(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "techradar::json");
        assert!(adapter.source_code().is_some());
        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        // The label lands on the second line.
        assert!((2..17).contains(&labels[0].offset()));
    }

    #[test]
    fn test_validation_error_has_help() {
        let err = RadarBuilder::default()
            .parse(r#"{ "rings": [{ "name": "Adopt" }] }"#, "")
            .unwrap_err();
        let adapter = to_reportable(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "techradar::validation");
        assert!(adapter.help().is_some());
        assert!(adapter.labels().is_none());
    }

    #[test]
    fn test_io_error_code() {
        let err = RadarError::Io(std::io::Error::other("boom"));
        let adapter = to_reportable(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "techradar::io");
        assert_eq!(adapter.to_string(), "I/O error: boom");
    }

    #[test]
    fn test_json_error_offset() {
        let src = "ab\ncd\nef";
        assert_eq!(json_error_offset(src, 1, 1), 0);
        assert_eq!(json_error_offset(src, 2, 2), 4);
        assert_eq!(json_error_offset(src, 3, 9), src.len());
    }
}
