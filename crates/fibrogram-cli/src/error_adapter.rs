//! Error adapter for converting FibrogramError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. None of
//! the library errors carry source spans (there is no source language to
//! point into), so the adapter supplies codes and help text only.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use fibrogram::FibrogramError;

/// Adapter wrapping a [`FibrogramError`] for miette rendering.
pub struct ErrorAdapter(pub FibrogramError);

impl fmt::Debug for ErrorAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FibrogramError::Io(_) => "fibrogram::io",
            FibrogramError::UnknownFigure(_) => "fibrogram::figure",
            FibrogramError::Graph(_) => "fibrogram::graph",
            FibrogramError::Layout(_) => "fibrogram::layout",
            FibrogramError::Export(_) => "fibrogram::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            FibrogramError::UnknownFigure(_) => Some(Box::new(
                "available figures: pathogenesis (figure1), cascade (figure2)",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_for_graph_error() {
        let adapter = ErrorAdapter(FibrogramError::Graph("boom".to_string()));
        assert_eq!(adapter.code().unwrap().to_string(), "fibrogram::graph");
        assert_eq!(adapter.to_string(), "Graph error: boom");
    }

    #[test]
    fn test_unknown_figure_has_help() {
        let adapter = ErrorAdapter(FibrogramError::UnknownFigure("figure9".to_string()));
        assert!(adapter.help().unwrap().to_string().contains("pathogenesis"));
    }

    #[test]
    fn test_no_source_code_attached() {
        let adapter = ErrorAdapter(FibrogramError::Layout("bad".to_string()));
        assert!(adapter.source_code().is_none());
        assert!(adapter.labels().is_none());
    }
}
