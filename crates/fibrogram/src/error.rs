//! Error types for Fibrogram operations.
//!
//! This module provides the main error type [`FibrogramError`] which wraps
//! the error conditions that can occur while building and rendering pathway
//! figures.

use std::io;

use thiserror::Error;

/// The main error type for Fibrogram operations.
///
/// The dataset is fixed at authoring time, so most variants indicate either
/// an environment problem (`Io`) or an authoring mistake that the structure
/// and layout stages surface before anything is drawn.
#[derive(Debug, Error)]
pub enum FibrogramError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("unknown figure `{0}` (expected `pathogenesis` or `cascade`)")]
    UnknownFigure(String),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<fibrogram_core::color::ColorError> for FibrogramError {
    fn from(error: fibrogram_core::color::ColorError) -> Self {
        Self::Export(Box::new(error))
    }
}
