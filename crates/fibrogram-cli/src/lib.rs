//! Fibrogram CLI library
//!
//! This module contains the core CLI logic for the Fibrogram diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use error_adapter::ErrorAdapter;

use std::fs;

use log::info;

use fibrogram::{FibrogramError, PathwayRenderer, figures::Figure};

/// Run the Fibrogram CLI application
///
/// This function builds the selected figure, renders it through the
/// Fibrogram pipeline, and writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `FibrogramError` for:
/// - An unknown figure name
/// - Configuration loading errors
/// - Validation, layout, or rendering errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), FibrogramError> {
    info!(
        figure = args.figure,
        output_path = args.output;
        "Rendering figure"
    );

    // Resolve the figure name
    let figure: Figure = args.figure.parse()?;

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Build and render the pathway
    let pathway = figure.build();
    let renderer = PathwayRenderer::new(app_config);
    let svg = renderer.render_svg(&pathway)?;

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
