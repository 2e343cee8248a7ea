//! Command-line argument definitions for the Fibrogram CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control figure selection, the output path,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Fibrogram diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Figure to render: `pathogenesis` (figure1) or `cascade` (figure2)
    #[arg(help = "Figure to render (pathogenesis, cascade)")]
    pub figure: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
