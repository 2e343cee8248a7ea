//! Fibrogram - pathway diagrams for pulmonary fibrosis signaling
//!
//! This library models two static node-link figures — the pathogenesis
//! interaction web and the QPCTL-inhibitor effect cascade — and renders them
//! to SVG. Graph content is hand-authored constant data; the pipeline
//! validates it, positions it, and draws it.

pub mod config;
pub mod figures;
pub mod semantic;
pub mod structure;

mod error;
mod export;
mod layout;

pub use fibrogram_core::{color, draw, geometry, identifier};

pub use error::FibrogramError;

use log::{debug, info};

use config::AppConfig;

/// Renderer for pathway figures.
///
/// This ties the pipeline stages together: structural validation, layout,
/// and SVG export.
///
/// # Examples
///
/// ```rust,no_run
/// use fibrogram::{PathwayRenderer, config::AppConfig, figures::Figure};
///
/// let pathway = Figure::Pathogenesis.build();
///
/// let renderer = PathwayRenderer::new(AppConfig::default());
/// let svg = renderer.render_svg(&pathway)
///     .expect("Failed to render");
///
/// println!("{}", svg);
/// ```
#[derive(Default)]
pub struct PathwayRenderer {
    config: AppConfig,
}

impl PathwayRenderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Render a pathway to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `FibrogramError` when an interaction references an undefined
    /// node, a position is not finite, or the configured style is invalid.
    pub fn render_svg(&self, pathway: &semantic::Pathway) -> Result<String, FibrogramError> {
        info!(title = pathway.title(); "Building pathway structure");
        let structure = structure::PathwayGraph::from_pathway(pathway)?;
        debug!("Structure built successfully");

        let layout = layout::Layout::compute(pathway, &self.config.layout)?;
        info!("Layout calculated");

        let document =
            export::svg::SvgRenderer::new(pathway, &structure, &layout, &self.config).render()?;

        info!("SVG rendered successfully");
        Ok(document.to_string())
    }
}
