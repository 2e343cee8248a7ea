//! Drawable Components for Diagram Rendering
//!
//! This module provides the visual definitions used to render pathway
//! diagrams: node marker shapes, stroke styles, text, and the layer system
//! that keeps SVG output in a stable z-order.
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are automatically
//! ordered during final SVG generation.

mod layer;
mod shape;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use shape::{CircleDefinition, ShapeDefinition, ShapeKind, SquareDefinition, StarDefinition};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeStyle};
pub use text::{Text, TextDefinition};

use crate::geometry::{Point, Size};

/// Trait for drawable diagram elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// Implementations should create SVG nodes and add them to appropriate
    /// layers in the returned [`LayeredOutput`]. Simple drawables typically
    /// emit to a single layer, while complex drawables can emit different
    /// elements to different layers for proper z-ordering.
    ///
    /// # Arguments
    ///
    /// * `position` - The position where this drawable should be rendered
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size of this drawable.
    fn size(&self) -> Size;
}
