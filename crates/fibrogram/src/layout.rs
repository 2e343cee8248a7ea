//! Positioning of author-space coordinates into SVG space.
//!
//! There is no layout computation in this pipeline — node positions are
//! hand-authored constants. This stage only applies the affine map between
//! the figures' mathematical y-up space and SVG's y-down space: a uniform
//! scale and a vertical flip. Centering within the final document is applied
//! by the export stage as a group transform, so positions here are allowed
//! to be negative.

use indexmap::IndexMap;

use fibrogram_core::{
    draw::Text,
    geometry::{Bounds, Point, Size},
    identifier::Id,
};

use crate::{config::LayoutConfig, error::FibrogramError, semantic::Pathway};

/// Scaled SVG-space positions for every node, plus the content bounds
/// covering markers and labels.
#[derive(Debug)]
pub struct Layout {
    positions: IndexMap<Id, Point>,
    content_bounds: Bounds,
}

impl Layout {
    /// Map every node position into SVG space and accumulate the content
    /// bounds.
    ///
    /// # Errors
    ///
    /// Returns [`FibrogramError::Layout`] if a node carries a non-finite
    /// coordinate.
    pub fn compute(pathway: &Pathway, config: &LayoutConfig) -> Result<Self, FibrogramError> {
        let mut positions = IndexMap::with_capacity(pathway.node_count());
        let marker_size = Size::square(pathway.node_size());
        let mut content_bounds: Option<Bounds> = None;

        for node in pathway.nodes() {
            let author = node.position();
            if !author.is_finite() {
                return Err(FibrogramError::Layout(format!(
                    "node `{}` has a non-finite position",
                    node.id()
                )));
            }

            // Uniform scale, y flipped from math space to SVG space
            let position = Point::new(author.x() * config.scale, -author.y() * config.scale);
            positions.insert(node.id(), position);

            // Content extent covers the marker and the measured label
            let label_size = Text::new(pathway.label_text(), node.label()).calculate_size();
            let node_bounds = position
                .to_bounds(marker_size)
                .merge(&position.to_bounds(label_size));

            content_bounds = Some(match content_bounds {
                Some(bounds) => bounds.merge(&node_bounds),
                None => node_bounds,
            });
        }

        Ok(Self {
            positions,
            content_bounds: content_bounds.unwrap_or_default(),
        })
    }

    /// The SVG-space position of a node, if it exists.
    pub fn position(&self, id: Id) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    /// The bounds covering all markers and labels, before centering.
    pub fn content_bounds(&self) -> Bounds {
        self.content_bounds
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use fibrogram_core::draw::{CircleDefinition, ShapeDefinition};

    use super::*;
    use crate::semantic::Node;

    fn circle() -> Rc<Box<dyn ShapeDefinition>> {
        Rc::new(Box::new(CircleDefinition::new()))
    }

    #[test]
    fn test_scale_and_flip() {
        let mut pathway = Pathway::new("test");
        pathway.add_node(Node::new("up", Point::new(2.0, 3.0), circle()));
        pathway.add_node(Node::new("down", Point::new(2.0, -3.0), circle()));

        let layout = Layout::compute(&pathway, &LayoutConfig::default()).unwrap();

        let up = layout.position(Id::new("up")).unwrap();
        let down = layout.position(Id::new("down")).unwrap();

        assert_eq!(up.x(), 120.0);
        assert_eq!(up.y(), -180.0);
        // The node that is higher in author space is higher (smaller y) in SVG space
        assert!(up.y() < down.y());
    }

    #[test]
    fn test_bounds_cover_markers() {
        let mut pathway = Pathway::new("test");
        pathway.set_node_size(40.0);
        pathway.add_node(Node::new("only", Point::new(0.0, 0.0), circle()));

        let layout = Layout::compute(&pathway, &LayoutConfig::default()).unwrap();
        let bounds = layout.content_bounds();

        assert!(bounds.width() >= 40.0);
        assert!(bounds.height() >= 40.0);
    }

    #[test]
    fn test_non_finite_position_is_an_error() {
        let mut pathway = Pathway::new("test");
        pathway.add_node(Node::new("bad", Point::new(f32::NAN, 0.0), circle()));

        let err = Layout::compute(&pathway, &LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, FibrogramError::Layout(_)));
    }

    #[test]
    fn test_empty_pathway_has_default_bounds() {
        let pathway = Pathway::new("empty");
        let layout = Layout::compute(&pathway, &LayoutConfig::default()).unwrap();
        assert!(layout.content_bounds().to_size().is_zero());
    }

    #[test]
    fn test_missing_node_position() {
        let pathway = Pathway::new("empty");
        let layout = Layout::compute(&pathway, &LayoutConfig::default()).unwrap();
        assert!(layout.position(Id::new("nowhere")).is_none());
    }
}
