use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::{ShapeDefinition, ShapeKind};
use crate::{
    apply_stroke,
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

/// Square/rectangular marker definition.
#[derive(Debug, Clone)]
pub struct SquareDefinition {
    fill_color: Option<Color>,
    stroke: Rc<StrokeDefinition>,
}

impl SquareDefinition {
    /// Create a new square definition with default values
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for SquareDefinition {
    fn default() -> Self {
        Self {
            fill_color: None,
            stroke: Rc::new(StrokeDefinition::new(Color::default(), 1.5)),
        }
    }
}

impl ShapeDefinition for SquareDefinition {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    // Connector trimming uses the default rectangle intersection.

    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        // position is the center of the marker
        let bounds = position.to_bounds(size);

        let rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", size.width())
            .set("height", size.height());

        let mut rect = apply_stroke!(rect, self.stroke);

        rect = match self.fill_color {
            Some(fill) => rect
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha()),
            None => rect.set("fill", "white"),
        };

        rect.into()
    }

    fn clone_box(&self) -> Box<dyn ShapeDefinition> {
        Box::new(self.clone())
    }

    fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    fn set_fill_color(&mut self, color: Option<Color>) {
        self.fill_color = color;
    }

    fn stroke(&self) -> &Rc<StrokeDefinition> {
        &self.stroke
    }

    fn set_stroke(&mut self, stroke: Rc<StrokeDefinition>) {
        self.stroke = stroke;
    }
}
