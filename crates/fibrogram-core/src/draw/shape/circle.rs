use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::{ShapeDefinition, ShapeKind, find_radial_intersection};
use crate::{
    apply_stroke,
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

/// Circular marker definition.
///
/// The marker is drawn as a circle whose diameter is the smaller dimension of
/// the requested size, so non-square sizes stay round.
#[derive(Debug, Clone)]
pub struct CircleDefinition {
    fill_color: Option<Color>,
    stroke: Rc<StrokeDefinition>,
}

impl CircleDefinition {
    /// Create a new circle definition with default values
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for CircleDefinition {
    fn default() -> Self {
        Self {
            fill_color: None,
            stroke: Rc::new(StrokeDefinition::new(Color::default(), 1.5)),
        }
    }
}

impl ShapeDefinition for CircleDefinition {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn find_intersection(&self, a: Point, b: Point, a_size: Size) -> Point {
        find_radial_intersection(a, b, a_size.min_dimension() / 2.0)
    }

    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        let circle = svg_element::Circle::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("r", size.min_dimension() / 2.0);

        let mut circle = apply_stroke!(circle, self.stroke);

        circle = match self.fill_color {
            Some(fill) => circle
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha()),
            None => circle.set("fill", "white"),
        };

        circle.into()
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

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_circle_kind() {
        assert_eq!(CircleDefinition::new().kind(), ShapeKind::Circle);
    }

    #[test]
    fn test_circle_intersection_on_radius() {
        let circle = CircleDefinition::new();
        let center = Point::new(50.0, 50.0);
        let external = Point::new(150.0, 50.0);

        let hit = circle.find_intersection(center, external, Size::square(40.0));
        assert_approx_eq!(f32, hit.x(), 70.0);
        assert_approx_eq!(f32, hit.y(), 50.0);
    }

    #[test]
    fn test_circle_render_contains_radius() {
        let mut circle = CircleDefinition::new();
        circle.set_fill_color(Some(Color::new("lightblue").unwrap()));

        let node = circle.render_to_svg(Size::square(40.0), Point::new(10.0, 20.0));
        let rendered = node.to_string();
        assert!(rendered.contains("r=\"20\""));
        assert!(rendered.contains("lightblue"));
    }
}
