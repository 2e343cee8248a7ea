use std::{f32::consts, rc::Rc};

use svg::{self, node::element as svg_element};

use super::{ShapeDefinition, ShapeKind, find_radial_intersection};
use crate::{
    apply_stroke,
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

/// Number of spikes on the star polygon.
const SPIKES: usize = 5;

/// Inner vertex radius as a fraction of the outer radius.
const INNER_RATIO: f32 = 0.45;

/// Connector trim radius as a fraction of the outer radius.
///
/// Sits between the inner and outer vertices so arrowheads land on the
/// star's visual edge rather than a spike tip or deep in a notch.
const TRIM_RATIO: f32 = 0.8;

/// Five-pointed star marker definition.
#[derive(Debug, Clone)]
pub struct StarDefinition {
    fill_color: Option<Color>,
    stroke: Rc<StrokeDefinition>,
}

impl StarDefinition {
    /// Create a new star definition with default values
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for StarDefinition {
    fn default() -> Self {
        Self {
            fill_color: None,
            stroke: Rc::new(StrokeDefinition::new(Color::default(), 1.5)),
        }
    }
}

/// Builds the SVG polygon points string for a five-pointed star.
///
/// Vertices alternate between the outer and inner radius, starting from the
/// upward-pointing spike.
fn star_points(center: Point, outer_radius: f32) -> String {
    let inner_radius = outer_radius * INNER_RATIO;

    (0..SPIKES * 2)
        .map(|i| {
            let radius = if i % 2 == 0 {
                outer_radius
            } else {
                inner_radius
            };
            let angle = consts::PI * i as f32 / SPIKES as f32 - consts::FRAC_PI_2;
            format!(
                "{},{}",
                center.x() + radius * angle.cos(),
                center.y() + radius * angle.sin()
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl ShapeDefinition for StarDefinition {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Star
    }

    fn find_intersection(&self, a: Point, b: Point, a_size: Size) -> Point {
        find_radial_intersection(a, b, a_size.min_dimension() / 2.0 * TRIM_RATIO)
    }

    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        let polygon = svg_element::Polygon::new()
            .set("points", star_points(position, size.min_dimension() / 2.0));

        let mut polygon = apply_stroke!(polygon, self.stroke);

        polygon = match self.fill_color {
            Some(fill) => polygon
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha()),
            None => polygon.set("fill", "white"),
        };

        polygon.into()
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
