//! Node marker shape definitions and rendering traits.
//!
//! This module provides the [`ShapeDefinition`] trait and the marker shapes
//! used for pathway nodes (circles, squares, stars). Unlike container shapes
//! in general-purpose diagram tools, pathway markers are drawn at a uniform
//! per-figure size and never wrap content; labels are rendered separately on
//! the text layer.

use std::rc::Rc;

use crate::{
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

mod circle;
mod square;
mod star;

pub use circle::CircleDefinition;
pub use square::SquareDefinition;
pub use star::StarDefinition;

/// Identifies the marker geometry of a shape definition.
///
/// Useful for classifying nodes without downcasting trait objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
    Star,
}

/// A trait for marker shape definitions that provide stateless calculations.
pub trait ShapeDefinition: std::fmt::Debug {
    /// Returns the marker geometry this definition draws.
    fn kind(&self) -> ShapeKind;

    /// Find the intersection point where a line from point a to point b
    /// intersects with this shape centered at point a with the given size.
    ///
    /// Connectors are trimmed to this point so arrowheads sit on the marker
    /// outline instead of its center.
    fn find_intersection(&self, a: Point, b: Point, a_size: Size) -> Point {
        find_rectangle_intersection(a, b, a_size)
    }

    /// Renders this shape to an SVG node element.
    ///
    /// # Arguments
    ///
    /// * `size` - The dimensions of the marker to render.
    /// * `position` - The center position of the marker.
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node>;

    /// Creates a boxed clone of this shape definition.
    fn clone_box(&self) -> Box<dyn ShapeDefinition>;

    /// Get the fill color for the marker, if any.
    fn fill_color(&self) -> Option<Color>;

    /// Set the fill color for the marker.
    fn set_fill_color(&mut self, color: Option<Color>);

    /// Get the stroke definition for the marker outline.
    fn stroke(&self) -> &Rc<StrokeDefinition>;

    /// Set the stroke definition for the marker outline.
    fn set_stroke(&mut self, stroke: Rc<StrokeDefinition>);
}

/// Enable cloning of `Box<dyn ShapeDefinition>` by delegating to the
/// clone_box method. This allows shared definitions behind `Rc` to be
/// specialized per figure.
impl Clone for Box<dyn ShapeDefinition> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Ray/axis-aligned-rectangle intersection used by square markers.
///
/// The ray starts at the rectangle center `a` and heads towards `b`; the
/// returned point lies on the first rectangle edge hit. Falls back to `b`
/// for degenerate inputs (zero-length ray, zero-size rectangle).
pub(crate) fn find_rectangle_intersection(a: Point, b: Point, a_size: Size) -> Point {
    let half_width = a_size.width() / 2.0;
    let half_height = a_size.height() / 2.0;

    let dist = b.sub_point(a);
    let length = dist.hypot();
    if length < 0.001 {
        // Avoid division by zero
        return b;
    }

    let dx_norm = dist.x() / length;
    let dy_norm = dist.y() / length;

    // Walk the four edges and keep the smallest positive ray parameter whose
    // hit point actually lies within the edge segment.
    let mut t = f32::MAX;

    for edge_y in [a.y() - half_height, a.y() + half_height] {
        let t_edge = (edge_y - a.y()) / dy_norm;
        if t_edge.is_finite() && t_edge > 0.0 && t_edge < t {
            let x = dx_norm.mul_add(t_edge, a.x());
            if (x - a.x()).abs() <= half_width {
                t = t_edge;
            }
        }
    }

    for edge_x in [a.x() - half_width, a.x() + half_width] {
        let t_edge = (edge_x - a.x()) / dx_norm;
        if t_edge.is_finite() && t_edge > 0.0 && t_edge < t {
            let y = dy_norm.mul_add(t_edge, a.y());
            if (y - a.y()).abs() <= half_height {
                t = t_edge;
            }
        }
    }

    if t == f32::MAX || !t.is_finite() {
        return b; // Fallback if no intersection found
    }

    Point::new(dx_norm.mul_add(t, a.x()), dy_norm.mul_add(t, a.y()))
}

/// Ray/circle intersection used by round-ish markers (circles and stars).
///
/// Returns the point at `radius` from `a` towards `b`, or `b` for degenerate
/// inputs.
pub(crate) fn find_radial_intersection(a: Point, b: Point, radius: f32) -> Point {
    if radius <= 0.0 {
        return b;
    }
    let direction = b.sub_point(a).normalize();
    if direction.is_zero() {
        return b;
    }
    a.add_point(direction.scale(radius))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert_approx_eq!(f32, actual.x(), expected.x());
        assert_approx_eq!(f32, actual.y(), expected.y());
    }

    #[test]
    fn test_rectangle_intersection_from_right() {
        // Ray from center (100,100) going right to (200,100)
        // Should intersect right edge at (120, 100)
        let a = Point::new(100.0, 100.0);
        let b = Point::new(200.0, 100.0);
        let size = Size::new(40.0, 40.0);

        assert_point_eq(
            find_rectangle_intersection(a, b, size),
            Point::new(120.0, 100.0),
        );
    }

    #[test]
    fn test_rectangle_intersection_from_left() {
        let a = Point::new(100.0, 100.0);
        let b = Point::new(0.0, 100.0);
        let size = Size::new(40.0, 40.0);

        assert_point_eq(
            find_rectangle_intersection(a, b, size),
            Point::new(80.0, 100.0),
        );
    }

    #[test]
    fn test_rectangle_intersection_vertical() {
        let a = Point::new(100.0, 100.0);
        let size = Size::new(40.0, 40.0);

        assert_point_eq(
            find_rectangle_intersection(a, Point::new(100.0, 200.0), size),
            Point::new(100.0, 120.0),
        );
        assert_point_eq(
            find_rectangle_intersection(a, Point::new(100.0, 0.0), size),
            Point::new(100.0, 80.0),
        );
    }

    #[test]
    fn test_rectangle_intersection_diagonal() {
        // For a square, a 45-degree diagonal hits the corner
        let a = Point::new(100.0, 100.0);
        let b = Point::new(200.0, 200.0);
        let size = Size::new(40.0, 40.0);

        assert_point_eq(
            find_rectangle_intersection(a, b, size),
            Point::new(120.0, 120.0),
        );
    }

    #[test]
    fn test_rectangle_intersection_same_point() {
        // Start and end are the same point: return b (avoid division by zero)
        let a = Point::new(100.0, 100.0);
        let b = Point::new(100.0, 100.0);
        let size = Size::new(40.0, 40.0);

        assert_point_eq(find_rectangle_intersection(a, b, size), b);
    }

    #[test]
    fn test_rectangle_intersection_zero_size() {
        // Zero-size rectangle has no valid intersection: return b
        let a = Point::new(100.0, 100.0);
        let b = Point::new(200.0, 100.0);
        let size = Size::new(0.0, 0.0);

        assert_point_eq(find_rectangle_intersection(a, b, size), b);
    }

    #[test]
    fn test_radial_intersection() {
        let a = Point::new(100.0, 100.0);
        let b = Point::new(200.0, 100.0);

        assert_point_eq(
            find_radial_intersection(a, b, 20.0),
            Point::new(120.0, 100.0),
        );
    }

    #[test]
    fn test_radial_intersection_degenerate() {
        let a = Point::new(100.0, 100.0);

        // Zero-length ray
        assert_point_eq(find_radial_intersection(a, a, 20.0), a);

        // Non-positive radius
        let b = Point::new(200.0, 100.0);
        assert_point_eq(find_radial_intersection(a, b, 0.0), b);
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn size_strategy() -> impl Strategy<Value = Size> {
        (0.0f32..1000.0, 0.0f32..1000.0).prop_map(|(w, h)| Size::new(w, h))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// The intersection result should always have finite coordinates (no NaN or infinity).
    fn check_intersection_result_is_finite(
        a: Point,
        b: Point,
        size: Size,
    ) -> Result<(), TestCaseError> {
        let result = find_rectangle_intersection(a, b, size);

        prop_assert!(result.is_finite(), "result is not finite: {result:?}");
        Ok(())
    }

    /// The intersection should either be on the rectangle boundary or equal to b (fallback).
    fn check_intersection_on_boundary_or_fallback(
        a: Point,
        b: Point,
        size: Size,
    ) -> Result<(), TestCaseError> {
        let result = find_rectangle_intersection(a, b, size);

        let half_w = size.width() / 2.0;
        let half_h = size.height() / 2.0;

        // Check if result is on any of the four edges (with tolerance)
        let on_left = approx_eq!(f32, result.x(), a.x() - half_w, epsilon = 0.1);
        let on_right = approx_eq!(f32, result.x(), a.x() + half_w, epsilon = 0.1);
        let on_top = approx_eq!(f32, result.y(), a.y() - half_h, epsilon = 0.1);
        let on_bottom = approx_eq!(f32, result.y(), a.y() + half_h, epsilon = 0.1);

        // Or check if result equals b (fallback case)
        let is_fallback = approx_eq!(f32, result.x(), b.x(), epsilon = 0.1)
            && approx_eq!(f32, result.y(), b.y(), epsilon = 0.1);

        prop_assert!(
            on_left || on_right || on_top || on_bottom || is_fallback,
            "Result {result:?} is neither on boundary of rect at {a:?} with size {size:?} nor fallback to {b:?}"
        );
        Ok(())
    }

    /// Radial intersections at positive radius should sit exactly radius away
    /// from the center (unless degenerate).
    fn check_radial_distance(a: Point, b: Point, radius: f32) -> Result<(), TestCaseError> {
        prop_assume!(b.sub_point(a).hypot() > 0.01);
        let result = find_radial_intersection(a, b, radius);

        let distance = result.sub_point(a).hypot();
        prop_assert!(approx_eq!(f32, distance, radius, epsilon = 0.01));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn intersection_result_is_finite(a in point_strategy(), b in point_strategy(), size in size_strategy()) {
            check_intersection_result_is_finite(a, b, size)?;
        }

        #[test]
        fn intersection_on_boundary_or_fallback(a in point_strategy(), b in point_strategy(), size in size_strategy()) {
            check_intersection_on_boundary_or_fallback(a, b, size)?;
        }

        #[test]
        fn radial_distance_matches_radius(a in point_strategy(), b in point_strategy(), radius in 1.0f32..500.0) {
            check_radial_distance(a, b, radius)?;
        }
    }
}
