//! Arrowhead marker definitions and connector path construction.

use svg::node::element::{Definitions, Marker, Path};

use fibrogram_core::{apply_stroke, color::Color, geometry::Point};

use crate::semantic::{ArrowHead, Interaction};

/// Creates marker definitions for connector arrowheads, one triangle and one
/// bar marker per color in use.
pub(super) fn create_marker_definitions<'a, I>(colors: I) -> Definitions
where
    I: Iterator<Item = &'a Color>,
{
    let mut defs = Definitions::new();

    for color in colors {
        // Filled triangle head for activation edges
        let triangle = Marker::new()
            .set("id", triangle_id(*color))
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 7)
            .set("markerHeight", 7)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color.to_string()),
            );

        // Perpendicular bar head for inhibition edges
        let bar = Marker::new()
            .set("id", bar_id(*color))
            .set("viewBox", "0 0 10 10")
            .set("refX", 5)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 8)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 5 0 L 5 10")
                    .set("fill", "none")
                    .set("stroke", color.to_string())
                    .set("stroke-width", 2),
            );

        defs = defs.add(triangle).add(bar);
    }

    defs
}

fn triangle_id(color: Color) -> String {
    format!("head-triangle-{}", color.to_id_safe_string())
}

fn bar_id(color: Color) -> String {
    format!("head-bar-{}", color.to_id_safe_string())
}

/// Get the `marker-end` reference for an arrowhead in a specific color.
pub(super) fn marker_reference(head: ArrowHead, color: Color) -> String {
    match head {
        ArrowHead::Triangle => format!("url(#{})", triangle_id(color)),
        ArrowHead::Bar => format!("url(#{})", bar_id(color)),
    }
}

/// Create a path data string for a connector.
///
/// A zero curvature draws a straight segment. A non-zero curvature bows the
/// connector sideways with a quadratic curve whose control point sits at the
/// chord midpoint, displaced perpendicular to the chord by `curvature` times
/// its length. Opposite-direction connectors between the same pair bow to
/// opposite sides automatically, since the chord direction flips.
pub(super) fn create_path_data(start: Point, end: Point, curvature: f32) -> String {
    if curvature == 0.0 {
        return format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y());
    }

    let control = start
        .midpoint(end)
        .add_point(end.sub_point(start).perpendicular().scale(curvature));

    format!(
        "M {} {} Q {} {}, {} {}",
        start.x(),
        start.y(),
        control.x(),
        control.y(),
        end.x(),
        end.y()
    )
}

/// Create the connector path for an interaction, with its stroke and
/// arrowhead applied.
pub(super) fn create_path(
    start: Point,
    end: Point,
    interaction: &Interaction,
    curvature: f32,
) -> Path {
    let stroke = interaction.stroke();
    let path = Path::new()
        .set("class", "interaction")
        .set("d", create_path_data(start, end, curvature))
        .set("fill", "none")
        .set(
            "marker-end",
            marker_reference(interaction.kind().head(), stroke.color()),
        );

    apply_stroke!(path, stroke)
}
