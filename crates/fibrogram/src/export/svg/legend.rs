//! The activation/inhibition legend box.

use svg::node::element::{Group, Path, Rectangle, Text as SvgText};

use fibrogram_core::{
    apply_stroke,
    draw::{Text, TextDefinition},
    geometry::Point,
};

use crate::semantic::InteractionKind;

use super::markers;

const SAMPLE_LENGTH: f32 = 40.0;
const ROW_HEIGHT: f32 = 22.0;
const PADDING: f32 = 10.0;
const FONT_SIZE: u16 = 12;

/// Build the two-entry legend mapping connector appearance to meaning.
///
/// Sample connectors reference the same marker definitions the figure's
/// edges use, so the legend renders identically to the real connectors.
pub(super) fn build_legend(top_left: Point) -> Box<dyn svg::Node> {
    let entries = [InteractionKind::Activation, InteractionKind::Inhibition];

    let mut text_def = TextDefinition::new();
    text_def.set_font_size(FONT_SIZE);

    let max_label_width = entries
        .iter()
        .map(|kind| Text::new(&text_def, kind.legend_label()).calculate_size().width())
        .fold(0.0, f32::max);

    let width = PADDING * 3.0 + SAMPLE_LENGTH + max_label_width;
    let height = PADDING * 2.0 + ROW_HEIGHT * entries.len() as f32;

    let frame = Rectangle::new()
        .set("x", top_left.x())
        .set("y", top_left.y())
        .set("width", width)
        .set("height", height)
        .set("fill", "white")
        .set("fill-opacity", 0.9)
        .set("stroke", "gray")
        .set("stroke-width", 1)
        .set("rx", 3.0);

    let mut group = Group::new().set("class", "legend").add(frame);

    for (row, kind) in entries.iter().enumerate() {
        let y = top_left.y() + PADDING + ROW_HEIGHT * (row as f32 + 0.5);
        let sample_start = Point::new(top_left.x() + PADDING, y);
        let sample_end = Point::new(sample_start.x() + SAMPLE_LENGTH, y);

        let stroke = kind.stroke_definition();
        let sample = Path::new()
            .set("d", markers::create_path_data(sample_start, sample_end, 0.0))
            .set("fill", "none")
            .set(
                "marker-end",
                markers::marker_reference(kind.head(), stroke.color()),
            );
        let sample = apply_stroke!(sample, stroke);

        let label = SvgText::new("")
            .set("x", sample_end.x() + PADDING)
            .set("y", y)
            .set("text-anchor", "start")
            .set("dominant-baseline", "middle")
            .set("font-family", "Arial")
            .set("font-size", FONT_SIZE)
            .add(svg::node::Text::new(kind.legend_label()));

        group = group.add(sample).add(label);
    }

    Box::new(group)
}
