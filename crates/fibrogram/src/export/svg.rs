//! SVG document assembly.
//!
//! The renderer walks the pathway once per concern — markers, connectors,
//! labels — collecting everything into layered output, then centers the
//! content with a single group transform. Title and legend are drawn in
//! document coordinates, outside the content transform.

mod legend;
mod markers;

use log::debug;
use svg::{
    Document,
    node::element::{Group, Rectangle, Text as SvgText},
};

use fibrogram_core::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, Text, TextDefinition},
    geometry::{Point, Size},
    identifier::Id,
};

use crate::{
    config::AppConfig,
    error::FibrogramError,
    layout::Layout,
    semantic::{InteractionKind, Pathway},
    structure::PathwayGraph,
};

/// Bow applied to straight-connector figures when a reverse pair would
/// otherwise overlap exactly.
const REVERSE_PAIR_CURVATURE: f32 = 0.1;

const TITLE_FONT_SIZE: u16 = 14;

/// Renders a validated, positioned pathway into an SVG document.
pub(crate) struct SvgRenderer<'a> {
    pathway: &'a Pathway,
    structure: &'a PathwayGraph<'a>,
    layout: &'a Layout,
    config: &'a AppConfig,
}

impl<'a> SvgRenderer<'a> {
    pub(crate) fn new(
        pathway: &'a Pathway,
        structure: &'a PathwayGraph<'a>,
        layout: &'a Layout,
        config: &'a AppConfig,
    ) -> Self {
        Self {
            pathway,
            structure,
            layout,
            config,
        }
    }

    pub(crate) fn render(&self) -> Result<Document, FibrogramError> {
        let margin = self.config.layout.margin;
        let content_bounds = self.layout.content_bounds();
        let content_size = content_bounds.to_size();

        // A narrow figure must still fit its title
        let mut title_def = TextDefinition::new();
        title_def.set_font_size(TITLE_FONT_SIZE);
        let title_size = Text::new(&title_def, self.pathway.title()).calculate_size();

        let doc_width = (content_size.width() + margin * 2.0).max(title_size.width() + margin);
        let doc_height = content_size.height() + margin * 2.0;

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {doc_width} {doc_height}"))
            .set("width", doc_width)
            .set("height", doc_height);

        doc = doc.add(markers::create_marker_definitions(
            self.connector_colors().iter(),
        ));

        if let Some(background) = self.config.style.background_color()? {
            let rect = Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", doc_width)
                .set("height", doc_height)
                .set("fill", background.to_string());
            doc = doc.add(rect);
        }

        // Content renders into layers, then is centered with one transform
        let mut output = LayeredOutput::new();
        self.render_nodes(&mut output)?;
        self.render_interactions(&mut output)?;

        let offset_x = (doc_width - content_size.width()) / 2.0 - content_bounds.min_x();
        let offset_y = margin - content_bounds.min_y();
        let mut content_group =
            Group::new().set("transform", format!("translate({offset_x}, {offset_y})"));
        for node in output.render() {
            content_group = content_group.add(node);
        }
        doc = doc.add(content_group);

        // Title and legend live in document coordinates
        let mut annotations = LayeredOutput::new();
        self.render_title(doc_width, margin, &mut annotations);
        if self.pathway.has_legend() {
            annotations.add_to_layer(
                RenderLayer::Annotation,
                legend::build_legend(Point::new(16.0, 16.0)),
            );
        }
        for node in annotations.render() {
            doc = doc.add(node);
        }

        debug!(
            width = doc_width,
            height = doc_height;
            "SVG document assembled"
        );
        Ok(doc)
    }

    /// Every stroke color connectors may reference, including the legend's
    /// sample connectors when the legend is enabled.
    fn connector_colors(&self) -> Vec<Color> {
        let mut colors: Vec<Color> = Vec::new();

        for interaction in self.pathway.interactions() {
            let color = interaction.stroke().color();
            if !colors.contains(&color) {
                colors.push(color);
            }
        }

        if self.pathway.has_legend() {
            for kind in [InteractionKind::Activation, InteractionKind::Inhibition] {
                let color = kind.default_color();
                if !colors.contains(&color) {
                    colors.push(color);
                }
            }
        }

        colors
    }

    fn render_nodes(&self, output: &mut LayeredOutput) -> Result<(), FibrogramError> {
        let marker_size = Size::square(self.pathway.node_size());

        for node in self.pathway.nodes() {
            let position = self.node_position(node.id())?;

            let marker_group = Group::new()
                .set("class", "node")
                .add(node.shape().render_to_svg(marker_size, position));
            output.add_to_layer(RenderLayer::Content, Box::new(marker_group));

            let label = Text::new(self.pathway.label_text(), node.label());
            output.merge(label.render_to_layers(position));
        }

        Ok(())
    }

    fn render_interactions(&self, output: &mut LayeredOutput) -> Result<(), FibrogramError> {
        let marker_size = Size::square(self.pathway.node_size());

        for interaction in self.pathway.interactions() {
            let source = self.node(interaction.source())?;
            let target = self.node(interaction.target())?;

            let source_position = self.node_position(source.id())?;
            let target_position = self.node_position(target.id())?;

            // Trim both ends to the marker outlines so heads sit on the edge
            let start =
                source
                    .shape()
                    .find_intersection(source_position, target_position, marker_size);
            let end =
                target
                    .shape()
                    .find_intersection(target_position, source_position, marker_size);

            let curvature =
                if self.pathway.curvature() == 0.0 && self.structure.has_reverse(interaction) {
                    REVERSE_PAIR_CURVATURE
                } else {
                    self.pathway.curvature()
                };

            output.add_to_layer(
                RenderLayer::Arrow,
                Box::new(markers::create_path(start, end, interaction, curvature)),
            );
        }

        Ok(())
    }

    fn render_title(&self, doc_width: f32, margin: f32, output: &mut LayeredOutput) {
        if self.pathway.title().is_empty() {
            return;
        }

        let title = SvgText::new("")
            .set("class", "title")
            .set("x", doc_width / 2.0)
            .set("y", margin / 2.0)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", "Arial")
            .set("font-size", TITLE_FONT_SIZE)
            .add(svg::node::Text::new(self.pathway.title()));

        output.add_to_layer(RenderLayer::Annotation, Box::new(title));
    }

    fn node(&self, id: Id) -> Result<&crate::semantic::Node, FibrogramError> {
        self.pathway
            .node(id)
            .ok_or_else(|| FibrogramError::Graph(format!("unknown node `{id}` during rendering")))
    }

    fn node_position(&self, id: Id) -> Result<Point, FibrogramError> {
        self.layout
            .position(id)
            .ok_or_else(|| FibrogramError::Layout(format!("no position computed for node `{id}`")))
    }
}
