//! Text rendering definitions for diagram labels and annotations.
//!
//! This module provides types for configuring text appearance and rendering
//! text elements in diagrams. Text is rendered as SVG `<text>` elements with
//! optional background rectangles.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable text element combining content with a [`TextDefinition`]
//!
//! Multi-line content (node labels embed `\n`) renders as one `<tspan>` per
//! line, vertically centered on the anchor position.

use std::sync::{Arc, Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use log::info;
use svg::{self, node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Insets, Point, Size},
};

/// Defines the visual style for text elements in diagrams.
///
/// `TextDefinition` configures font properties, colors, and padding for text
/// rendered in node labels, titles, and the legend. Multiple [`Text`]
/// elements can share the same definition for consistent styling.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `12` |
/// | Bold | `false` |
/// | Background color | `None` |
/// | Text color | `None` (SVG default, typically black) |
/// | Padding | Zero on all sides |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    bold: bool,
    background_color: Option<Color>,
    color: Option<Color>,
    padding: Insets,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family for the text.
    ///
    /// # Arguments
    ///
    /// * `family` - The font family name (e.g., "Arial", "monospace")
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets whether the text renders with a bold weight.
    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    /// Sets the background color for the text.
    ///
    /// When set to `Some(color)`, text will be rendered with a rounded
    /// rectangle background in the specified color. When set to `None`, no
    /// background will be rendered.
    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    /// Sets the text color for the text content.
    ///
    /// When `None`, the default text color (usually black) is used.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets the padding around the text content.
    ///
    /// Padding affects the size of the background rectangle (if present) and
    /// the overall size calculations.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    fn font_size(&self) -> u16 {
        self.font_size
    }

    fn font_family(&self) -> &str {
        &self.font_family
    }

    fn is_bold(&self) -> bool {
        self.bold
    }

    fn background_color(&self) -> Option<&Color> {
        self.background_color.as_ref()
    }

    fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    fn padding(&self) -> Insets {
        self.padding
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 12,
            bold: false,
            background_color: None,
            color: None,
            padding: Insets::default(),
        }
    }
}

/// A renderable text element combining content with styling.
///
/// `Text` pairs a string value with a [`TextDefinition`] to produce a
/// measurable and renderable text element. It is used for node labels,
/// the figure title, and legend entries.
///
/// # Examples
///
/// ```
/// # use fibrogram_core::draw::{TextDefinition, Text};
/// let style = TextDefinition::new();
/// let text = Text::new(&style, "Myofibroblasts");
///
/// let size = text.calculate_size();
/// assert!(size.width() > 0.0);
/// assert!(size.height() > 0.0);
/// assert_eq!(text.content(), "Myofibroblasts");
/// ```
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    /// Creates a new text element with the given definition and content.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Calculate the total size required to display this text, including padding.
    pub fn calculate_size(&self) -> Size {
        let padding = self.definition.padding();
        self.calculate_size_without_padding().add_padding(padding)
    }

    /// Calculate the size required to display this text content without padding.
    fn calculate_size_without_padding(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.definition)
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let text_size = self.calculate_size();
        let padding = self.definition.padding();

        let lines: Vec<&str> = self.content.lines().collect();

        // Uniform line height from the measured total
        let text_size_without_padding = self.calculate_size_without_padding();
        let line_height = if lines.is_empty() {
            0.0
        } else {
            text_size_without_padding.height() / lines.len() as f32
        };

        let total_height = text_size_without_padding.height();
        let y_offset = -(total_height + line_height) / 2.0;

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y() + y_offset)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if self.definition.is_bold() {
            rendered_text = rendered_text.set("font-weight", "bold");
        }

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        for line in lines {
            let tspan = svg_element::TSpan::new("")
                .set("x", position.x())
                .set("dy", line_height)
                .add(SvgText::new(line));
            rendered_text = rendered_text.add(tspan);
        }

        // Add background rectangle if color is specified
        if let Some(bg_color) = self.definition.background_color() {
            let bg_bounds = position.to_bounds(text_size).add_padding(padding);
            let bg_size = bg_bounds.to_size();
            let bg_min_point = bg_bounds.min_point();

            let bg = svg_element::Rectangle::new()
                .set("x", bg_min_point.x())
                .set("y", bg_min_point.y())
                .set("width", bg_size.width())
                .set("height", bg_size.height())
                .set("fill", bg_color.to_string())
                .set("fill-opacity", bg_color.alpha())
                .set("rx", 3.0);

            output.add_to_layer(RenderLayer::Background, Box::new(bg));
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

/// TextManager handles text measurement and font operations
/// It maintains a reusable FontSystem instance to avoid expensive recreation
struct TextManager {
    font_system: Arc<Mutex<FontSystem>>,
}

impl TextManager {
    /// Create a new TextManager with a default FontSystem
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Calculate the actual size of text in pixels using cosmic-text.
    ///
    /// This provides a measurement based on real font metrics and shaping,
    /// including proper handling of ligatures and kerning.
    ///
    /// # Returns
    ///
    /// The calculated size in pixels, or a heuristic estimate if shaping
    /// produced no layout runs.
    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        // Convert font size from points to pixels (roughly 1.33x multiplier for standard DPI)
        let font_size_px = text_def.font_size() as f32 * 1.33;
        let line_height = font_size_px * 1.15;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let mut attrs = Attrs::new().family(Family::Name(text_def.font_family()));
        if text_def.is_bold() {
            attrs = attrs.weight(Weight::BOLD);
        }

        // Unlimited buffer size so text flows naturally
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        // Walk layout runs to determine the actual rendered extent
        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        let has_glyphs = layout_runs.iter().any(|run| !run.glyphs.is_empty());
        if has_glyphs {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                if let Some(last) = last {
                    let run_width = last.x + last.w;
                    max_width = max_width.max(run_width);
                }
                total_height += metrics.line_height;
            }
        } else {
            // Heuristic estimate when no font produced glyphs
            let line_count = text.lines().count().max(1);
            let longest_line = text.lines().map(str::len).max().unwrap_or(0);
            max_width = longest_line as f32 * (font_size_px * 0.55);
            total_height = metrics.line_height * line_count as f32;
        }

        Size::new(max_width, total_height)
    }
}

// Shared instance so the FontSystem is only constructed once per process
static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::new();
        assert_eq!(def.font_size(), 12);
        assert_eq!(def.font_family(), "Arial");
        assert!(!def.is_bold());
        assert!(def.background_color().is_none());
        assert!(def.color().is_none());
    }

    #[test]
    fn test_text_definition_setters() {
        let mut def = TextDefinition::new();
        def.set_font_size(14);
        def.set_font_family("Helvetica");
        def.set_bold(true);
        def.set_padding(Insets::uniform(4.0));

        assert_eq!(def.font_size(), 14);
        assert_eq!(def.font_family(), "Helvetica");
        assert!(def.is_bold());
        assert_eq!(def.padding().horizontal_sum(), 8.0);
    }

    #[test]
    fn test_text_measures_nonzero() {
        let def = TextDefinition::new();
        let text = Text::new(&def, "Inflammation");

        let size = text.calculate_size();
        assert!(size.width() > 0.0);
        assert!(size.height() > 0.0);
    }

    #[test]
    fn test_empty_text_measures_zero() {
        let def = TextDefinition::new();
        let text = Text::new(&def, "");

        assert!(text.calculate_size().is_zero());
    }

    #[test]
    fn test_multiline_text_is_taller() {
        let def = TextDefinition::new();
        let single = Text::new(&def, "Reduced CD47 Modification").calculate_size();
        let multi = Text::new(&def, "Reduced CD47\nModification").calculate_size();

        assert!(multi.height() > single.height());
        assert!(multi.width() < single.width());
    }

    #[test]
    fn test_render_multiline_emits_tspan_per_line() {
        let def = TextDefinition::new();
        let text = Text::new(&def, "Macrophage\nOveractivation");

        let nodes = text.render_to_layers(Point::new(50.0, 50.0)).render();
        let rendered: String = nodes.iter().map(|n| n.to_string()).collect();

        assert_eq!(rendered.matches("<tspan").count(), 2);
        assert!(rendered.contains("Macrophage"));
        assert!(rendered.contains("Overactivation"));
    }

    #[test]
    fn test_render_background_layer() {
        let mut def = TextDefinition::new();
        def.set_background_color(Some(Color::new("white").unwrap()));
        def.set_padding(Insets::uniform(5.0));

        let text = Text::new(&def, "Legend");
        let output = text.render_to_layers(Point::new(0.0, 0.0));

        // Background rect group plus text group
        assert_eq!(output.render().len(), 2);
    }
}
