//! Pathway element types for the semantic model.

use std::{fmt, rc::Rc};

use fibrogram_core::{
    color::Color,
    draw::{ShapeDefinition, StrokeDefinition, StrokeStyle},
    geometry::Point,
    identifier::Id,
};

/// A pathway node (cell, mediator, molecule, or process) with a fixed
/// author-space position and a visual definition.
///
/// The label doubles as the node identity: two nodes with the same label are
/// the same node.
#[derive(Debug, Clone)]
pub struct Node {
    id: Id,
    label: String,
    position: Point,
    shape: Rc<Box<dyn ShapeDefinition>>,
}

impl Node {
    /// Create a new Node at the given author-space position (y up).
    pub fn new(label: &str, position: Point, shape: Rc<Box<dyn ShapeDefinition>>) -> Self {
        Self {
            id: Id::new(label),
            label: label.to_string(),
            position,
            shape,
        }
    }

    /// Get the node identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the display text for this node. May contain newlines, which
    /// render as separate label lines.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the author-space position (y up, unscaled).
    pub fn position(&self) -> Point {
        self.position
    }

    /// Borrow the node's visual definition.
    pub fn shape(&self) -> &Rc<Box<dyn ShapeDefinition>> {
        &self.shape
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// The semantic class of an interaction, determining its full rendering
/// treatment: stroke pattern, color, and arrowhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    /// An upregulating or promoting interaction: solid black connector with a
    /// triangular head.
    Activation,
    /// A downregulating, inhibiting, or degrading interaction: dashed red
    /// connector with a blunt bar head.
    Inhibition,
}

impl InteractionKind {
    /// Classify a declared style attribute.
    ///
    /// Only `"dashed"` selects [`Inhibition`](Self::Inhibition); an absent or
    /// unrecognized style falls back to the solid/triangular
    /// [`Activation`](Self::Activation) default rather than erroring.
    pub fn classify(style: Option<&str>) -> Self {
        match style {
            Some("dashed") => Self::Inhibition,
            _ => Self::Activation,
        }
    }

    /// The default connector color for this kind.
    pub fn default_color(&self) -> Color {
        let name = match self {
            Self::Activation => "black",
            Self::Inhibition => "red",
        };
        Color::new(name).expect("kind colors are valid CSS colors")
    }

    /// Build the default stroke for this kind: solid black for activation,
    /// dashed red for inhibition, both 2px wide.
    pub fn stroke_definition(&self) -> StrokeDefinition {
        let mut stroke = StrokeDefinition::new(self.default_color(), 2.0);
        if *self == Self::Inhibition {
            stroke.set_style(StrokeStyle::Dashed);
        }
        stroke
    }

    /// The arrowhead geometry drawn at the target end of the connector.
    pub fn head(&self) -> ArrowHead {
        match self {
            Self::Activation => ArrowHead::Triangle,
            Self::Inhibition => ArrowHead::Bar,
        }
    }

    /// Legend text for this kind.
    pub fn legend_label(&self) -> &'static str {
        match self {
            Self::Activation => "Activation (Upregulation)",
            Self::Inhibition => "Inhibition (Downregulation)",
        }
    }
}

/// Arrowhead geometry for a connector's target end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowHead {
    /// Standard filled triangle.
    Triangle,
    /// Perpendicular bar (blunt head), the conventional inhibition symbol.
    Bar,
}

/// A directed interaction between two nodes.
///
/// Identity is the ordered `(source, target)` pair; the pathway container
/// enforces at most one interaction per pair.
#[derive(Debug, Clone)]
pub struct Interaction {
    source: Id,
    target: Id,
    kind: InteractionKind,
    stroke: Rc<StrokeDefinition>,
}

impl Interaction {
    /// Create an interaction of the given kind with its default stroke.
    pub fn new(source: &str, target: &str, kind: InteractionKind) -> Self {
        Self {
            source: Id::new(source),
            target: Id::new(target),
            kind,
            stroke: Rc::new(kind.stroke_definition()),
        }
    }

    /// Create an interaction from declared style/color attributes.
    ///
    /// The kind is classified from the style attribute (see
    /// [`InteractionKind::classify`]); the declared color overrides the
    /// kind's default stroke color when it parses, and is ignored otherwise.
    /// Both attributes are optional — an attribute-free edge is a plain
    /// activation.
    pub fn from_attributes(
        source: &str,
        target: &str,
        style: Option<&str>,
        color: Option<&str>,
    ) -> Self {
        let kind = InteractionKind::classify(style);
        let mut stroke = kind.stroke_definition();
        if let Some(declared) = color.and_then(|c| Color::new(c).ok()) {
            stroke.set_color(declared);
        }

        Self {
            source: Id::new(source),
            target: Id::new(target),
            kind,
            stroke: Rc::new(stroke),
        }
    }

    /// Get the source node Id of this interaction.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Get the target node Id of this interaction.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Get the semantic kind of this interaction.
    pub fn kind(&self) -> InteractionKind {
        self.kind
    }

    /// Get the stroke used to draw this interaction's connector.
    pub fn stroke(&self) -> &Rc<StrokeDefinition> {
        &self.stroke
    }
}
