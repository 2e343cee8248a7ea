//! The QPCTL-inhibitor effect cascade.
//!
//! A mostly-linear chain down the page: only the first edge is an inhibition
//! (high inhibitor concentration suppresses QPCTL), everything downstream is
//! a promotion. All nodes are squares; labels wrap onto two lines where the
//! original figure did.

use std::rc::Rc;

use fibrogram_core::{
    color::Color,
    draw::{ShapeDefinition, SquareDefinition},
    geometry::Point,
};

use crate::semantic::{Interaction, Node, Pathway};

/// Node labels with their hand-tuned positions (y up).
const NODES: [(&str, f32, f32); 8] = [
    ("High Concentration\nof QPCTL Inhibitors", 0.0, 3.0),
    ("QPCTL", 0.0, 1.0),
    ("Reduced CD47\nModification", 0.0, -1.0),
    ("Impaired CD47-SIRPα\nInteraction", 0.0, -3.0),
    ("Macrophage\nOveractivation", 0.0, -5.0),
    ("Excess TNF-α and IL-6", -2.0, -7.0),
    ("Increased\nInflammation", 0.0, -9.0),
    ("Exacerbation of\nPulmonary Fibrosis", 0.0, -11.0),
];

/// Directed interactions with their declared style/color attributes.
const EDGES: [(&str, &str, &str, &str); 7] = [
    (
        "High Concentration\nof QPCTL Inhibitors",
        "QPCTL",
        "dashed",
        "red",
    ),
    ("QPCTL", "Reduced CD47\nModification", "solid", "black"),
    (
        "Reduced CD47\nModification",
        "Impaired CD47-SIRPα\nInteraction",
        "solid",
        "black",
    ),
    (
        "Impaired CD47-SIRPα\nInteraction",
        "Macrophage\nOveractivation",
        "solid",
        "black",
    ),
    (
        "Macrophage\nOveractivation",
        "Excess TNF-α and IL-6",
        "solid",
        "black",
    ),
    (
        "Excess TNF-α and IL-6",
        "Increased\nInflammation",
        "solid",
        "black",
    ),
    (
        "Increased\nInflammation",
        "Exacerbation of\nPulmonary Fibrosis",
        "solid",
        "black",
    ),
];

pub(super) fn build() -> Pathway {
    let mut pathway = Pathway::new(
        "Effect Diagram: High QPCTL Inhibitor Concentration Leading to Increased Inflammation",
    );
    pathway.set_curvature(0.0);
    pathway.set_node_size(56.0);
    pathway.label_text_mut().set_font_size(10);
    pathway.label_text_mut().set_bold(true);

    let mut square = SquareDefinition::new();
    square.set_fill_color(Some(
        Color::new("lightblue").expect("'lightblue' is a valid CSS color"),
    ));
    let square: Rc<Box<dyn ShapeDefinition>> = Rc::new(Box::new(square));

    for (label, x, y) in NODES {
        pathway.add_node(Node::new(label, Point::new(x, y), Rc::clone(&square)));
    }

    for (source, target, style, color) in EDGES {
        pathway.add_interaction(Interaction::from_attributes(
            source,
            target,
            Some(style),
            Some(color),
        ));
    }

    pathway
}
