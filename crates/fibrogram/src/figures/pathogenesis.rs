//! The pulmonary fibrosis pathogenesis interaction web.
//!
//! Twenty-one nodes in three visual classes: the CD47/QPCTL axis as orange
//! stars, the Inflammation/Fibrosis/Efferocytosis process nodes as squares,
//! and the remaining cells and mediators as circles. The edge set contains
//! several feedback loops (e.g. myofibroblasts and TGF-β upregulate each
//! other) — cycles are the point of the figure, not an accident.

use std::rc::Rc;

use fibrogram_core::{
    color::Color,
    draw::{CircleDefinition, ShapeDefinition, SquareDefinition, StarDefinition},
    geometry::Point,
};

use crate::semantic::{Interaction, Node, Pathway};

/// Node labels with their hand-tuned positions (y up).
const NODES: [(&str, f32, f32); 21] = [
    // Central hub and the macrophage compartment
    ("Inflammation", 0.0, 0.0),
    ("Macrophages (M1)", -5.0, 2.0),
    ("Myofibroblasts", 5.0, 2.0),
    // Left side
    ("Epithelial Cells", -10.0, 4.0),
    ("Monocytes", -10.0, 2.0),
    ("Macrophages (M2)", -5.0, -2.0),
    // Right side
    ("Fibrosis", 5.0, -4.0),
    ("ECM", 5.0, -2.0),
    // Bottom
    ("Efferocytosis", -5.0, -4.0),
    // CD47 axis
    ("SIRPa", 0.0, -2.0),
    ("QPCTL", 2.0, 0.0),
    ("pE-CD47", 2.0, -2.0),
    ("CD47", 2.0, -4.0),
    // Cytokines and chemokines
    ("TNF-α", -5.0, 4.0),
    ("IL-6", -5.0, 6.0),
    ("TGF-β", 5.0, 4.0),
    // Proteases and inhibitors
    ("Proteases", -2.0, -4.0),
    ("MMPs", 2.0, -6.0),
    ("TIMPs", 2.0, -8.0),
    // Hypothesis block
    ("QPCTL Inhibitors", 0.0, 2.0),
    ("Overactivated Macrophages", -5.0, 0.0),
];

/// Nodes drawn as orange stars (the CD47 axis).
const STAR_NODES: [&str; 4] = ["SIRPa", "QPCTL", "pE-CD47", "CD47"];

/// Nodes drawn as squares (process/state nodes).
const SQUARE_NODES: [&str; 3] = ["Inflammation", "Fibrosis", "Efferocytosis"];

/// Directed interactions with their declared style/color attributes.
///
/// The TNF-α/IL-6 → Inflammation pairs appear twice: once in the cytokine
/// block and once in the overactivated-macrophage block. The second
/// definitions replace the first, identical ones.
const EDGES: [(&str, &str, &str, &str); 32] = [
    // Injury and recruitment
    ("Epithelial Cells", "Inflammation", "solid", "black"),
    ("Inflammation", "Monocytes", "solid", "black"),
    ("Monocytes", "Macrophages (M1)", "solid", "black"),
    ("Monocytes", "Macrophages (M2)", "solid", "black"),
    // Cytokine secretion and feedback
    ("Macrophages (M1)", "TNF-α", "solid", "black"),
    ("Macrophages (M1)", "IL-6", "solid", "black"),
    ("TNF-α", "Inflammation", "solid", "black"),
    ("IL-6", "Inflammation", "solid", "black"),
    // Fibrotic arm
    ("Inflammation", "Myofibroblasts", "solid", "black"),
    ("Myofibroblasts", "ECM", "solid", "black"),
    ("MMPs", "ECM", "dashed", "red"),
    ("ECM", "Fibrosis", "solid", "black"),
    // Efferocytosis resolves inflammation
    ("Macrophages (M1)", "Efferocytosis", "solid", "black"),
    ("Macrophages (M2)", "Efferocytosis", "solid", "black"),
    ("Efferocytosis", "Inflammation", "dashed", "red"),
    // CD47 axis
    ("QPCTL", "pE-CD47", "solid", "black"),
    ("CD47", "pE-CD47", "solid", "black"),
    ("pE-CD47", "SIRPa", "solid", "black"),
    ("SIRPa", "Macrophages (M1)", "dashed", "red"),
    ("SIRPa", "Macrophages (M2)", "dashed", "red"),
    // ECM turnover
    ("Macrophages (M1)", "MMPs", "solid", "black"),
    ("TIMPs", "MMPs", "dashed", "red"),
    ("Myofibroblasts", "TIMPs", "solid", "black"),
    ("Proteases", "SIRPa", "solid", "black"),
    ("Macrophages (M1)", "Proteases", "solid", "black"),
    // TGF-β / myofibroblast loop
    ("TGF-β", "Myofibroblasts", "solid", "black"),
    ("Myofibroblasts", "TGF-β", "solid", "black"),
    // Hypothesis: inhibitor overdose overactivates macrophages
    ("QPCTL Inhibitors", "Overactivated Macrophages", "solid", "black"),
    ("Overactivated Macrophages", "TNF-α", "solid", "black"),
    ("Overactivated Macrophages", "IL-6", "solid", "black"),
    ("TNF-α", "Inflammation", "solid", "black"),
    ("IL-6", "Inflammation", "solid", "black"),
];

pub(super) fn build() -> Pathway {
    let mut pathway =
        Pathway::new("Comprehensive Interaction Diagram: Pulmonary Fibrosis Pathogenesis");
    pathway.set_curvature(0.1);
    pathway.set_node_size(40.0);
    pathway.set_legend(true);
    pathway.label_text_mut().set_font_size(9);
    pathway.label_text_mut().set_bold(true);

    let fill = Color::new("lightblue").expect("'lightblue' is a valid CSS color");
    let orange = Color::new("orange").expect("'orange' is a valid CSS color");

    let mut star = StarDefinition::new();
    star.set_fill_color(Some(orange));
    let star: Rc<Box<dyn ShapeDefinition>> = Rc::new(Box::new(star));

    let mut square = SquareDefinition::new();
    square.set_fill_color(Some(fill));
    let square: Rc<Box<dyn ShapeDefinition>> = Rc::new(Box::new(square));

    let mut circle = CircleDefinition::new();
    circle.set_fill_color(Some(fill));
    let circle: Rc<Box<dyn ShapeDefinition>> = Rc::new(Box::new(circle));

    for (label, x, y) in NODES {
        let shape = if STAR_NODES.contains(&label) {
            Rc::clone(&star)
        } else if SQUARE_NODES.contains(&label) {
            Rc::clone(&square)
        } else {
            Rc::clone(&circle)
        };
        pathway.add_node(Node::new(label, Point::new(x, y), shape));
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
