//! The pathway container: node set, interaction set, and figure-level
//! presentation constants.

use indexmap::IndexMap;
use log::debug;

use fibrogram_core::{draw::TextDefinition, identifier::Id};

use crate::semantic::{Interaction, Node};

/// A directed pathway graph plus the presentation constants of its figure.
///
/// Nodes are keyed by label identity; interactions are keyed by their ordered
/// `(source, target)` pair, so re-defining an existing pair replaces the
/// earlier definition. Iteration order for both follows insertion order,
/// which keeps rendering deterministic.
///
/// Cycles are permitted: feedback loops are domain content in these figures,
/// not a structural defect.
#[derive(Debug, Clone)]
pub struct Pathway {
    title: String,
    nodes: IndexMap<Id, Node>,
    interactions: IndexMap<(Id, Id), Interaction>,
    curvature: f32,
    node_size: f32,
    label_text: TextDefinition,
    legend: bool,
}

impl Pathway {
    /// Create an empty pathway with the given figure title.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            nodes: IndexMap::new(),
            interactions: IndexMap::new(),
            curvature: 0.0,
            node_size: 40.0,
            label_text: TextDefinition::new(),
            legend: false,
        }
    }

    /// Add a node, replacing and returning any previous node with the same
    /// label.
    pub fn add_node(&mut self, node: Node) -> Option<Node> {
        self.nodes.insert(node.id(), node)
    }

    /// Add an interaction keyed by its ordered `(source, target)` pair.
    ///
    /// A later definition for the same pair replaces the earlier one; the
    /// replacement is logged so an extended dataset surfaces duplicate
    /// definitions instead of hiding them.
    pub fn add_interaction(&mut self, interaction: Interaction) -> Option<Interaction> {
        let key = (interaction.source(), interaction.target());
        let previous = self.interactions.insert(key, interaction);
        if previous.is_some() {
            debug!(
                source = key.0.resolve(),
                target = key.1.resolve();
                "Replacing existing interaction definition"
            );
        }
        previous
    }

    /// Look up a node by identifier.
    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Check whether a node with the given identifier exists.
    pub fn contains_node(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Iterate nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterate interactions in insertion order.
    pub fn interactions(&self) -> impl Iterator<Item = &Interaction> {
        self.interactions.values()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct interactions (duplicate pair definitions collapse).
    pub fn interaction_count(&self) -> usize {
        self.interactions.len()
    }

    /// The figure title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Connector curvature bias: 0.0 draws straight connectors, positive
    /// values bow every connector sideways by that fraction of its length.
    pub fn curvature(&self) -> f32 {
        self.curvature
    }

    /// Set the connector curvature bias for this figure.
    pub fn set_curvature(&mut self, curvature: f32) {
        self.curvature = curvature;
    }

    /// Uniform marker size (width and height) for every node in the figure.
    pub fn node_size(&self) -> f32 {
        self.node_size
    }

    /// Set the uniform marker size for this figure.
    pub fn set_node_size(&mut self, node_size: f32) {
        self.node_size = node_size;
    }

    /// The text style used for node labels.
    pub fn label_text(&self) -> &TextDefinition {
        &self.label_text
    }

    /// Mutable access to the label text style.
    pub fn label_text_mut(&mut self) -> &mut TextDefinition {
        &mut self.label_text
    }

    /// Whether the rendered figure carries the activation/inhibition legend.
    pub fn has_legend(&self) -> bool {
        self.legend
    }

    /// Enable or disable the legend for this figure.
    pub fn set_legend(&mut self, legend: bool) {
        self.legend = legend;
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use fibrogram_core::{
        draw::{CircleDefinition, ShapeDefinition},
        geometry::Point,
    };

    use super::*;
    use crate::semantic::InteractionKind;

    fn circle() -> Rc<Box<dyn ShapeDefinition>> {
        Rc::new(Box::new(CircleDefinition::new()))
    }

    fn two_node_pathway() -> Pathway {
        let mut pathway = Pathway::new("test");
        pathway.add_node(Node::new("A", Point::new(0.0, 0.0), circle()));
        pathway.add_node(Node::new("B", Point::new(1.0, 0.0), circle()));
        pathway
    }

    #[test]
    fn test_node_identity_is_label() {
        let mut pathway = two_node_pathway();
        assert_eq!(pathway.node_count(), 2);

        // Re-adding a label replaces instead of duplicating
        let previous = pathway.add_node(Node::new("A", Point::new(5.0, 5.0), circle()));
        assert!(previous.is_some());
        assert_eq!(pathway.node_count(), 2);
        assert!(pathway.contains_node(Id::new("A")));
        assert!(!pathway.contains_node(Id::new("C")));
        assert_eq!(
            pathway.node(Id::new("A")).unwrap().position(),
            Point::new(5.0, 5.0)
        );
    }

    #[test]
    fn test_duplicate_interaction_replaces() {
        let mut pathway = two_node_pathway();

        let first = pathway.add_interaction(Interaction::new(
            "A",
            "B",
            InteractionKind::Activation,
        ));
        assert!(first.is_none());

        let second = pathway.add_interaction(Interaction::new(
            "A",
            "B",
            InteractionKind::Inhibition,
        ));
        assert!(second.is_some());
        assert_eq!(pathway.interaction_count(), 1);

        // Latest definition wins
        let kept = pathway.interactions().next().unwrap();
        assert_eq!(kept.kind(), InteractionKind::Inhibition);
    }

    #[test]
    fn test_opposite_directions_are_distinct() {
        let mut pathway = two_node_pathway();
        pathway.add_interaction(Interaction::new("A", "B", InteractionKind::Activation));
        pathway.add_interaction(Interaction::new("B", "A", InteractionKind::Activation));

        assert_eq!(pathway.interaction_count(), 2);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut pathway = Pathway::new("test");
        for label in ["C", "A", "B"] {
            pathway.add_node(Node::new(label, Point::new(0.0, 0.0), circle()));
        }

        let order: Vec<String> = pathway.nodes().map(|n| n.label().to_string()).collect();
        assert_eq!(order, ["C", "A", "B"]);
    }
}
