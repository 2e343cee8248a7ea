//! Validated graph structure over a semantic pathway.
//!
//! This stage resolves every interaction endpoint against the node set
//! before anything is laid out or drawn, so an edge referencing an undefined
//! label fails with a graph error that names the label instead of surfacing
//! as a rendering artifact. The resulting [`PathwayGraph`] also answers the
//! connectivity queries the export stage needs (reverse-pair detection) and
//! reports whether the pathway is cyclic — feedback loops are expected
//! content and only logged.

use std::collections::HashMap;

use log::debug;
use petgraph::{
    Graph,
    algo::is_cyclic_directed,
    graph::NodeIndex,
};

use fibrogram_core::identifier::Id;

use crate::{
    error::FibrogramError,
    semantic::{Interaction, Node, Pathway},
};

/// A validated directed graph view of a [`Pathway`].
#[derive(Debug)]
pub struct PathwayGraph<'a> {
    graph: Graph<&'a Node, &'a Interaction>,
    indices: HashMap<Id, NodeIndex>,
}

impl<'a> PathwayGraph<'a> {
    /// Build the graph from a pathway, validating that every interaction
    /// endpoint names an existing node.
    ///
    /// # Errors
    ///
    /// Returns [`FibrogramError::Graph`] naming the first undefined label
    /// encountered.
    pub fn from_pathway(pathway: &'a Pathway) -> Result<Self, FibrogramError> {
        let mut graph = Graph::new();
        let mut indices = HashMap::with_capacity(pathway.node_count());

        for node in pathway.nodes() {
            indices.insert(node.id(), graph.add_node(node));
        }

        for interaction in pathway.interactions() {
            let source = resolve(&indices, interaction.source())?;
            let target = resolve(&indices, interaction.target())?;
            graph.add_edge(source, target, interaction);
        }

        let structure = Self { graph, indices };
        debug!(
            nodes = structure.node_count(),
            interactions = structure.interaction_count(),
            cyclic = structure.is_cyclic();
            "Pathway structure built"
        );
        Ok(structure)
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of interactions in the graph.
    pub fn interaction_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether an interaction exists from `source` to `target`.
    pub fn has_edge(&self, source: Id, target: Id) -> bool {
        match (self.indices.get(&source), self.indices.get(&target)) {
            (Some(source), Some(target)) => self.graph.find_edge(*source, *target).is_some(),
            _ => false,
        }
    }

    /// Whether the opposite-direction interaction exists for the given one.
    ///
    /// Reverse pairs matter to the export stage: two exactly-overlapping
    /// straight connectors would hide each other, so such pairs are bowed
    /// apart.
    pub fn has_reverse(&self, interaction: &Interaction) -> bool {
        self.has_edge(interaction.target(), interaction.source())
    }

    /// Whether the pathway contains at least one directed cycle.
    pub fn is_cyclic(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }
}

fn resolve(indices: &HashMap<Id, NodeIndex>, id: Id) -> Result<NodeIndex, FibrogramError> {
    indices.get(&id).copied().ok_or_else(|| {
        FibrogramError::Graph(format!("interaction references undefined node `{id}`"))
    })
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

    fn pathway_with(labels: &[&str]) -> Pathway {
        let mut pathway = Pathway::new("test");
        for (i, label) in labels.iter().enumerate() {
            pathway.add_node(Node::new(label, Point::new(i as f32, 0.0), circle()));
        }
        pathway
    }

    #[test]
    fn test_valid_pathway_builds() {
        let mut pathway = pathway_with(&["A", "B", "C"]);
        pathway.add_interaction(Interaction::new("A", "B", InteractionKind::Activation));
        pathway.add_interaction(Interaction::new("B", "C", InteractionKind::Inhibition));

        let structure = PathwayGraph::from_pathway(&pathway).unwrap();
        assert_eq!(structure.node_count(), 3);
        assert_eq!(structure.interaction_count(), 2);
        assert!(structure.has_edge(Id::new("A"), Id::new("B")));
        assert!(!structure.has_edge(Id::new("B"), Id::new("A")));
    }

    #[test]
    fn test_undefined_endpoint_is_an_error() {
        let mut pathway = pathway_with(&["A"]);
        pathway.add_interaction(Interaction::new("A", "Ghost", InteractionKind::Activation));

        let err = PathwayGraph::from_pathway(&pathway).unwrap_err();
        assert!(matches!(err, FibrogramError::Graph(_)));
        assert!(err.to_string().contains("undefined node `Ghost`"));
    }

    #[test]
    fn test_has_reverse() {
        let mut pathway = pathway_with(&["A", "B", "C"]);
        pathway.add_interaction(Interaction::new("A", "B", InteractionKind::Activation));
        pathway.add_interaction(Interaction::new("B", "A", InteractionKind::Activation));
        pathway.add_interaction(Interaction::new("B", "C", InteractionKind::Activation));

        let structure = PathwayGraph::from_pathway(&pathway).unwrap();

        let mut interactions = pathway.interactions();
        let a_to_b = interactions.next().unwrap();
        assert!(structure.has_reverse(a_to_b));

        let b_to_a = interactions.next().unwrap();
        assert!(structure.has_reverse(b_to_a));

        let b_to_c = interactions.next().unwrap();
        assert!(!structure.has_reverse(b_to_c));
    }

    #[test]
    fn test_cycle_detection() {
        let mut pathway = pathway_with(&["A", "B", "C"]);
        pathway.add_interaction(Interaction::new("A", "B", InteractionKind::Activation));
        pathway.add_interaction(Interaction::new("B", "C", InteractionKind::Activation));

        let acyclic = PathwayGraph::from_pathway(&pathway).unwrap();
        assert!(!acyclic.is_cyclic());

        pathway.add_interaction(Interaction::new("C", "A", InteractionKind::Activation));
        let cyclic = PathwayGraph::from_pathway(&pathway).unwrap();
        assert!(cyclic.is_cyclic());
    }

    #[test]
    fn test_self_loop_is_cyclic() {
        let mut pathway = pathway_with(&["A"]);
        pathway.add_interaction(Interaction::new("A", "A", InteractionKind::Activation));

        let structure = PathwayGraph::from_pathway(&pathway).unwrap();
        assert!(structure.is_cyclic());
        assert!(structure.has_edge(Id::new("A"), Id::new("A")));
    }
}
