//! Graph domain accessor

use crate::error::StoreError;
use crate::store::ScenarioStore;
use mirage_model::{EdgeId, EdgeKind, GraphData, GraphEdge, NodeDetail, NodeId};
use std::sync::Arc;
use ulid::Ulid;

/// Read/mutate access to the knowledge graph slice of the dataset
#[derive(Clone)]
pub struct GraphAccess {
    store: Arc<ScenarioStore>,
}

impl GraphAccess {
    #[must_use]
    pub fn new(store: Arc<ScenarioStore>) -> Self {
        Self { store }
    }

    /// The full graph payload
    #[must_use]
    pub fn full(&self) -> GraphData {
        self.store.snapshot().graph_data
    }

    /// A node with its adjacency, or `None` if the node does not exist
    #[must_use]
    pub fn node_detail(&self, id: &NodeId) -> Option<NodeDetail> {
        let graph = self.store.snapshot().graph_data;
        let node = graph.node(id)?.clone();

        let incoming: Vec<GraphEdge> = graph
            .edges
            .iter()
            .filter(|e| &e.target == id)
            .cloned()
            .collect();
        let outgoing: Vec<GraphEdge> = graph
            .edges
            .iter()
            .filter(|e| &e.source == id)
            .cloned()
            .collect();

        let mut related = Vec::new();
        let far_ends = incoming
            .iter()
            .map(|e| &e.source)
            .chain(outgoing.iter().map(|e| &e.target));
        for far in far_ends {
            if related.iter().any(|n: &mirage_model::GraphNode| &n.id == far) {
                continue;
            }
            if let Some(node) = graph.node(far) {
                related.push(node.clone());
            }
        }

        Some(NodeDetail {
            node,
            incoming,
            outgoing,
            related,
        })
    }

    /// Create a typed edge between two existing nodes
    pub fn create_edge(
        &self,
        source: &NodeId,
        target: &NodeId,
        kind: EdgeKind,
    ) -> Result<GraphEdge, StoreError> {
        self.store.update(|s| {
            for endpoint in [source, target] {
                if s.graph_data.node(endpoint).is_none() {
                    return Err(StoreError::missing("graph node", endpoint.as_str()));
                }
            }
            let edge = GraphEdge {
                id: EdgeId::new(format!("edge-{}", Ulid::new().to_string().to_lowercase())),
                source: source.clone(),
                target: target.clone(),
                kind,
            };
            s.graph_data.edges.push(edge.clone());
            tracing::debug!(id = %edge.id, "created demo graph edge");
            Ok(edge)
        })
    }

    /// Remove an edge by id
    pub fn remove_edge(&self, id: &EdgeId) -> Result<(), StoreError> {
        self.store.update(|s| {
            let before = s.graph_data.edges.len();
            s.graph_data.edges.retain(|e| &e.id != id);
            if s.graph_data.edges.len() == before {
                return Err(StoreError::missing("graph edge", id.as_str()));
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DemoData;

    #[test]
    fn node_detail_collects_adjacency_without_duplicates() {
        let graph = DemoData::with_defaults().graph();
        let full = graph.full();
        // A document node has an incoming `owns` and an outgoing `contains`.
        let doc = full
            .nodes
            .iter()
            .find(|n| n.kind == mirage_model::NodeKind::Document)
            .unwrap();

        let detail = graph.node_detail(&doc.id).unwrap();
        assert_eq!(detail.node.id, doc.id);
        assert!(!detail.incoming.is_empty());
        assert!(!detail.outgoing.is_empty());

        let ids: Vec<&str> = detail.related.iter().map(|n| n.id.as_str()).collect();
        let unique: std::collections::HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len(), "related nodes must be de-duplicated");
    }

    #[test]
    fn node_detail_of_missing_node_is_none() {
        let graph = DemoData::with_defaults().graph();
        assert!(graph.node_detail(&NodeId::new("node-ghost")).is_none());
    }

    #[test]
    fn create_edge_requires_existing_endpoints() {
        let graph = DemoData::with_defaults().graph();
        let nodes = graph.full().nodes;

        let edge = graph
            .create_edge(&nodes[0].id, &nodes[1].id, EdgeKind::Contains)
            .unwrap();
        assert!(graph.full().edges.iter().any(|e| e.id == edge.id));

        let err = graph.create_edge(&nodes[0].id, &NodeId::new("node-ghost"), EdgeKind::Owns);
        assert!(matches!(err, Err(StoreError::MissingEntity { .. })));
    }

    #[test]
    fn remove_edge_deletes_by_id() {
        let graph = DemoData::with_defaults().graph();
        let edge = graph.full().edges[0].clone();

        graph.remove_edge(&edge.id).unwrap();
        assert!(graph.full().edges.iter().all(|e| e.id != edge.id));
        assert!(graph.remove_edge(&edge.id).is_err());
    }
}
