//! Knowledge-graph entities
//!
//! Documents, topics, and owning groups as nodes; typed `contains`/`owns`
//! edges. Every edge endpoint resolves to a node in the same `GraphData`.

use crate::ids::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// Kind of a graph node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Document,
    Topic,
    Group,
}

/// Kind of a graph edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Document contains/is-about a topic
    Contains,
    /// Group owns a document
    Owns,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
    pub kind: NodeKind,
    /// Relative display weight in [0, 1]
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub kind: EdgeKind,
}

/// Full graph payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphData {
    /// Node by id
    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Whether both endpoints of every edge resolve to a node
    #[must_use]
    pub fn edges_resolve(&self) -> bool {
        self.edges
            .iter()
            .all(|e| self.node(&e.source).is_some() && self.node(&e.target).is_some())
    }
}

/// A node with its adjacency: incoming/outgoing edges and the de-duplicated
/// set of nodes on their far ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDetail {
    pub node: GraphNode,
    pub incoming: Vec<GraphEdge>,
    pub outgoing: Vec<GraphEdge>,
    pub related: Vec<GraphNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_resolve_detects_dangling_endpoint() {
        let mut graph = GraphData {
            nodes: vec![
                GraphNode {
                    id: NodeId::new("a"),
                    label: "A".to_string(),
                    kind: NodeKind::Document,
                    weight: 0.5,
                },
                GraphNode {
                    id: NodeId::new("b"),
                    label: "B".to_string(),
                    kind: NodeKind::Topic,
                    weight: 0.5,
                },
            ],
            edges: vec![GraphEdge {
                id: EdgeId::new("e1"),
                source: NodeId::new("a"),
                target: NodeId::new("b"),
                kind: EdgeKind::Contains,
            }],
        };
        assert!(graph.edges_resolve());

        graph.edges.push(GraphEdge {
            id: EdgeId::new("e2"),
            source: NodeId::new("a"),
            target: NodeId::new("ghost"),
            kind: EdgeKind::Contains,
        });
        assert!(!graph.edges_resolve());
    }
}
