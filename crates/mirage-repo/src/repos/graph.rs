//! Graph repository

use crate::client::{ApiRequest, NetworkClient};
use crate::error::ApiError;
use crate::routes;
use async_trait::async_trait;
use mirage_model::{EdgeId, EdgeKind, GraphData, GraphEdge, NodeDetail, NodeId};
use mirage_store::GraphAccess;
use serde_json::json;
use std::sync::Arc;

/// Contract shared by the live and demo implementations
#[async_trait]
pub trait GraphRepository: Send + Sync {
    async fn full(&self) -> Result<GraphData, ApiError>;
    async fn node_detail(&self, id: &NodeId) -> Result<Option<NodeDetail>, ApiError>;
    async fn create_edge(
        &self,
        source: &NodeId,
        target: &NodeId,
        kind: EdgeKind,
    ) -> Result<GraphEdge, ApiError>;
    async fn remove_edge(&self, id: &EdgeId) -> Result<(), ApiError>;
}

/// Backend-backed implementation
pub struct LiveGraphRepository {
    client: Arc<dyn NetworkClient>,
}

impl LiveGraphRepository {
    #[must_use]
    pub fn new(client: Arc<dyn NetworkClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GraphRepository for LiveGraphRepository {
    async fn full(&self) -> Result<GraphData, ApiError> {
        let value = self.client.send(ApiRequest::get(routes::GRAPH)).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn node_detail(&self, id: &NodeId) -> Result<Option<NodeDetail>, ApiError> {
        let value = self
            .client
            .send(ApiRequest::get(routes::graph_node(id.as_str())))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn create_edge(
        &self,
        source: &NodeId,
        target: &NodeId,
        kind: EdgeKind,
    ) -> Result<GraphEdge, ApiError> {
        let value = self
            .client
            .send(ApiRequest::post(
                routes::GRAPH_EDGES,
                json!({ "source": source, "target": target, "kind": kind }),
            ))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn remove_edge(&self, id: &EdgeId) -> Result<(), ApiError> {
        self.client
            .send(ApiRequest::delete(routes::graph_edge(id.as_str())))
            .await?;
        Ok(())
    }
}

/// Dataset-backed implementation
pub struct DemoGraphRepository {
    graph: GraphAccess,
}

impl DemoGraphRepository {
    #[must_use]
    pub fn new(graph: GraphAccess) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl GraphRepository for DemoGraphRepository {
    async fn full(&self) -> Result<GraphData, ApiError> {
        Ok(self.graph.full())
    }

    async fn node_detail(&self, id: &NodeId) -> Result<Option<NodeDetail>, ApiError> {
        Ok(self.graph.node_detail(id))
    }

    async fn create_edge(
        &self,
        source: &NodeId,
        target: &NodeId,
        kind: EdgeKind,
    ) -> Result<GraphEdge, ApiError> {
        Ok(self.graph.create_edge(source, target, kind)?)
    }

    async fn remove_edge(&self, id: &EdgeId) -> Result<(), ApiError> {
        Ok(self.graph.remove_edge(id)?)
    }
}
