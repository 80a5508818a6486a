//! The dataset aggregate root

use crate::account::AccountSnapshot;
use crate::embeddings::EmbeddingModel;
use crate::graph::GraphData;
use crate::metrics::MetricsOverview;
use crate::records::Record;
use crate::search::SearchResult;
use crate::status::{ErrorLog, HealthCheck, LatencyResponse, ServiceUsage};
use crate::users::{PermissionMatrix, User, UserGroup};
use serde::{Deserialize, Serialize};

/// One fully cross-referential demo dataset.
///
/// Built in one shot by the dataset builder; mutated in place by the demo
/// accessors. Cloning is a deep copy, which is what the scenario store's
/// read isolation relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoScenario {
    pub account: AccountSnapshot,
    pub users: Vec<User>,
    pub user_groups: Vec<UserGroup>,
    pub permission_matrix: PermissionMatrix,
    pub records: Vec<Record>,
    pub graph_data: GraphData,
    pub search_results: Vec<SearchResult>,
    pub metrics_overview: MetricsOverview,
    pub health: HealthCheck,
    pub latency: LatencyResponse,
    pub service_usage: Vec<ServiceUsage>,
    pub error_logs: Vec<ErrorLog>,
    pub text_embedding_models: Vec<EmbeddingModel>,
    pub image_embedding_models: Vec<EmbeddingModel>,
}
