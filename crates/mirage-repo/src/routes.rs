//! Backend route table
//!
//! Shared by the live repositories (to build requests) and the simulated
//! transport (to match them), so the two can never drift apart.

pub const USERS: &str = "/api/users";
pub const USER_GROUPS: &str = "/api/users/groups";
pub const USER_PERMISSIONS: &str = "/api/users/permissions";

pub const RECORDS: &str = "/api/records";

pub const GRAPH: &str = "/api/graph";
pub const GRAPH_EDGES: &str = "/api/graph/edges";

pub const SEARCH: &str = "/api/search";

pub const METRICS_OVERVIEW: &str = "/api/metrics/overview";
pub const METRICS_TRENDS: &str = "/api/metrics/trends";
pub const METRICS_ANALYTICS: &str = "/api/metrics/analytics";
pub const METRICS_TOP_HITS: &str = "/api/metrics/top-hits";
pub const METRICS_TOP_USERS: &str = "/api/metrics/top-users";

pub const EMBED_TEXT: &str = "/api/embeddings/text";
pub const EMBED_IMAGE: &str = "/api/embeddings/image";
pub const MODELS_TEXT: &str = "/api/models/text";
pub const MODELS_IMAGE: &str = "/api/models/image";

pub const STATUS_HEALTH: &str = "/api/status/health";
pub const STATUS_LATENCY: &str = "/api/status/latency";
pub const STATUS_SERVICES: &str = "/api/status/services";
pub const STATUS_LOGS: &str = "/api/status/logs";

/// Path of one user
#[must_use]
pub fn user(id: &str) -> String {
    format!("{USERS}/{id}")
}

/// Path of one record
#[must_use]
pub fn record(id: &str) -> String {
    format!("{RECORDS}/{id}")
}

/// Path of one graph node
#[must_use]
pub fn graph_node(id: &str) -> String {
    format!("{GRAPH}/nodes/{id}")
}

/// Path of one graph edge
#[must_use]
pub fn graph_edge(id: &str) -> String {
    format!("{GRAPH_EDGES}/{id}")
}
