//! Mirage entity model
//!
//! Defines the demo dataset's entity types and their aggregate:
//! - Typed ids for every entity kind
//! - The build context (`DemoContext`) parameterizing synthesis
//! - One module per entity domain (users, records, graph, search, ...)
//! - The `DemoScenario` aggregate root
//!
//! Every type is owned data deriving `Clone`, so cloning an aggregate is a
//! deep copy. The scenario store's clone-on-read contract depends on that.

pub mod account;
pub mod context;
pub mod embeddings;
pub mod graph;
pub mod ids;
pub mod metrics;
pub mod records;
pub mod scenario_data;
pub mod search;
pub mod status;
pub mod users;

pub use account::{AccountSnapshot, PlanTier};
pub use context::{DemoContext, DEFAULT_SEED};
pub use embeddings::{EmbeddingModel, EmbeddingRequest, EmbeddingResponse, ModelModality};
pub use graph::{EdgeKind, GraphData, GraphEdge, GraphNode, NodeDetail, NodeKind};
pub use ids::{EdgeId, GroupId, ModelId, NodeId, RecordId, UserId};
pub use metrics::{
    AnalyticsPoint, MetricCard, MetricsOverview, MetricsPeriod, TopHit, TopUser, TrendDirection,
    TrendPoint,
};
pub use records::{
    ContentType, MetadataPatch, Record, RecordMetadata, RecordPage, RecordPatch, RecordQuery,
    RecordSort, SortOrder,
};
pub use scenario_data::DemoScenario;
pub use search::{ChannelScores, FieldFilter, FilterOp, SearchRequest, SearchResponse, SearchResult};
pub use status::{ErrorLog, HealthCheck, LatencyResponse, LatencySample, LogLevel, ServiceHealth, ServiceUsage};
pub use users::{PermissionMatrix, RoleGrants, User, UserGroup, UserPatch, UserRole, UserStatus};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
