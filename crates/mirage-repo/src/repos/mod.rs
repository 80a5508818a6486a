//! Per-domain repository contracts and their two implementations

pub mod embeddings;
pub mod graph;
pub mod metrics;
pub mod records;
pub mod search;
pub mod status;
pub mod users;

pub use embeddings::{DemoEmbeddingsRepository, EmbeddingsRepository, LiveEmbeddingsRepository};
pub use graph::{DemoGraphRepository, GraphRepository, LiveGraphRepository};
pub use metrics::{DemoMetricsRepository, LiveMetricsRepository, MetricsRepository};
pub use records::{DemoRecordsRepository, LiveRecordsRepository, RecordsRepository};
pub use search::{DemoSearchRepository, LiveSearchRepository, SearchRepository};
pub use status::{DemoStatusRepository, LiveStatusRepository, StatusRepository};
pub use users::{DemoUsersRepository, LiveUsersRepository, UsersRepository};
