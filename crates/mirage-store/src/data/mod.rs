//! Demo domain accessors
//!
//! One accessor per entity domain, all over the same shared store. Reads
//! return deep clones; mutations run under the store lock and are the only
//! writers the canonical dataset ever sees.

pub mod embeddings;
pub mod graph;
pub mod metrics;
pub mod records;
pub mod search;
pub mod status;
pub mod users;

pub use embeddings::EmbeddingsAccess;
pub use graph::GraphAccess;
pub use metrics::MetricsAccess;
pub use records::RecordsAccess;
pub use search::SearchAccess;
pub use status::StatusAccess;
pub use users::UsersAccess;

use crate::store::ScenarioStore;
use std::sync::Arc;

/// Bundle of every domain accessor over one store
#[derive(Clone)]
pub struct DemoData {
    store: Arc<ScenarioStore>,
}

impl DemoData {
    /// Accessors over the given store
    #[must_use]
    pub fn new(store: Arc<ScenarioStore>) -> Self {
        Self { store }
    }

    /// Accessors over a fresh store with default parameters
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(ScenarioStore::default()))
    }

    /// The underlying store
    #[must_use]
    pub fn store(&self) -> Arc<ScenarioStore> {
        self.store.clone()
    }

    #[must_use]
    pub fn users(&self) -> UsersAccess {
        UsersAccess::new(self.store.clone())
    }

    #[must_use]
    pub fn records(&self) -> RecordsAccess {
        RecordsAccess::new(self.store.clone())
    }

    #[must_use]
    pub fn graph(&self) -> GraphAccess {
        GraphAccess::new(self.store.clone())
    }

    #[must_use]
    pub fn search(&self) -> SearchAccess {
        SearchAccess::new(self.store.clone())
    }

    #[must_use]
    pub fn metrics(&self) -> MetricsAccess {
        MetricsAccess::new(self.store.clone())
    }

    #[must_use]
    pub fn embeddings(&self) -> EmbeddingsAccess {
        EmbeddingsAccess::new(self.store.clone())
    }

    #[must_use]
    pub fn status(&self) -> StatusAccess {
        StatusAccess::new(self.store.clone())
    }
}
