//! Repository factory
//!
//! Selects the live or demo implementation per call from the runtime data
//! mode. Consumers hold `Arc<dyn ...Repository>` values and never learn
//! which backend answered.

use crate::client::NetworkClient;
use crate::mode::DataMode;
use crate::repos::{
    DemoEmbeddingsRepository, DemoGraphRepository, DemoMetricsRepository, DemoRecordsRepository,
    DemoSearchRepository, DemoStatusRepository, DemoUsersRepository, EmbeddingsRepository,
    GraphRepository, LiveEmbeddingsRepository, LiveGraphRepository, LiveMetricsRepository,
    LiveRecordsRepository, LiveSearchRepository, LiveStatusRepository, LiveUsersRepository,
    MetricsRepository, RecordsRepository, SearchRepository, StatusRepository, UsersRepository,
};
use mirage_store::DemoData;
use std::sync::Arc;

/// Per-domain repository selection
pub struct RepositoryFactory {
    mode: DataMode,
    client: Arc<dyn NetworkClient>,
    data: DemoData,
}

impl RepositoryFactory {
    /// Factory over a network client (live mode) and demo accessors (demo
    /// mode). Both are always supplied; only `mode` decides which answers.
    #[must_use]
    pub fn new(mode: DataMode, client: Arc<dyn NetworkClient>, data: DemoData) -> Self {
        tracing::debug!(mode = %mode, "repository factory initialized");
        Self { mode, client, data }
    }

    /// The active data mode
    #[must_use]
    pub fn mode(&self) -> DataMode {
        self.mode
    }

    #[must_use]
    pub fn users(&self) -> Arc<dyn UsersRepository> {
        match self.mode {
            DataMode::Api => Arc::new(LiveUsersRepository::new(self.client.clone())),
            DataMode::Demo => Arc::new(DemoUsersRepository::new(self.data.users())),
        }
    }

    #[must_use]
    pub fn records(&self) -> Arc<dyn RecordsRepository> {
        match self.mode {
            DataMode::Api => Arc::new(LiveRecordsRepository::new(self.client.clone())),
            DataMode::Demo => Arc::new(DemoRecordsRepository::new(self.data.records())),
        }
    }

    #[must_use]
    pub fn graph(&self) -> Arc<dyn GraphRepository> {
        match self.mode {
            DataMode::Api => Arc::new(LiveGraphRepository::new(self.client.clone())),
            DataMode::Demo => Arc::new(DemoGraphRepository::new(self.data.graph())),
        }
    }

    #[must_use]
    pub fn search(&self) -> Arc<dyn SearchRepository> {
        match self.mode {
            DataMode::Api => Arc::new(LiveSearchRepository::new(self.client.clone())),
            DataMode::Demo => Arc::new(DemoSearchRepository::new(self.data.search())),
        }
    }

    #[must_use]
    pub fn metrics(&self) -> Arc<dyn MetricsRepository> {
        match self.mode {
            DataMode::Api => Arc::new(LiveMetricsRepository::new(self.client.clone())),
            DataMode::Demo => Arc::new(DemoMetricsRepository::new(self.data.metrics())),
        }
    }

    #[must_use]
    pub fn embeddings(&self) -> Arc<dyn EmbeddingsRepository> {
        match self.mode {
            DataMode::Api => Arc::new(LiveEmbeddingsRepository::new(self.client.clone())),
            DataMode::Demo => Arc::new(DemoEmbeddingsRepository::new(self.data.embeddings())),
        }
    }

    #[must_use]
    pub fn status(&self) -> Arc<dyn StatusRepository> {
        match self.mode {
            DataMode::Api => Arc::new(LiveStatusRepository::new(self.client.clone())),
            DataMode::Demo => Arc::new(DemoStatusRepository::new(self.data.status())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockNetworkClient;

    fn factory(mode: DataMode) -> RepositoryFactory {
        RepositoryFactory::new(mode, Arc::new(MockNetworkClient::new()), DemoData::with_defaults())
    }

    #[tokio::test]
    async fn demo_mode_answers_without_touching_the_client() {
        // The mock panics on any unexpected call; demo mode must not reach it.
        let factory = factory(DataMode::Demo);

        assert!(!factory.users().list().await.unwrap().is_empty());
        assert!(factory.status().health().await.unwrap().uptime_secs > 0);
    }

    #[tokio::test]
    async fn api_mode_routes_through_the_client() {
        let mut client = MockNetworkClient::new();
        client
            .expect_send()
            .return_once(|_| Ok(serde_json::json!([])));

        let factory = RepositoryFactory::new(
            DataMode::Api,
            Arc::new(client),
            DemoData::with_defaults(),
        );
        assert!(factory.users().list().await.unwrap().is_empty());
    }
}
