//! Server-status repository (read-only)

use crate::client::{ApiRequest, NetworkClient};
use crate::error::ApiError;
use crate::routes;
use async_trait::async_trait;
use mirage_model::{ErrorLog, HealthCheck, LatencyResponse, ServiceUsage};
use mirage_store::StatusAccess;
use std::sync::Arc;

/// Contract shared by the live and demo implementations
#[async_trait]
pub trait StatusRepository: Send + Sync {
    async fn health(&self) -> Result<HealthCheck, ApiError>;
    async fn latency(&self) -> Result<LatencyResponse, ApiError>;
    async fn service_usage(&self) -> Result<Vec<ServiceUsage>, ApiError>;
    async fn error_logs(&self) -> Result<Vec<ErrorLog>, ApiError>;
}

/// Backend-backed implementation
pub struct LiveStatusRepository {
    client: Arc<dyn NetworkClient>,
}

impl LiveStatusRepository {
    #[must_use]
    pub fn new(client: Arc<dyn NetworkClient>) -> Self {
        Self { client }
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.client.send(ApiRequest::get(path)).await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl StatusRepository for LiveStatusRepository {
    async fn health(&self) -> Result<HealthCheck, ApiError> {
        self.fetch(routes::STATUS_HEALTH).await
    }

    async fn latency(&self) -> Result<LatencyResponse, ApiError> {
        self.fetch(routes::STATUS_LATENCY).await
    }

    async fn service_usage(&self) -> Result<Vec<ServiceUsage>, ApiError> {
        self.fetch(routes::STATUS_SERVICES).await
    }

    async fn error_logs(&self) -> Result<Vec<ErrorLog>, ApiError> {
        self.fetch(routes::STATUS_LOGS).await
    }
}

/// Dataset-backed implementation
pub struct DemoStatusRepository {
    status: StatusAccess,
}

impl DemoStatusRepository {
    #[must_use]
    pub fn new(status: StatusAccess) -> Self {
        Self { status }
    }
}

#[async_trait]
impl StatusRepository for DemoStatusRepository {
    async fn health(&self) -> Result<HealthCheck, ApiError> {
        Ok(self.status.health())
    }

    async fn latency(&self) -> Result<LatencyResponse, ApiError> {
        Ok(self.status.latency())
    }

    async fn service_usage(&self) -> Result<Vec<ServiceUsage>, ApiError> {
        Ok(self.status.service_usage())
    }

    async fn error_logs(&self) -> Result<Vec<ErrorLog>, ApiError> {
        Ok(self.status.error_logs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirage_store::DemoData;

    #[tokio::test]
    async fn demo_status_views_equal_the_accessor_answers() {
        let data = DemoData::with_defaults();
        let repo = DemoStatusRepository::new(data.status());

        assert_eq!(repo.health().await.unwrap(), data.status().health());
        assert_eq!(repo.latency().await.unwrap(), data.status().latency());
        assert_eq!(
            repo.service_usage().await.unwrap(),
            data.status().service_usage()
        );
    }
}
