//! Metrics repository

use crate::client::{ApiRequest, NetworkClient};
use crate::error::ApiError;
use crate::routes;
use async_trait::async_trait;
use mirage_model::{AnalyticsPoint, MetricsOverview, MetricsPeriod, TopHit, TopUser, TrendPoint};
use mirage_store::MetricsAccess;
use std::sync::Arc;

/// Contract shared by the live and demo implementations
#[async_trait]
pub trait MetricsRepository: Send + Sync {
    async fn overview(&self, period: MetricsPeriod) -> Result<MetricsOverview, ApiError>;
    async fn trends(&self, period: MetricsPeriod) -> Result<Vec<TrendPoint>, ApiError>;
    async fn analytics(&self, period: MetricsPeriod) -> Result<Vec<AnalyticsPoint>, ApiError>;
    async fn top_hits(&self) -> Result<Vec<TopHit>, ApiError>;
    async fn top_users(&self) -> Result<Vec<TopUser>, ApiError>;
}

/// Backend-backed implementation
pub struct LiveMetricsRepository {
    client: Arc<dyn NetworkClient>,
}

impl LiveMetricsRepository {
    #[must_use]
    pub fn new(client: Arc<dyn NetworkClient>) -> Self {
        Self { client }
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        period: Option<MetricsPeriod>,
    ) -> Result<T, ApiError> {
        let mut request = ApiRequest::get(path);
        if let Some(period) = period {
            request = request.with_query("period", period.as_str());
        }
        let value = self.client.send(request).await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl MetricsRepository for LiveMetricsRepository {
    async fn overview(&self, period: MetricsPeriod) -> Result<MetricsOverview, ApiError> {
        self.fetch(routes::METRICS_OVERVIEW, Some(period)).await
    }

    async fn trends(&self, period: MetricsPeriod) -> Result<Vec<TrendPoint>, ApiError> {
        self.fetch(routes::METRICS_TRENDS, Some(period)).await
    }

    async fn analytics(&self, period: MetricsPeriod) -> Result<Vec<AnalyticsPoint>, ApiError> {
        self.fetch(routes::METRICS_ANALYTICS, Some(period)).await
    }

    async fn top_hits(&self) -> Result<Vec<TopHit>, ApiError> {
        self.fetch(routes::METRICS_TOP_HITS, None).await
    }

    async fn top_users(&self) -> Result<Vec<TopUser>, ApiError> {
        self.fetch(routes::METRICS_TOP_USERS, None).await
    }
}

/// Dataset-backed implementation
pub struct DemoMetricsRepository {
    metrics: MetricsAccess,
}

impl DemoMetricsRepository {
    #[must_use]
    pub fn new(metrics: MetricsAccess) -> Self {
        Self { metrics }
    }
}

#[async_trait]
impl MetricsRepository for DemoMetricsRepository {
    async fn overview(&self, period: MetricsPeriod) -> Result<MetricsOverview, ApiError> {
        Ok(self.metrics.overview(period))
    }

    async fn trends(&self, period: MetricsPeriod) -> Result<Vec<TrendPoint>, ApiError> {
        Ok(self.metrics.trends(period))
    }

    async fn analytics(&self, period: MetricsPeriod) -> Result<Vec<AnalyticsPoint>, ApiError> {
        Ok(self.metrics.analytics(period))
    }

    async fn top_hits(&self) -> Result<Vec<TopHit>, ApiError> {
        Ok(self.metrics.top_hits())
    }

    async fn top_users(&self) -> Result<Vec<TopUser>, ApiError> {
        Ok(self.metrics.top_users())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirage_store::DemoData;

    #[tokio::test]
    async fn demo_overview_equals_the_accessor_answer() {
        let data = DemoData::with_defaults();
        let repo = DemoMetricsRepository::new(data.metrics());

        for period in [MetricsPeriod::Day, MetricsPeriod::Week, MetricsPeriod::Month] {
            assert_eq!(
                repo.overview(period).await.unwrap(),
                data.metrics().overview(period)
            );
        }
    }
}
