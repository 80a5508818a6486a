//! Records repository

use crate::client::{ApiRequest, NetworkClient};
use crate::error::ApiError;
use crate::routes;
use async_trait::async_trait;
use mirage_model::{Record, RecordId, RecordPage, RecordPatch, RecordQuery};
use mirage_store::RecordsAccess;
use std::sync::Arc;

/// Contract shared by the live and demo implementations
#[async_trait]
pub trait RecordsRepository: Send + Sync {
    async fn list(&self, query: &RecordQuery) -> Result<RecordPage, ApiError>;
    async fn get(&self, id: &RecordId) -> Result<Option<Record>, ApiError>;
    async fn update(&self, id: &RecordId, patch: &RecordPatch) -> Result<Record, ApiError>;
    async fn remove(&self, id: &RecordId) -> Result<(), ApiError>;
}

/// Backend-backed implementation
pub struct LiveRecordsRepository {
    client: Arc<dyn NetworkClient>,
}

impl LiveRecordsRepository {
    #[must_use]
    pub fn new(client: Arc<dyn NetworkClient>) -> Self {
        Self { client }
    }
}

fn listing_request(query: &RecordQuery) -> ApiRequest {
    let mut request = ApiRequest::get(routes::RECORDS)
        .with_query("sort", query.sort.as_str())
        .with_query("order", query.order.as_str())
        .with_query("page", query.page.to_string())
        .with_query("pageSize", query.page_size.to_string());
    if let Some(search) = &query.search {
        request = request.with_query("search", search.clone());
    }
    if let Some(content_type) = query.content_type {
        request = request.with_query("contentType", content_type.as_str());
    }
    request
}

#[async_trait]
impl RecordsRepository for LiveRecordsRepository {
    async fn list(&self, query: &RecordQuery) -> Result<RecordPage, ApiError> {
        let value = self.client.send(listing_request(query)).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn get(&self, id: &RecordId) -> Result<Option<Record>, ApiError> {
        let value = self
            .client
            .send(ApiRequest::get(routes::record(id.as_str())))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn update(&self, id: &RecordId, patch: &RecordPatch) -> Result<Record, ApiError> {
        let value = self
            .client
            .send(ApiRequest::patch(
                routes::record(id.as_str()),
                serde_json::to_value(patch)?,
            ))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn remove(&self, id: &RecordId) -> Result<(), ApiError> {
        self.client
            .send(ApiRequest::delete(routes::record(id.as_str())))
            .await?;
        Ok(())
    }
}

/// Dataset-backed implementation
pub struct DemoRecordsRepository {
    records: RecordsAccess,
}

impl DemoRecordsRepository {
    #[must_use]
    pub fn new(records: RecordsAccess) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordsRepository for DemoRecordsRepository {
    async fn list(&self, query: &RecordQuery) -> Result<RecordPage, ApiError> {
        Ok(self.records.list(query))
    }

    async fn get(&self, id: &RecordId) -> Result<Option<Record>, ApiError> {
        Ok(self.records.get(id))
    }

    async fn update(&self, id: &RecordId, patch: &RecordPatch) -> Result<Record, ApiError> {
        Ok(self.records.update(id, patch)?)
    }

    async fn remove(&self, id: &RecordId) -> Result<(), ApiError> {
        Ok(self.records.remove(id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockNetworkClient;
    use mirage_store::DemoData;

    #[tokio::test]
    async fn demo_listing_equals_the_accessor_answer() {
        let data = DemoData::with_defaults();
        let repo = DemoRecordsRepository::new(data.records());
        let query = RecordQuery::default();

        assert_eq!(
            repo.list(&query).await.unwrap(),
            data.records().list(&query)
        );
    }

    #[tokio::test]
    async fn live_listing_serializes_the_query() {
        let mut client = MockNetworkClient::new();
        client
            .expect_send()
            .withf(|req| {
                req.path == routes::RECORDS
                    && req.query_param("sort") == Some("createdAt")
                    && req.query_param("order") == Some("desc")
                    && req.query_param("page") == Some("1")
                    && req.query_param("search") == Some("billing")
            })
            .return_once(|_| {
                Ok(serde_json::json!({
                    "records": [],
                    "totalCount": 0,
                    "page": 1,
                    "pageSize": 10,
                    "totalPages": 1
                }))
            });

        let repo = LiveRecordsRepository::new(Arc::new(client));
        let page = repo
            .list(&RecordQuery {
                search: Some("billing".to_string()),
                ..RecordQuery::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total_pages, 1);
    }
}
