//! Search repository

use crate::client::{ApiRequest, NetworkClient};
use crate::error::ApiError;
use crate::routes;
use async_trait::async_trait;
use mirage_model::{SearchRequest, SearchResponse};
use mirage_store::SearchAccess;
use std::sync::Arc;

/// Contract shared by the live and demo implementations
#[async_trait]
pub trait SearchRepository: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError>;
}

/// Backend-backed implementation
pub struct LiveSearchRepository {
    client: Arc<dyn NetworkClient>,
}

impl LiveSearchRepository {
    #[must_use]
    pub fn new(client: Arc<dyn NetworkClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchRepository for LiveSearchRepository {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        let value = self
            .client
            .send(ApiRequest::post(
                routes::SEARCH,
                serde_json::to_value(request)?,
            ))
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Dataset-backed implementation
pub struct DemoSearchRepository {
    search: SearchAccess,
}

impl DemoSearchRepository {
    #[must_use]
    pub fn new(search: SearchAccess) -> Self {
        Self { search }
    }
}

#[async_trait]
impl SearchRepository for DemoSearchRepository {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        Ok(self.search.search(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirage_store::DemoData;

    #[tokio::test]
    async fn demo_search_equals_the_accessor_answer() {
        let data = DemoData::with_defaults();
        let repo = DemoSearchRepository::new(data.search());
        let request = SearchRequest::new("guide").with_window(0, 5);

        assert_eq!(
            repo.search(&request).await.unwrap(),
            data.search().search(&request)
        );
    }
}
