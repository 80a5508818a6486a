//! Embeddings repository

use crate::client::{ApiRequest, NetworkClient};
use crate::error::ApiError;
use crate::routes;
use async_trait::async_trait;
use mirage_model::{EmbeddingModel, EmbeddingRequest, EmbeddingResponse};
use mirage_store::EmbeddingsAccess;
use std::sync::Arc;

/// Contract shared by the live and demo implementations
#[async_trait]
pub trait EmbeddingsRepository: Send + Sync {
    async fn text_models(&self) -> Result<Vec<EmbeddingModel>, ApiError>;
    async fn image_models(&self) -> Result<Vec<EmbeddingModel>, ApiError>;
    async fn embed_text(&self, request: &EmbeddingRequest) -> Result<EmbeddingResponse, ApiError>;
    async fn embed_image(&self, request: &EmbeddingRequest) -> Result<EmbeddingResponse, ApiError>;
}

/// Backend-backed implementation
pub struct LiveEmbeddingsRepository {
    client: Arc<dyn NetworkClient>,
}

impl LiveEmbeddingsRepository {
    #[must_use]
    pub fn new(client: Arc<dyn NetworkClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmbeddingsRepository for LiveEmbeddingsRepository {
    async fn text_models(&self) -> Result<Vec<EmbeddingModel>, ApiError> {
        let value = self.client.send(ApiRequest::get(routes::MODELS_TEXT)).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn image_models(&self) -> Result<Vec<EmbeddingModel>, ApiError> {
        let value = self
            .client
            .send(ApiRequest::get(routes::MODELS_IMAGE))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn embed_text(&self, request: &EmbeddingRequest) -> Result<EmbeddingResponse, ApiError> {
        let value = self
            .client
            .send(ApiRequest::post(
                routes::EMBED_TEXT,
                serde_json::to_value(request)?,
            ))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn embed_image(&self, request: &EmbeddingRequest) -> Result<EmbeddingResponse, ApiError> {
        let value = self
            .client
            .send(ApiRequest::post(
                routes::EMBED_IMAGE,
                serde_json::to_value(request)?,
            ))
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Dataset-backed implementation
pub struct DemoEmbeddingsRepository {
    embeddings: EmbeddingsAccess,
}

impl DemoEmbeddingsRepository {
    #[must_use]
    pub fn new(embeddings: EmbeddingsAccess) -> Self {
        Self { embeddings }
    }
}

#[async_trait]
impl EmbeddingsRepository for DemoEmbeddingsRepository {
    async fn text_models(&self) -> Result<Vec<EmbeddingModel>, ApiError> {
        Ok(self.embeddings.text_models())
    }

    async fn image_models(&self) -> Result<Vec<EmbeddingModel>, ApiError> {
        Ok(self.embeddings.image_models())
    }

    async fn embed_text(&self, request: &EmbeddingRequest) -> Result<EmbeddingResponse, ApiError> {
        Ok(self.embeddings.embed_text(request)?)
    }

    async fn embed_image(&self, request: &EmbeddingRequest) -> Result<EmbeddingResponse, ApiError> {
        Ok(self.embeddings.embed_image(request)?)
    }
}
