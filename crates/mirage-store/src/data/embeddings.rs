//! Embeddings domain accessor

use crate::error::StoreError;
use crate::store::ScenarioStore;
use mirage_dataset::build_vector;
use mirage_model::{EmbeddingModel, EmbeddingRequest, EmbeddingResponse, ModelModality};
use std::sync::Arc;

/// Synthesizes embedding responses from the model catalogs
#[derive(Clone)]
pub struct EmbeddingsAccess {
    store: Arc<ScenarioStore>,
}

impl EmbeddingsAccess {
    #[must_use]
    pub fn new(store: Arc<ScenarioStore>) -> Self {
        Self { store }
    }

    /// The text model catalog; its first entry is the default model
    #[must_use]
    pub fn text_models(&self) -> Vec<EmbeddingModel> {
        self.store.snapshot().text_embedding_models
    }

    /// The image model catalog; its first entry is the default model
    #[must_use]
    pub fn image_models(&self) -> Vec<EmbeddingModel> {
        self.store.snapshot().image_embedding_models
    }

    /// Synthesize a text embedding. Identical requests yield identical
    /// vectors, mirroring real embedding determinism expectations.
    pub fn embed_text(&self, request: &EmbeddingRequest) -> Result<EmbeddingResponse, StoreError> {
        self.embed(self.text_models(), request, ModelModality::Text)
    }

    /// Synthesize an image embedding from an input descriptor
    pub fn embed_image(&self, request: &EmbeddingRequest) -> Result<EmbeddingResponse, StoreError> {
        self.embed(self.image_models(), request, ModelModality::Image)
    }

    fn embed(
        &self,
        catalog: Vec<EmbeddingModel>,
        request: &EmbeddingRequest,
        modality: ModelModality,
    ) -> Result<EmbeddingResponse, StoreError> {
        let model = match &request.model {
            Some(id) => catalog
                .iter()
                .find(|m| &m.id == id)
                .ok_or_else(|| StoreError::missing("embedding model", id.as_str()))?,
            None => catalog
                .first()
                .ok_or_else(|| StoreError::missing("embedding model", "default"))?,
        };

        let seed = self.store.context().seed;
        let key = format!("{}:{}", model.id, request.input);
        let vector = build_vector(model.dimensions as usize, &key, seed);

        let base = match modality {
            ModelModality::Text => 15,
            ModelModality::Image => 40,
        };
        Ok(EmbeddingResponse {
            model: model.id.clone(),
            dimensions: model.dimensions,
            vector,
            processing_ms: base + request.input.len() as u64 / 6,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DemoData;
    use mirage_model::ModelId;

    #[test]
    fn identical_requests_are_idempotent() {
        let embeddings = DemoData::with_defaults().embeddings();
        let request = EmbeddingRequest::new("the same text");

        let first = embeddings.embed_text(&request).unwrap();
        let second = embeddings.embed_text(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn vector_length_matches_model_dimensionality() {
        let embeddings = DemoData::with_defaults().embeddings();
        for model in embeddings.text_models() {
            let response = embeddings
                .embed_text(&EmbeddingRequest::new("dims").with_model(model.id.clone()))
                .unwrap();
            assert_eq!(response.vector.len() as u32, model.dimensions);
            assert_eq!(response.dimensions, model.dimensions);
        }
    }

    #[test]
    fn missing_model_defaults_to_catalog_head() {
        let embeddings = DemoData::with_defaults().embeddings();
        let default = embeddings.embed_text(&EmbeddingRequest::new("x")).unwrap();
        assert_eq!(default.model, embeddings.text_models()[0].id);
    }

    #[test]
    fn unknown_model_is_a_missing_entity() {
        let embeddings = DemoData::with_defaults().embeddings();
        let result = embeddings.embed_text(
            &EmbeddingRequest::new("x").with_model(ModelId::new("model-ghost")),
        );
        assert!(matches!(result, Err(StoreError::MissingEntity { .. })));
    }

    #[test]
    fn processing_time_grows_with_input_size() {
        let embeddings = DemoData::with_defaults().embeddings();
        let short = embeddings.embed_text(&EmbeddingRequest::new("a")).unwrap();
        let long = embeddings
            .embed_text(&EmbeddingRequest::new("a".repeat(600)))
            .unwrap();
        assert!(long.processing_ms > short.processing_ms);
    }
}
