//! Embedding model catalogs and the embed request/response pair

use crate::ids::ModelId;
use serde::{Deserialize, Serialize};

/// Input modality of an embedding model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelModality {
    Text,
    Image,
}

/// One catalog entry. The first entry of a catalog is its default model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingModel {
    pub id: ModelId,
    pub name: String,
    pub provider: String,
    /// Length of every vector this model produces
    pub dimensions: u32,
    /// Input budget: tokens for text models, pixels for image models
    pub max_input: u32,
    pub modality: ModelModality,
}

/// Request to synthesize an embedding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingRequest {
    /// Catalog model to use; `None` selects the catalog's first entry
    pub model: Option<ModelId>,
    pub input: String,
}

impl EmbeddingRequest {
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            model: None,
            input: input.into(),
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: ModelId) -> Self {
        self.model = Some(model);
        self
    }
}

/// Synthesized embedding. Identical requests yield identical vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingResponse {
    pub model: ModelId,
    pub dimensions: u32,
    pub vector: Vec<f64>,
    /// Derived from input size, not measured
    pub processing_ms: u64,
}
