//! Search results and query shapes

use crate::ids::RecordId;
use crate::records::RecordMetadata;
use serde::{Deserialize, Serialize};

/// Per-channel sub-scores of a search hit. Their mean equals the total
/// score carried on the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelScores {
    pub semantic: f64,
    pub lexical: f64,
    pub recency: f64,
}

impl ChannelScores {
    /// Mean of the three channels
    #[must_use]
    pub fn mean(&self) -> f64 {
        (self.semantic + self.lexical + self.recency) / 3.0
    }
}

/// One ranked search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub record_id: RecordId,
    pub content: String,
    pub source: String,
    pub score: f64,
    pub channels: ChannelScores,
    pub highlights: Vec<String>,
    pub metadata: RecordMetadata,
}

/// Comparison operator of a field filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOp {
    Eq,
    Ne,
    Contains,
}

/// A predicate over one metadata field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFilter {
    pub field: String,
    pub op: FilterOp,
    pub value: String,
}

impl FieldFilter {
    /// Evaluate this predicate against a metadata set. A missing field
    /// satisfies only `Ne`.
    #[must_use]
    pub fn matches(&self, metadata: &RecordMetadata) -> bool {
        let actual = metadata.field(&self.field);
        match (self.op, actual) {
            (FilterOp::Eq, Some(actual)) => actual == self.value,
            (FilterOp::Eq, None) => false,
            (FilterOp::Ne, Some(actual)) => actual != self.value,
            (FilterOp::Ne, None) => true,
            (FilterOp::Contains, Some(actual)) => actual.contains(&self.value),
            (FilterOp::Contains, None) => false,
        }
    }
}

/// Search request: query text, metadata predicates, offset/limit window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    pub filters: Vec<FieldFilter>,
    pub offset: usize,
    pub limit: usize,
}

impl SearchRequest {
    /// Plain query with no filters, default window
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filters: Vec::new(),
            offset: 0,
            limit: 10,
        }
    }

    /// With a metadata predicate
    #[must_use]
    pub fn with_filter(mut self, field: impl Into<String>, op: FilterOp, value: impl Into<String>) -> Self {
        self.filters.push(FieldFilter {
            field: field.into(),
            op,
            value: value.into(),
        });
        self
    }

    /// With an offset/limit window
    #[must_use]
    pub fn with_window(mut self, offset: usize, limit: usize) -> Self {
        self.offset = offset;
        self.limit = limit;
        self
    }
}

/// Search response: windowed hits, pre-window total, and a deterministic
/// elapsed-time figure (derived from the query text, not measured).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub total: usize,
    pub elapsed_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> RecordMetadata {
        RecordMetadata {
            document: Some("Onboarding Guide".to_string()),
            chunk_index: Some(1),
            language: Some("en".to_string()),
            tags: vec!["docs".to_string()],
        }
    }

    #[test]
    fn filter_eq_and_ne() {
        let m = metadata();
        assert!(FieldFilter {
            field: "language".to_string(),
            op: FilterOp::Eq,
            value: "en".to_string()
        }
        .matches(&m));
        assert!(FieldFilter {
            field: "language".to_string(),
            op: FilterOp::Ne,
            value: "de".to_string()
        }
        .matches(&m));
    }

    #[test]
    fn filter_on_missing_field_only_satisfies_ne() {
        let m = RecordMetadata::default();
        let eq = FieldFilter {
            field: "document".to_string(),
            op: FilterOp::Eq,
            value: "x".to_string(),
        };
        let ne = FieldFilter {
            field: "document".to_string(),
            op: FilterOp::Ne,
            value: "x".to_string(),
        };
        assert!(!eq.matches(&m));
        assert!(ne.matches(&m));
    }

    #[test]
    fn channel_mean() {
        let channels = ChannelScores {
            semantic: 0.9,
            lexical: 0.6,
            recency: 0.3,
        };
        assert!((channels.mean() - 0.6).abs() < 1e-12);
    }
}
