//! Search domain accessor

use crate::store::ScenarioStore;
use mirage_dataset::hash_string;
use mirage_model::{SearchRequest, SearchResponse, SearchResult};
use std::sync::Arc;

/// Query access to the precomputed search results
#[derive(Clone)]
pub struct SearchAccess {
    store: Arc<ScenarioStore>,
}

impl SearchAccess {
    #[must_use]
    pub fn new(store: Arc<ScenarioStore>) -> Self {
        Self { store }
    }

    /// Match, filter, rank, and window the result set. The elapsed-time
    /// figure is derived from the query text so identical queries report
    /// identical timings.
    #[must_use]
    pub fn search(&self, request: &SearchRequest) -> SearchResponse {
        let mut results = self.store.snapshot().search_results;

        let needle = request.query.to_lowercase();
        if !needle.is_empty() {
            results.retain(|hit| matches_query(hit, &needle));
        }
        for filter in &request.filters {
            results.retain(|hit| filter.matches(&hit.metadata));
        }

        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let total = results.len();
        let windowed: Vec<SearchResult> = results
            .into_iter()
            .skip(request.offset)
            .take(request.limit)
            .collect();

        SearchResponse {
            results: windowed,
            total,
            elapsed_ms: 5 + u64::from(hash_string(&request.query)) % 120,
        }
    }
}

fn matches_query(hit: &SearchResult, needle: &str) -> bool {
    hit.content.to_lowercase().contains(needle)
        || hit.source.to_lowercase().contains(needle)
        || hit
            .highlights
            .iter()
            .any(|h| h.to_lowercase().contains(needle))
}
