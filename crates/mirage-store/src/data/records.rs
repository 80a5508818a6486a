//! Records domain accessor

use crate::error::StoreError;
use crate::store::ScenarioStore;
use mirage_model::{Record, RecordId, RecordPage, RecordPatch, RecordQuery, RecordSort, SortOrder};
use std::sync::Arc;

/// Read/mutate access to the records slice of the dataset
#[derive(Clone)]
pub struct RecordsAccess {
    store: Arc<ScenarioStore>,
}

impl RecordsAccess {
    #[must_use]
    pub fn new(store: Arc<ScenarioStore>) -> Self {
        Self { store }
    }

    /// Filtered, sorted, paginated listing
    #[must_use]
    pub fn list(&self, query: &RecordQuery) -> RecordPage {
        let mut records = self.store.snapshot().records;

        if let Some(needle) = &query.search {
            let needle = needle.to_lowercase();
            records.retain(|r| {
                r.content.to_lowercase().contains(&needle)
                    || r.source.to_lowercase().contains(&needle)
            });
        }
        if let Some(content_type) = query.content_type {
            records.retain(|r| r.content_type == content_type);
        }

        sort_records(&mut records, query.sort, query.order);

        let total_count = records.len();
        let page_size = query.page_size.max(1);
        let total_pages = (total_count.div_ceil(page_size)).max(1);
        let page = query.page.max(1);
        let start = (page - 1) * page_size;
        let records = if start >= total_count {
            Vec::new()
        } else {
            records[start..(start + page_size).min(total_count)].to_vec()
        };

        RecordPage {
            records,
            total_count,
            page,
            page_size,
            total_pages,
        }
    }

    /// Record by id
    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<Record> {
        self.store
            .snapshot()
            .records
            .into_iter()
            .find(|r| &r.id == id)
    }

    /// Merge a patch into an existing record and stamp its update time
    pub fn update(&self, id: &RecordId, patch: &RecordPatch) -> Result<Record, StoreError> {
        let now = self.store.context().now;
        self.store.update(|s| {
            let record = s
                .records
                .iter_mut()
                .find(|r| &r.id == id)
                .ok_or_else(|| StoreError::missing("record", id.as_str()))?;
            record.apply(patch);
            record.updated_at = now;
            Ok(record.clone())
        })
    }

    /// Remove a record by id
    pub fn remove(&self, id: &RecordId) -> Result<(), StoreError> {
        self.store.update(|s| {
            let before = s.records.len();
            s.records.retain(|r| &r.id != id);
            if s.records.len() == before {
                return Err(StoreError::missing("record", id.as_str()));
            }
            tracing::debug!(id = %id, "removed demo record");
            Ok(())
        })
    }
}

fn sort_records(records: &mut [Record], sort: RecordSort, order: SortOrder) {
    // Stable sort; ties keep build order so pages never duplicate rows.
    records.sort_by(|a, b| {
        let ordering = match sort {
            RecordSort::CreatedAt => a.created_at.cmp(&b.created_at),
            RecordSort::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            RecordSort::Model => a.embedding_model.as_str().cmp(b.embedding_model.as_str()),
            RecordSort::Dimensions => a.dimensions.cmp(&b.dimensions),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DemoData;
    use mirage_model::{ContentType, MetadataPatch};

    #[test]
    fn default_listing_returns_first_page() {
        let records = DemoData::with_defaults().records();
        let page = records.list(&RecordQuery::default());

        assert_eq!(page.page, 1);
        assert!(page.records.len() <= page.page_size);
        assert_eq!(
            page.total_pages,
            page.total_count.div_ceil(page.page_size).max(1)
        );
    }

    #[test]
    fn search_matches_content_and_source_case_insensitively() {
        let records = DemoData::with_defaults().records();
        let page = records.list(&RecordQuery {
            search: Some("BILLING".to_string()),
            page_size: 100,
            ..RecordQuery::default()
        });

        assert!(page.total_count > 0);
        for record in &page.records {
            let haystack = format!("{} {}", record.content, record.source).to_lowercase();
            assert!(haystack.contains("billing"));
        }
    }

    #[test]
    fn content_type_filter_applies() {
        let records = DemoData::with_defaults().records();
        let page = records.list(&RecordQuery {
            content_type: Some(ContentType::Pdf),
            page_size: 100,
            ..RecordQuery::default()
        });

        assert!(page.total_count > 0);
        assert!(page.records.iter().all(|r| r.content_type == ContentType::Pdf));
    }

    #[test]
    fn dimension_sort_ascending_orders_pages() {
        let records = DemoData::with_defaults().records();
        let page = records.list(&RecordQuery {
            sort: RecordSort::Dimensions,
            order: SortOrder::Asc,
            page_size: 100,
            ..RecordQuery::default()
        });

        for pair in page.records.windows(2) {
            assert!(pair[0].dimensions <= pair[1].dimensions);
        }
    }

    #[test]
    fn out_of_range_page_is_empty_but_counted() {
        let records = DemoData::with_defaults().records();
        let page = records.list(&RecordQuery {
            page: 999,
            ..RecordQuery::default()
        });

        assert!(page.records.is_empty());
        assert!(page.total_count > 0);
        assert!(page.total_pages >= 1);
    }

    #[test]
    fn update_merges_metadata_and_stamps_updated_at() {
        let data = DemoData::with_defaults();
        let records = data.records();
        let target = records.list(&RecordQuery::default()).records[0].clone();

        let updated = records
            .update(
                &target.id,
                &RecordPatch {
                    metadata: Some(MetadataPatch {
                        language: Some("fr".to_string()),
                        ..MetadataPatch::default()
                    }),
                    ..RecordPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.metadata.language.as_deref(), Some("fr"));
        assert_eq!(updated.metadata.document, target.metadata.document);
        assert_eq!(updated.updated_at, data.store().context().now);
    }

    #[test]
    fn removing_a_missing_record_is_an_error() {
        let records = DemoData::with_defaults().records();
        assert!(records.remove(&RecordId::new("record-ghost")).is_err());
    }
}
