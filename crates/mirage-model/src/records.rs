//! Indexed records (document chunks) and their list/query shapes

use crate::ids::{ModelId, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source content type of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Markdown,
    Pdf,
    Html,
}

impl ContentType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Markdown => "markdown",
            ContentType::Pdf => "pdf",
            ContentType::Html => "html",
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ContentType::Text),
            "markdown" => Ok(ContentType::Markdown),
            "pdf" => Ok(ContentType::Pdf),
            "html" => Ok(ContentType::Html),
            other => Err(UnknownContentType(other.to_string())),
        }
    }
}

/// Unparseable content-type string
#[derive(Debug, thiserror::Error)]
#[error("unknown content type: {0}")]
pub struct UnknownContentType(pub String);

/// Free-form attributes attached to a record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetadata {
    /// Name of the source document this chunk belongs to. When present, a
    /// matching document node exists in the knowledge graph of the same
    /// dataset build.
    pub document: Option<String>,
    pub chunk_index: Option<u32>,
    pub language: Option<String>,
    pub tags: Vec<String>,
}

impl RecordMetadata {
    /// Merge a patch field-wise; `None` fields are left untouched
    pub fn merge(&mut self, patch: &MetadataPatch) {
        if let Some(document) = &patch.document {
            self.document = Some(document.clone());
        }
        if let Some(chunk_index) = patch.chunk_index {
            self.chunk_index = Some(chunk_index);
        }
        if let Some(language) = &patch.language {
            self.language = Some(language.clone());
        }
        if let Some(tags) = &patch.tags {
            self.tags = tags.clone();
        }
    }

    /// Look up a metadata field by wire name, for filter predicates
    #[must_use]
    pub fn field(&self, name: &str) -> Option<String> {
        match name {
            "document" => self.document.clone(),
            "chunkIndex" => self.chunk_index.map(|v| v.to_string()),
            "language" => self.language.clone(),
            "tags" => Some(self.tags.join(",")),
            _ => None,
        }
    }
}

/// One indexed chunk of a source document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub content: String,
    pub source: String,
    pub content_type: ContentType,
    pub embedding_model: ModelId,
    pub dimensions: u32,
    pub metadata: RecordMetadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sort key for record listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordSort {
    #[default]
    CreatedAt,
    UpdatedAt,
    Model,
    Dimensions,
}

impl RecordSort {
    /// Wire name, as used in query strings
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordSort::CreatedAt => "createdAt",
            RecordSort::UpdatedAt => "updatedAt",
            RecordSort::Model => "model",
            RecordSort::Dimensions => "dimensions",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Wire name, as used in query strings
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Listing query: substring search, filter, sort, and pagination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordQuery {
    /// Case-insensitive substring matched against content and source
    pub search: Option<String>,
    pub content_type: Option<ContentType>,
    pub sort: RecordSort,
    pub order: SortOrder,
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
}

impl Default for RecordQuery {
    fn default() -> Self {
        Self {
            search: None,
            content_type: None,
            sort: RecordSort::default(),
            order: SortOrder::default(),
            page: 1,
            page_size: 10,
        }
    }
}

/// One page of a record listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPage {
    pub records: Vec<Record>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    /// `max(1, ceil(total_count / page_size))`
    pub total_pages: usize,
}

/// Field-wise update to a record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPatch {
    pub content: Option<String>,
    pub source: Option<String>,
    pub metadata: Option<MetadataPatch>,
}

/// Field-wise update to record metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataPatch {
    pub document: Option<String>,
    pub chunk_index: Option<u32>,
    pub language: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Record {
    /// Merge a patch into this record. Timestamps are the caller's concern.
    pub fn apply(&mut self, patch: &RecordPatch) {
        if let Some(content) = &patch.content {
            self.content = content.clone();
        }
        if let Some(source) = &patch.source {
            self.source = source.clone();
        }
        if let Some(metadata) = &patch.metadata {
            self.metadata.merge(metadata);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_merge_keeps_absent_fields() {
        let mut metadata = RecordMetadata {
            document: Some("Quarterly Report".to_string()),
            chunk_index: Some(2),
            language: Some("en".to_string()),
            tags: vec!["finance".to_string()],
        };

        metadata.merge(&MetadataPatch {
            language: Some("de".to_string()),
            ..MetadataPatch::default()
        });

        assert_eq!(metadata.language.as_deref(), Some("de"));
        assert_eq!(metadata.document.as_deref(), Some("Quarterly Report"));
        assert_eq!(metadata.chunk_index, Some(2));
    }

    #[test]
    fn metadata_field_lookup_uses_wire_names() {
        let metadata = RecordMetadata {
            document: Some("Guide".to_string()),
            chunk_index: Some(0),
            language: None,
            tags: vec!["a".to_string(), "b".to_string()],
        };

        assert_eq!(metadata.field("document").as_deref(), Some("Guide"));
        assert_eq!(metadata.field("chunkIndex").as_deref(), Some("0"));
        assert_eq!(metadata.field("tags").as_deref(), Some("a,b"));
        assert_eq!(metadata.field("missing"), None);
    }
}
