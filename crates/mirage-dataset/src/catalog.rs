//! Fixed synthesis catalogs
//!
//! Every name the builder draws from lives here. The catalogs are part of
//! the dataset contract: changing an entry changes every build.

use mirage_model::ContentType;

/// Template for one source document and its chunk expansion
#[derive(Debug, Clone, Copy)]
pub struct DocumentTemplate {
    pub name: &'static str,
    pub topic: &'static str,
    pub source: &'static str,
    pub content_type: ContentType,
    pub chunks: usize,
    pub language: &'static str,
    pub tags: &'static [&'static str],
    /// Must name an entry of `GROUP_TEMPLATES`
    pub owner_group: &'static str,
}

/// Template for one user group
#[derive(Debug, Clone, Copy)]
pub struct GroupTemplate {
    pub name: &'static str,
    pub description: &'static str,
}

/// Spec of one embedding model catalog entry
#[derive(Debug, Clone, Copy)]
pub struct ModelSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: &'static str,
    pub dimensions: u32,
    pub max_input: u32,
}

pub const GROUP_TEMPLATES: &[GroupTemplate] = &[
    GroupTemplate {
        name: "Research",
        description: "Model evaluation and corpus curation",
    },
    GroupTemplate {
        name: "Engineering",
        description: "Platform and ingestion pipelines",
    },
    GroupTemplate {
        name: "Support",
        description: "Customer-facing documentation and triage",
    },
];

pub const DOCUMENT_TEMPLATES: &[DocumentTemplate] = &[
    DocumentTemplate {
        name: "Platform Onboarding Guide",
        topic: "onboarding",
        source: "docs/onboarding-guide.md",
        content_type: ContentType::Markdown,
        chunks: 4,
        language: "en",
        tags: &["docs", "getting-started"],
        owner_group: "Support",
    },
    DocumentTemplate {
        name: "Embedding API Reference",
        topic: "embeddings",
        source: "docs/api/embeddings.md",
        content_type: ContentType::Markdown,
        chunks: 5,
        language: "en",
        tags: &["api", "reference"],
        owner_group: "Engineering",
    },
    DocumentTemplate {
        name: "Quarterly Usage Report",
        topic: "reporting",
        source: "reports/2025-q4-usage.pdf",
        content_type: ContentType::Pdf,
        chunks: 3,
        language: "en",
        tags: &["finance", "internal"],
        owner_group: "Research",
    },
    DocumentTemplate {
        name: "Retrieval Tuning Handbook",
        topic: "retrieval",
        source: "docs/retrieval-tuning.md",
        content_type: ContentType::Markdown,
        chunks: 4,
        language: "en",
        tags: &["search", "tuning"],
        owner_group: "Research",
    },
    DocumentTemplate {
        name: "Incident Response Runbook",
        topic: "operations",
        source: "runbooks/incident-response.html",
        content_type: ContentType::Html,
        chunks: 3,
        language: "en",
        tags: &["ops", "runbook"],
        owner_group: "Engineering",
    },
    DocumentTemplate {
        name: "Datenschutzrichtlinie",
        topic: "compliance",
        source: "legal/datenschutz.txt",
        content_type: ContentType::Text,
        chunks: 2,
        language: "de",
        tags: &["legal"],
        owner_group: "Support",
    },
    DocumentTemplate {
        name: "Graph Schema Overview",
        topic: "knowledge-graph",
        source: "docs/graph-schema.md",
        content_type: ContentType::Markdown,
        chunks: 3,
        language: "en",
        tags: &["graph", "schema"],
        owner_group: "Engineering",
    },
    DocumentTemplate {
        name: "Billing FAQ",
        topic: "billing",
        source: "docs/billing-faq.md",
        content_type: ContentType::Markdown,
        chunks: 2,
        language: "en",
        tags: &["docs", "billing"],
        owner_group: "Support",
    },
];

pub const FIRST_NAMES: &[&str] = &[
    "Dana", "Miguel", "Priya", "Jonas", "Amara", "Felix", "Noor", "Ivan", "Lena", "Tomas",
    "Sofia", "Kenji",
];

pub const LAST_NAMES: &[&str] = &[
    "Fields", "Santos", "Raman", "Keller", "Okafor", "Braun", "Haddad", "Petrov", "Vogel",
    "Marek", "Lindgren", "Mori",
];

pub const SERVICES: &[&str] = &[
    "api-gateway",
    "embedding-service",
    "search-service",
    "graph-service",
    "ingest-worker",
];

/// Log message templates; `{}` is replaced with the service name
pub const LOG_MESSAGES: &[(&str, &str)] = &[
    ("error", "upstream timeout after 30s talking to {}"),
    ("error", "connection pool exhausted in {}"),
    ("warn", "slow query detected in {} (took 2.4s)"),
    ("warn", "retry budget at 80% for {}"),
    ("info", "{} rollout completed"),
    ("info", "autoscaler added one replica to {}"),
];

/// Phrase fragments for synthesized chunk bodies
pub const CONTENT_SNIPPETS: &[&str] = &[
    "covers configuration prerequisites and common pitfalls",
    "walks through the request lifecycle step by step",
    "lists every supported parameter with defaults",
    "summarizes observed behavior over the reporting window",
    "explains the scoring model and its trade-offs",
    "describes escalation paths and paging policy",
    "details schema constraints and migration notes",
    "answers the questions our customers ask most",
];

pub const TEXT_MODELS: &[ModelSpec] = &[
    ModelSpec {
        id: "text-embed-small",
        name: "Text Embed Small",
        provider: "mirage-labs",
        dimensions: 384,
        max_input: 8192,
    },
    ModelSpec {
        id: "text-embed-large",
        name: "Text Embed Large",
        provider: "mirage-labs",
        dimensions: 1024,
        max_input: 8192,
    },
    ModelSpec {
        id: "text-embed-multilingual",
        name: "Text Embed Multilingual",
        provider: "polyglot-ai",
        dimensions: 768,
        max_input: 4096,
    },
];

pub const IMAGE_MODELS: &[ModelSpec] = &[
    ModelSpec {
        id: "image-embed-base",
        name: "Image Embed Base",
        provider: "mirage-labs",
        dimensions: 512,
        max_input: 1_048_576,
    },
    ModelSpec {
        id: "image-embed-hd",
        name: "Image Embed HD",
        provider: "mirage-labs",
        dimensions: 1024,
        max_input: 4_194_304,
    },
];
