//! Mirage scenario store
//!
//! One mutable holder of the current `DemoScenario` plus the per-domain
//! accessors that read and mutate it:
//! - `ScenarioStore`: clone-isolated reads, atomic replace, reset-to-fresh
//! - `DemoData`: the bundle of domain accessors (users, records, graph,
//!   search, metrics, embeddings, status)
//!
//! The store's single most important contract is clone-on-read: every value
//! handed out is a deep copy, so no caller can corrupt canonical state
//! through a returned value.

pub mod data;
pub mod error;
pub mod store;

pub use data::{
    DemoData, EmbeddingsAccess, GraphAccess, MetricsAccess, RecordsAccess, SearchAccess,
    StatusAccess, UsersAccess,
};
pub use error::StoreError;
pub use store::ScenarioStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
