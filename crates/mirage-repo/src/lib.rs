//! Mirage repositories
//!
//! One contract per entity domain, two conforming implementations:
//! - Live repositories delegate to the `NetworkClient` seam (the real HTTP
//!   client and its schema validation live outside this workspace)
//! - Demo repositories delegate to the in-memory domain accessors
//!
//! A `RepositoryFactory` selects the implementation per call from the
//! runtime data mode; calling code never branches on which backend answered.

pub mod client;
pub mod error;
pub mod factory;
pub mod mode;
pub mod repos;
pub mod routes;

pub use client::{ApiRequest, Method, NetworkClient, UnconfiguredClient};
pub use error::ApiError;
pub use factory::RepositoryFactory;
pub use mode::DataMode;
pub use repos::{
    EmbeddingsRepository, GraphRepository, MetricsRepository, RecordsRepository, SearchRepository,
    StatusRepository, UsersRepository,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
