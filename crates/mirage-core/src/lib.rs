//! Mirage - deterministic demo-dataset engine and scenario simulation
//!
//! The facade crate: configuration, runtime wiring, and re-exports of the
//! workspace's public surface.
//!
//! # Example
//!
//! ```rust,ignore
//! use mirage_core::prelude::*;
//!
//! # async fn example() {
//! let runtime = MirageRuntime::new(
//!     MirageConfig::new().with_data_mode(DataMode::Demo),
//! );
//! runtime.start("?scenario=success").await;
//!
//! let users = runtime.factory().users();
//! let everyone = users.list().await.unwrap();
//! # }
//! ```

pub mod config;
pub mod runtime;

pub use config::MirageConfig;
pub use runtime::MirageRuntime;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Mirage
    pub use crate::config::MirageConfig;
    pub use crate::runtime::MirageRuntime;
    pub use mirage_dataset::{build_dataset, build_vector, verify_dataset};
    pub use mirage_model::{DemoContext, DemoScenario};
    pub use mirage_repo::{DataMode, RepositoryFactory};
    pub use mirage_scenario::{resolve_scenario, NavigationBus, Scenario, ScenarioController};
    pub use mirage_store::{DemoData, ScenarioStore};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
