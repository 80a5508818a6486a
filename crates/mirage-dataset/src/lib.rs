//! Mirage dataset synthesis
//!
//! Deterministic generation of the demo dataset:
//! - `SeededRng`: linear-congruential generator; same seed, same sequence
//! - `hash_string`: 32-bit string hashing for sub-seed derivation
//! - `build_vector`: pseudo-embedding vectors, pure in (length, key, seed)
//! - `percentile`: the index-clamp estimator used for latency summaries
//! - `build_dataset`: the pure `(context) -> DemoScenario` builder
//! - `integrity`: post-hoc verification of the dataset's cross-references
//!
//! Everything here is a pure function of the `DemoContext`. Two calls with
//! equal contexts produce deep-equal datasets.

pub mod builder;
pub mod catalog;
pub mod hash;
pub mod integrity;
pub mod rng;
pub mod stats;
pub mod vector;

pub use builder::build_dataset;
pub use hash::hash_string;
pub use integrity::{verify_dataset, IntegrityCheck, IntegrityViolation};
pub use rng::SeededRng;
pub use stats::{mean, percentile};
pub use vector::build_vector;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
