//! Testing utilities for the Mirage workspace
//!
//! Shared fixtures: the anchor context the determinism suite pins, and
//! seeded stores/accessors for isolated tests.

use chrono::{TimeZone, Utc};
use mirage_model::DemoContext;
use mirage_store::{DemoData, ScenarioStore};
use std::sync::Arc;

/// The documented anchor: seed 20260207 at 2026-02-07T12:00:00Z
#[must_use]
pub fn anchor_context() -> DemoContext {
    DemoContext::new(
        20_260_207,
        Utc.with_ymd_and_hms(2026, 2, 7, 12, 0, 0).unwrap(),
    )
}

/// A fresh store built from the anchor context
#[must_use]
pub fn anchor_store() -> Arc<ScenarioStore> {
    Arc::new(ScenarioStore::new(anchor_context()))
}

/// Accessors over a fresh anchor store
#[must_use]
pub fn anchor_data() -> DemoData {
    DemoData::new(anchor_store())
}

/// Accessors over a fresh store with an arbitrary seed at the anchor time
#[must_use]
pub fn seeded_data(seed: u64) -> DemoData {
    let context = DemoContext::new(seed, anchor_context().now);
    DemoData::new(Arc::new(ScenarioStore::new(context)))
}
