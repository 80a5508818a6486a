//! The scenario state store
//!
//! Holds exactly one `DemoScenario`, built lazily from its `DemoContext` at
//! first use. All access goes through the lock; reads return deep clones,
//! mutations run to completion under the lock, so no caller can observe a
//! half-updated dataset.

use chrono::{DateTime, Utc};
use mirage_dataset::build_dataset;
use mirage_model::{DemoContext, DemoScenario};
use once_cell::sync::Lazy;
use parking_lot::Mutex;

static GLOBAL: Lazy<ScenarioStore> = Lazy::new(ScenarioStore::default);

struct StoreState {
    context: DemoContext,
    scenario: Option<DemoScenario>,
}

/// Mutable holder of the current demo dataset
pub struct ScenarioStore {
    inner: Mutex<StoreState>,
}

impl ScenarioStore {
    /// Create a store that will lazily build from the given context
    #[must_use]
    pub fn new(context: DemoContext) -> Self {
        Self {
            inner: Mutex::new(StoreState {
                context,
                scenario: None,
            }),
        }
    }

    /// The process-wide default instance. Tests and wiring that need
    /// isolation should construct their own store instead.
    #[must_use]
    pub fn global() -> &'static ScenarioStore {
        &GLOBAL
    }

    /// The context the current dataset was (or will be) built from
    #[must_use]
    pub fn context(&self) -> DemoContext {
        self.inner.lock().context.clone()
    }

    /// Deep clone of the current dataset, building it first if needed
    #[must_use]
    pub fn snapshot(&self) -> DemoScenario {
        let mut state = self.inner.lock();
        scenario_mut(&mut state).clone()
    }

    /// Atomically swap in a replacement dataset
    pub fn replace(&self, next: DemoScenario) {
        let mut state = self.inner.lock();
        state.scenario = Some(next);
        tracing::debug!("scenario store replaced");
    }

    /// Rebuild from a fresh context; same (seed, now) reproduces the same
    /// dataset byte for byte
    pub fn reset(&self, seed: u64, now: DateTime<Utc>) {
        let mut state = self.inner.lock();
        let context = DemoContext::new(seed, now)
            .with_workspace(state.context.workspace_id.clone(), state.context.workspace_name.clone());
        state.scenario = Some(build_dataset(&context));
        state.context = context;
        tracing::debug!(seed, "scenario store reset");
    }

    /// Run a mutation against the canonical dataset under the lock.
    /// Internal to the accessor layer; UI-facing callers only see clones.
    pub fn update<R>(&self, f: impl FnOnce(&mut DemoScenario) -> R) -> R {
        let mut state = self.inner.lock();
        f(scenario_mut(&mut state))
    }
}

impl Default for ScenarioStore {
    fn default() -> Self {
        Self::new(DemoContext::default())
    }
}

fn scenario_mut(state: &mut StoreState) -> &mut DemoScenario {
    let context = state.context.clone();
    state.scenario.get_or_insert_with(|| {
        tracing::debug!(seed = context.seed, "lazily building demo dataset");
        build_dataset(&context)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_lazily_builds_once() {
        let store = ScenarioStore::default();
        let first = store.snapshot();
        let second = store.snapshot();
        assert_eq!(first, second);
    }

    #[test]
    fn mutating_a_snapshot_does_not_touch_canonical_state() {
        let store = ScenarioStore::default();
        let mut snapshot = store.snapshot();
        snapshot.users.clear();
        snapshot.records.clear();

        let fresh = store.snapshot();
        assert!(!fresh.users.is_empty());
        assert!(!fresh.records.is_empty());
    }

    #[test]
    fn replace_swaps_the_dataset() {
        let store = ScenarioStore::default();
        let mut next = store.snapshot();
        next.users.truncate(1);

        store.replace(next.clone());
        assert_eq!(store.snapshot(), next);
    }

    #[test]
    fn reset_reproduces_the_same_build_for_the_same_inputs() {
        let store = ScenarioStore::default();
        let ctx = store.context();

        let before = store.snapshot();
        store.update(|s| s.users.clear());
        store.reset(ctx.seed, ctx.now);

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn global_store_serves_snapshots() {
        // Read-only: other tests in this process may share the instance.
        let snapshot = ScenarioStore::global().snapshot();
        assert!(!snapshot.records.is_empty());
    }

    #[test]
    fn update_runs_against_canonical_state() {
        let store = ScenarioStore::default();
        let count = store.update(|s| {
            s.users.remove(0);
            s.users.len()
        });
        assert_eq!(store.snapshot().users.len(), count);
    }
}
