//! Dataset build context
//!
//! The sole parameterization of dataset synthesis: a seed and a reference
//! instant, plus the workspace identity the data is attributed to. Two
//! builds from the same context are deep-equal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seed used when no explicit seed is configured
pub const DEFAULT_SEED: u64 = 20_260_207;

/// Reference instant used when no explicit one is configured:
/// 2026-02-07T12:00:00Z. Fixed rather than wall-clock so independently
/// started processes agree on the default dataset.
const DEFAULT_REFERENCE_EPOCH_SECS: i64 = 1_770_465_600;

/// Build context for dataset synthesis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoContext {
    /// Seed for all pseudo-random generation
    pub seed: u64,
    /// Reference instant; no generated timestamp may exceed it
    pub now: DateTime<Utc>,
    pub workspace_id: String,
    pub workspace_name: String,
}

impl DemoContext {
    /// Create a context with the default workspace identity
    #[must_use]
    pub fn new(seed: u64, now: DateTime<Utc>) -> Self {
        Self {
            seed,
            now,
            workspace_id: "ws-demo".to_string(),
            workspace_name: "Mirage Demo Workspace".to_string(),
        }
    }

    /// With workspace identity
    #[must_use]
    pub fn with_workspace(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.workspace_id = id.into();
        self.workspace_name = name.into();
        self
    }

    /// The fixed default reference instant
    #[must_use]
    pub fn default_reference_time() -> DateTime<Utc> {
        DateTime::from_timestamp(DEFAULT_REFERENCE_EPOCH_SECS, 0)
            .unwrap_or_else(Utc::now)
    }
}

impl Default for DemoContext {
    fn default() -> Self {
        Self::new(DEFAULT_SEED, Self::default_reference_time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reference_time_is_fixed() {
        let now = DemoContext::default_reference_time();
        assert_eq!(now.to_rfc3339(), "2026-02-07T12:00:00+00:00");
    }

    #[test]
    fn default_context_uses_default_seed() {
        let ctx = DemoContext::default();
        assert_eq!(ctx.seed, DEFAULT_SEED);
        assert_eq!(ctx.workspace_id, "ws-demo");
    }
}
