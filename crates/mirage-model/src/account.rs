//! Workspace account snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subscription tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Team,
    Enterprise,
}

/// Snapshot of the workspace account. Usage figures agree with the dataset
/// they were built alongside (seats = users, records used = record count).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSnapshot {
    pub workspace_id: String,
    pub workspace_name: String,
    pub plan: PlanTier,
    pub seat_limit: u32,
    pub seats_used: u32,
    pub record_limit: u64,
    pub records_used: u64,
    pub created_at: DateTime<Utc>,
}
