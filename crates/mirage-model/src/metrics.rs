//! Usage metrics: cards, time series, and leaderboards

use crate::ids::{RecordId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reporting window selectable in the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricsPeriod {
    /// Last 24 hours; served from the hourly analytics series
    #[serde(rename = "24h")]
    Day,
    /// Last 7 days of the daily trend series
    #[serde(rename = "7d")]
    Week,
    /// Full 30-day daily trend series
    #[serde(rename = "30d")]
    #[default]
    Month,
}

impl MetricsPeriod {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricsPeriod::Day => "24h",
            MetricsPeriod::Week => "7d",
            MetricsPeriod::Month => "30d",
        }
    }
}

impl std::str::FromStr for MetricsPeriod {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24h" => Ok(MetricsPeriod::Day),
            "7d" => Ok(MetricsPeriod::Week),
            "30d" => Ok(MetricsPeriod::Month),
            other => Err(UnknownPeriod(other.to_string())),
        }
    }
}

/// Unparseable metrics period string
#[derive(Debug, thiserror::Error)]
#[error("unknown metrics period: {0}")]
pub struct UnknownPeriod(pub String);

/// Direction of a card's movement against the prior window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// One headline stat card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub id: String,
    pub title: String,
    pub value: f64,
    pub unit: Option<String>,
    /// Percent change against the prior window
    pub delta_pct: f64,
    pub direction: TrendDirection,
}

/// One day of the request/error/latency trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub timestamp: DateTime<Utc>,
    pub requests: u64,
    pub errors: u64,
    pub latency_ms: f64,
}

/// One hour of the query/embedding analytics series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsPoint {
    pub timestamp: DateTime<Utc>,
    pub queries: u64,
    pub embeddings: u64,
    pub cache_hits: u64,
}

/// Most-retrieved record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopHit {
    pub record_id: RecordId,
    pub source: String,
    pub hits: u64,
}

/// Heaviest requester. Always a subset of the dataset's users, ordered by
/// descending request count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUser {
    pub user_id: UserId,
    pub name: String,
    pub request_count: u64,
}

/// Aggregate metrics payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsOverview {
    pub cards: Vec<MetricCard>,
    /// 30 daily points, oldest first
    pub trends: Vec<TrendPoint>,
    /// 168 hourly points, oldest first
    pub analytics: Vec<AnalyticsPoint>,
    pub top_hits: Vec<TopHit>,
    pub top_users: Vec<TopUser>,
}
