//! Server status: health, latency, per-service usage, and error logs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Overall service health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceHealth {
    Ok,
    Degraded,
    Down,
}

/// Health probe response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    pub status: ServiceHealth,
    pub version: String,
    pub uptime_secs: u64,
    pub checked_at: DateTime<Utc>,
}

/// One latency sample of the one-minute history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencySample {
    pub timestamp: DateTime<Utc>,
    pub latency_ms: f64,
}

/// Latency summary derived from the sample history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencyResponse {
    pub current_ms: f64,
    pub average_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    /// 60 one-minute samples, oldest first
    pub history: Vec<LatencySample>,
}

/// Aggregated usage of one backing service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUsage {
    pub service: String,
    pub requests: u64,
    pub errors: u64,
    pub avg_latency_ms: f64,
    pub uptime_pct: f64,
}

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
}

/// One sampled log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorLog {
    pub id: String,
    pub level: LogLevel,
    pub service: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
