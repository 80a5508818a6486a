//! Server-status domain accessor (read-only)

use crate::store::ScenarioStore;
use mirage_model::{ErrorLog, HealthCheck, LatencyResponse, ServiceUsage};
use std::sync::Arc;

/// Read-only views of the server-status slice of the dataset
#[derive(Clone)]
pub struct StatusAccess {
    store: Arc<ScenarioStore>,
}

impl StatusAccess {
    #[must_use]
    pub fn new(store: Arc<ScenarioStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn health(&self) -> HealthCheck {
        self.store.snapshot().health
    }

    #[must_use]
    pub fn latency(&self) -> LatencyResponse {
        self.store.snapshot().latency
    }

    #[must_use]
    pub fn service_usage(&self) -> Vec<ServiceUsage> {
        self.store.snapshot().service_usage
    }

    #[must_use]
    pub fn error_logs(&self) -> Vec<ErrorLog> {
        self.store.snapshot().error_logs
    }
}
