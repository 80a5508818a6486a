//! Metrics domain accessor

use crate::store::ScenarioStore;
use mirage_model::{AnalyticsPoint, MetricsOverview, MetricsPeriod, TopHit, TopUser, TrendPoint};
use std::sync::Arc;

/// Read access to the metrics slice of the dataset
#[derive(Clone)]
pub struct MetricsAccess {
    store: Arc<ScenarioStore>,
}

impl MetricsAccess {
    #[must_use]
    pub fn new(store: Arc<ScenarioStore>) -> Self {
        Self { store }
    }

    /// The overview with both series sliced to the requested window
    #[must_use]
    pub fn overview(&self, period: MetricsPeriod) -> MetricsOverview {
        let mut overview = self.store.snapshot().metrics_overview;
        overview.trends = tail(overview.trends, daily_window(period));
        overview.analytics = tail(overview.analytics, hourly_window(period));
        overview
    }

    /// Daily trend points for the window
    #[must_use]
    pub fn trends(&self, period: MetricsPeriod) -> Vec<TrendPoint> {
        tail(
            self.store.snapshot().metrics_overview.trends,
            daily_window(period),
        )
    }

    /// Hourly analytics points for the window
    #[must_use]
    pub fn analytics(&self, period: MetricsPeriod) -> Vec<AnalyticsPoint> {
        tail(
            self.store.snapshot().metrics_overview.analytics,
            hourly_window(period),
        )
    }

    /// Precomputed most-retrieved records
    #[must_use]
    pub fn top_hits(&self) -> Vec<TopHit> {
        self.store.snapshot().metrics_overview.top_hits
    }

    /// Precomputed heaviest requesters
    #[must_use]
    pub fn top_users(&self) -> Vec<TopUser> {
        self.store.snapshot().metrics_overview.top_users
    }
}

fn daily_window(period: MetricsPeriod) -> usize {
    match period {
        MetricsPeriod::Day => 1,
        MetricsPeriod::Week => 7,
        MetricsPeriod::Month => 30,
    }
}

fn hourly_window(period: MetricsPeriod) -> usize {
    match period {
        // 24h is served from the hourly series; longer windows keep the
        // full 168-hour history.
        MetricsPeriod::Day => 24,
        MetricsPeriod::Week | MetricsPeriod::Month => 168,
    }
}

fn tail<T>(mut series: Vec<T>, window: usize) -> Vec<T> {
    let len = series.len();
    if len > window {
        series.drain(..len - window);
    }
    series
}
