//! Navigation signal source
//!
//! Client-side route changes happen without a full reload, so the scenario
//! layer needs its own signal. The two navigation-mutation entry points
//! (`push` and `replace`) both notify subscribers with the new query
//! string; the lifecycle controller re-resolves on every event.

use tokio::sync::broadcast;

/// Broadcast of route changes. Payload is the query-string part of the
/// target URL (possibly empty).
#[derive(Clone)]
pub struct NavigationBus {
    tx: broadcast::Sender<String>,
}

impl NavigationBus {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self { tx }
    }

    /// Navigate forward to a new location
    pub fn push(&self, location: &str) {
        self.notify(location);
    }

    /// Replace the current location
    pub fn replace(&self, location: &str) {
        self.notify(location);
    }

    /// Subscribe to route-change events
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }

    fn notify(&self, location: &str) {
        let query = query_of(location);
        tracing::debug!(query = %query, "route change");
        // No subscribers is fine; the controller may not be attached.
        let _ = self.tx.send(query);
    }
}

impl Default for NavigationBus {
    fn default() -> Self {
        Self::new()
    }
}

fn query_of(location: &str) -> String {
    location
        .split_once('?')
        .map(|(_, query)| query.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn push_and_replace_both_deliver_the_query() {
        let bus = NavigationBus::new();
        let mut rx = bus.subscribe();

        bus.push("/records?scenario=slow&page=2");
        bus.replace("/metrics");

        assert_eq!(rx.recv().await.unwrap(), "scenario=slow&page=2");
        assert_eq!(rx.recv().await.unwrap(), "");
    }
}
