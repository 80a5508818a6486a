//! Scenario lifecycle controller
//!
//! Starts, stops, and reconfigures the simulated transport as the active
//! scenario changes. Transitions are serialized; a transition that was
//! superseded while queued performs nothing (effect sequencing, not
//! timestamp comparison). Installation failure degrades to `Off` and is
//! never propagated: the simulation is a convenience, not a dependency.

use crate::error::ScenarioError;
use crate::navigation::NavigationBus;
use crate::resolve::resolve_scenario;
use crate::scenario::Scenario;
use crate::transport::SimulatedClient;
use async_trait::async_trait;
use mirage_repo::{ApiError, ApiRequest, NetworkClient};
use mirage_store::DemoData;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Where the simulated client gets installed. The production wiring hands
/// repositories a `TransportSlot`; tests may substitute their own host.
#[async_trait]
pub trait TransportHost: Send + Sync {
    async fn install(&self, client: Arc<SimulatedClient>) -> Result<(), ScenarioError>;
    async fn clear(&self) -> Result<(), ScenarioError>;
}

/// The default host: a swappable `NetworkClient` slot. While a simulated
/// client is installed the slot answers through it; while empty, calls
/// fail as network errors (the caller is expected to hold a real client
/// in that configuration).
#[derive(Default)]
pub struct TransportSlot {
    inner: parking_lot::Mutex<Option<Arc<SimulatedClient>>>,
}

impl TransportSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a simulated client is currently installed
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.inner.lock().is_some()
    }
}

#[async_trait]
impl TransportHost for TransportSlot {
    async fn install(&self, client: Arc<SimulatedClient>) -> Result<(), ScenarioError> {
        *self.inner.lock() = Some(client);
        Ok(())
    }

    async fn clear(&self) -> Result<(), ScenarioError> {
        *self.inner.lock() = None;
        Ok(())
    }
}

#[async_trait]
impl NetworkClient for TransportSlot {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        // Clone out of the lock before awaiting.
        let client = self.inner.lock().clone();
        match client {
            Some(client) => client.send(request).await,
            None => Err(ApiError::network("simulated transport inactive")),
        }
    }
}

/// Drives scenario transitions and exposes the active scenario
pub struct ScenarioController {
    data: DemoData,
    host: Arc<dyn TransportHost>,
    default_scenario: String,
    /// Ticket counter; a transition whose ticket is stale was superseded.
    epoch: AtomicU64,
    /// Guards re-entrant starts; a start while started just swaps handlers.
    started: AtomicBool,
    transition: tokio::sync::Mutex<()>,
    active: watch::Sender<Scenario>,
}

impl ScenarioController {
    /// Controller over the given accessors and transport host. The default
    /// scenario string is consulted when the query parameter is invalid or
    /// absent; it may itself be invalid, in which case resolution lands on
    /// `Off`.
    #[must_use]
    pub fn new(
        data: DemoData,
        host: Arc<dyn TransportHost>,
        default_scenario: impl Into<String>,
    ) -> Self {
        let (active, _) = watch::channel(Scenario::Off);
        Self {
            data,
            host,
            default_scenario: default_scenario.into(),
            epoch: AtomicU64::new(0),
            started: AtomicBool::new(false),
            transition: tokio::sync::Mutex::new(()),
            active,
        }
    }

    /// The currently active scenario
    #[must_use]
    pub fn current(&self) -> Scenario {
        *self.active.borrow()
    }

    /// Subscribe to scenario changes
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<Scenario> {
        self.active.subscribe()
    }

    /// Resolve the scenario from a query string and apply it. This is the
    /// navigation entry point: route changes without a reload land here.
    pub async fn handle_navigation(&self, query: &str) {
        let scenario = resolve_scenario(query, &self.default_scenario);
        self.apply(scenario).await;
    }

    /// Transition to the given scenario. Idempotent: re-applying the
    /// current scenario swaps in an equivalent handler set.
    pub async fn apply(&self, scenario: Scenario) {
        let ticket = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let _guard = self.transition.lock().await;
        if self.epoch.load(Ordering::SeqCst) != ticket {
            tracing::debug!(scenario = %scenario, "superseded scenario transition discarded");
            return;
        }

        match scenario {
            Scenario::Off => self.stop().await,
            active => self.start(active).await,
        }
    }

    async fn start(&self, scenario: Scenario) {
        if self.started.load(Ordering::SeqCst) {
            tracing::debug!(scenario = %scenario, "swapping simulated handler set");
        } else {
            tracing::info!(scenario = %scenario, "starting simulated transport");
        }

        let client = Arc::new(SimulatedClient::new(self.data.clone(), scenario));
        match self.host.install(client).await {
            Ok(()) => {
                self.started.store(true, Ordering::SeqCst);
                self.active.send_replace(scenario);
            }
            Err(err) => {
                // Best-effort convenience: degrade to off, never propagate.
                tracing::warn!(error = %err, "transport install failed; degrading to off");
                self.started.store(false, Ordering::SeqCst);
                if let Err(err) = self.host.clear().await {
                    tracing::debug!(error = %err, "transport clear after failed install");
                }
                self.active.send_replace(Scenario::Off);
            }
        }
    }

    async fn stop(&self) {
        if self.started.swap(false, Ordering::SeqCst) {
            tracing::info!("stopping simulated transport");
            if let Err(err) = self.host.clear().await {
                tracing::warn!(error = %err, "transport clear failed");
            }
        }
        self.active.send_replace(Scenario::Off);
    }
}

/// Wire a controller to a navigation bus: every route change re-resolves
/// the scenario. Returns the listening task.
pub fn spawn_route_listener(
    controller: Arc<ScenarioController>,
    bus: &NavigationBus,
) -> tokio::task::JoinHandle<()> {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(query) => controller.handle_navigation(&query).await,
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "navigation events lagged");
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}
