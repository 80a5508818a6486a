//! Runtime wiring
//!
//! Assembles the store, accessors, repository factory, and (in demo mode,
//! outside release builds) the scenario controller with its navigation
//! listener. This is the construction boundary the scenario layer injects
//! into.

use crate::config::MirageConfig;
use mirage_repo::{DataMode, NetworkClient, RepositoryFactory, UnconfiguredClient};
use mirage_scenario::{spawn_route_listener, NavigationBus, ScenarioController, TransportSlot};
use mirage_store::{DemoData, ScenarioStore};
use std::sync::Arc;

/// Fully wired Mirage runtime
pub struct MirageRuntime {
    config: MirageConfig,
    data: DemoData,
    factory: RepositoryFactory,
    navigation: NavigationBus,
    controller: Option<Arc<ScenarioController>>,
    slot: Arc<TransportSlot>,
}

impl MirageRuntime {
    /// Wire a runtime without a production network client; live-mode calls
    /// fail as network errors until one is supplied via `with_client`.
    #[must_use]
    pub fn new(config: MirageConfig) -> Self {
        Self::with_client(config, Arc::new(UnconfiguredClient))
    }

    /// Wire a runtime around the host application's network client
    #[must_use]
    pub fn with_client(config: MirageConfig, client: Arc<dyn NetworkClient>) -> Self {
        let store = Arc::new(ScenarioStore::new(config.context()));
        let data = DemoData::new(store);
        let slot = Arc::new(TransportSlot::new());
        let factory = RepositoryFactory::new(config.data_mode, client, data.clone());

        // The simulation is wired only in demo mode and only outside
        // release builds; production traffic must never be interceptable.
        let controller = (config.data_mode == DataMode::Demo && cfg!(debug_assertions)).then(|| {
            Arc::new(ScenarioController::new(
                data.clone(),
                slot.clone() as Arc<dyn mirage_scenario::TransportHost>,
                config.default_scenario.clone(),
            ))
        });

        Self {
            config,
            data,
            factory,
            navigation: NavigationBus::new(),
            controller,
            slot,
        }
    }

    #[must_use]
    pub fn config(&self) -> &MirageConfig {
        &self.config
    }

    /// The demo accessors over this runtime's store
    #[must_use]
    pub fn data(&self) -> &DemoData {
        &self.data
    }

    /// The per-domain repository factory
    #[must_use]
    pub fn factory(&self) -> &RepositoryFactory {
        &self.factory
    }

    /// The navigation signal source the host app reports route changes to
    #[must_use]
    pub fn navigation(&self) -> &NavigationBus {
        &self.navigation
    }

    /// The scenario controller, when the simulation is wired
    #[must_use]
    pub fn controller(&self) -> Option<Arc<ScenarioController>> {
        self.controller.clone()
    }

    /// The transport slot the simulated client is installed into
    #[must_use]
    pub fn transport_slot(&self) -> Arc<TransportSlot> {
        self.slot.clone()
    }

    /// Resolve the initial scenario from the entry URL's query string and
    /// start listening for route changes. A no-op when the simulation is
    /// not wired.
    pub async fn start(&self, initial_query: &str) {
        let Some(controller) = &self.controller else {
            tracing::debug!("scenario simulation not wired; start is a no-op");
            return;
        };
        controller.handle_navigation(initial_query).await;
        let _listener = spawn_route_listener(controller.clone(), &self.navigation);
        tracing::info!(scenario = %controller.current(), "mirage runtime started");
    }
}
