//! Mirage scenario layer
//!
//! Makes repository traffic behave according to a selectable runtime
//! scenario without touching application code:
//! - `Scenario`: off / success / error / slow
//! - `resolve_scenario`: query-parameter resolution with configured default
//! - `SimulatedClient`: a `NetworkClient` answering from the demo dataset
//!   through an ordered handler table, with scenario-specific handlers
//!   layered ahead of the defaults
//! - `TransportSlot`: the construction-boundary seam the simulated client
//!   is installed into
//! - `ScenarioController`: idempotent start/stop with stale-transition
//!   discard, driven by navigation events
//! - `NavigationBus`: the route-change signal source

pub mod controller;
pub mod error;
pub mod handlers;
pub mod navigation;
pub mod resolve;
pub mod scenario;
pub mod transport;

pub use controller::{spawn_route_listener, ScenarioController, TransportHost, TransportSlot};
pub use error::ScenarioError;
pub use handlers::{default_handlers, handler_set, Handler, Route};
pub use navigation::NavigationBus;
pub use resolve::resolve_scenario;
pub use scenario::Scenario;
pub use transport::SimulatedClient;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
