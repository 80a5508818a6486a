//! Scenario-layer errors

/// Errors raised by the scenario lifecycle
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// The transport host refused the simulated client
    #[error("transport installation failed: {0}")]
    InstallFailed(String),
}
