//! Runtime configuration
//!
//! One flat config struct with builder-style constructors, plus `from_env`
//! for process-level overrides. Invalid values never abort startup; they
//! fall back to defaults with a warning.

use chrono::{DateTime, Utc};
use mirage_model::{DemoContext, DEFAULT_SEED};
use mirage_repo::DataMode;

/// Environment variable selecting the data mode (`api` or `demo`)
pub const ENV_DATA_MODE: &str = "MIRAGE_DATA_MODE";
/// Environment variable naming the default scenario
pub const ENV_SCENARIO: &str = "MIRAGE_SCENARIO";
/// Environment variable overriding the dataset seed
pub const ENV_SEED: &str = "MIRAGE_SEED";

/// Mirage runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MirageConfig {
    /// Which backend answers repository calls
    pub data_mode: DataMode,
    /// Default scenario consulted when the query parameter is invalid or
    /// absent. May itself be invalid; resolution then lands on `off`.
    pub default_scenario: String,
    /// Seed for dataset synthesis
    pub seed: u64,
    /// Reference instant for dataset synthesis
    pub now: DateTime<Utc>,
    pub workspace_name: String,
}

impl MirageConfig {
    /// Default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With data mode
    #[must_use]
    pub fn with_data_mode(mut self, mode: DataMode) -> Self {
        self.data_mode = mode;
        self
    }

    /// With default scenario
    #[must_use]
    pub fn with_default_scenario(mut self, scenario: impl Into<String>) -> Self {
        self.default_scenario = scenario.into();
        self
    }

    /// With dataset seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// With reference instant
    #[must_use]
    pub fn with_reference_time(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Defaults overridden by `MIRAGE_DATA_MODE`, `MIRAGE_SCENARIO`, and
    /// `MIRAGE_SEED`
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(ENV_DATA_MODE) {
            match raw.parse() {
                Ok(mode) => config.data_mode = mode,
                Err(_) => tracing::warn!(value = %raw, "invalid {ENV_DATA_MODE}, keeping default"),
            }
        }
        if let Ok(raw) = std::env::var(ENV_SCENARIO) {
            // Kept verbatim; validity is checked at resolution time.
            config.default_scenario = raw;
        }
        if let Ok(raw) = std::env::var(ENV_SEED) {
            match raw.parse() {
                Ok(seed) => config.seed = seed,
                Err(_) => tracing::warn!(value = %raw, "invalid {ENV_SEED}, keeping default"),
            }
        }

        config
    }

    /// The dataset build context this configuration describes
    #[must_use]
    pub fn context(&self) -> DemoContext {
        DemoContext::new(self.seed, self.now).with_workspace("ws-demo", self.workspace_name.clone())
    }
}

impl Default for MirageConfig {
    fn default() -> Self {
        Self {
            data_mode: DataMode::default(),
            default_scenario: "off".to_string(),
            seed: DEFAULT_SEED,
            now: DemoContext::default_reference_time(),
            workspace_name: "Mirage Demo Workspace".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain_overrides_fields() {
        let config = MirageConfig::new()
            .with_data_mode(DataMode::Demo)
            .with_default_scenario("success")
            .with_seed(7);

        assert_eq!(config.data_mode, DataMode::Demo);
        assert_eq!(config.default_scenario, "success");
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn context_carries_seed_and_workspace() {
        let config = MirageConfig::new().with_seed(99);
        let context = config.context();
        assert_eq!(context.seed, 99);
        assert_eq!(context.workspace_name, "Mirage Demo Workspace");
    }
}
