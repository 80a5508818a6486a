//! The scenario type

use serde::{Deserialize, Serialize};

/// Simulated network-behavior profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Interception stopped; calls hit the real network
    #[default]
    Off,
    /// Default handlers only; every request answers from the demo dataset
    Success,
    /// A catch-all handler fails every request identically
    Error,
    /// A fixed artificial delay ahead of the success behavior
    Slow,
}

impl Scenario {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Off => "off",
            Scenario::Success => "success",
            Scenario::Error => "error",
            Scenario::Slow => "slow",
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Scenario {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Scenario::Off),
            "success" => Ok(Scenario::Success),
            "error" => Ok(Scenario::Error),
            "slow" => Ok(Scenario::Slow),
            other => Err(UnknownScenario(other.to_string())),
        }
    }
}

/// Unparseable scenario string
#[derive(Debug, thiserror::Error)]
#[error("unknown scenario: {0}")]
pub struct UnknownScenario(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn only_the_four_values_parse() {
        for scenario in [Scenario::Off, Scenario::Success, Scenario::Error, Scenario::Slow] {
            assert_eq!(Scenario::from_str(scenario.as_str()).unwrap(), scenario);
        }
        assert!(Scenario::from_str("bogus").is_err());
        assert!(Scenario::from_str("SLOW").is_err());
    }
}
