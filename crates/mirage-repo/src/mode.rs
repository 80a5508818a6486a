//! Runtime data-mode switch

use serde::{Deserialize, Serialize};

/// Which backend answers repository calls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    /// Real backend through the network client
    #[default]
    Api,
    /// In-memory demo dataset
    Demo,
}

impl DataMode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DataMode::Api => "api",
            DataMode::Demo => "demo",
        }
    }
}

impl std::fmt::Display for DataMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DataMode {
    type Err = UnknownDataMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "api" => Ok(DataMode::Api),
            "demo" => Ok(DataMode::Demo),
            other => Err(UnknownDataMode(other.to_string())),
        }
    }
}

/// Unparseable data-mode string
#[derive(Debug, thiserror::Error)]
#[error("unknown data mode: {0}")]
pub struct UnknownDataMode(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(DataMode::from_str("DEMO").unwrap(), DataMode::Demo);
        assert_eq!(DataMode::from_str("api").unwrap(), DataMode::Api);
        assert!(DataMode::from_str("hybrid").is_err());
    }

    #[test]
    fn api_is_the_default() {
        assert_eq!(DataMode::default(), DataMode::Api);
    }
}
