//! Scenario resolution
//!
//! Reads the `scenario` query parameter; invalid or absent values fall back
//! to the configured default; an invalid default resolves to `Off`.

use crate::scenario::Scenario;

/// Resolve the active scenario from a raw query string (with or without a
/// leading `?`) and a configured default.
#[must_use]
pub fn resolve_scenario(query: &str, default: &str) -> Scenario {
    query_param(query, "scenario")
        .and_then(|value| value.parse().ok())
        .or_else(|| default.parse().ok())
        .unwrap_or(Scenario::Off)
}

fn query_param(query: &str, key: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key).then(|| v.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_parameter_wins_over_default() {
        assert_eq!(resolve_scenario("?scenario=slow", "error"), Scenario::Slow);
        assert_eq!(resolve_scenario("scenario=error", "success"), Scenario::Error);
    }

    #[test]
    fn invalid_parameter_falls_back_to_default() {
        assert_eq!(resolve_scenario("?scenario=bogus", "success"), Scenario::Success);
        assert_eq!(resolve_scenario("", "slow"), Scenario::Slow);
    }

    #[test]
    fn invalid_default_resolves_to_off() {
        assert_eq!(resolve_scenario("?scenario=bogus", "bogus"), Scenario::Off);
        assert_eq!(resolve_scenario("", ""), Scenario::Off);
    }

    #[test]
    fn parameter_is_found_among_others() {
        assert_eq!(
            resolve_scenario("?tab=records&scenario=error&page=2", "off"),
            Scenario::Error
        );
    }
}
