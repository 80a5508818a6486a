//! Small statistics helpers for the latency summaries

/// Percentile by sorted-index clamp: `index = floor((n-1) × quantile)`,
/// clamped to [0, n-1]. Empty input returns 0. This estimator is slightly
/// biased versus interpolating rules; downstream fixtures depend on its
/// exact outputs, so it must not be "corrected".
#[must_use]
pub fn percentile(values: &[f64], quantile: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let raw = ((sorted.len() - 1) as f64 * quantile).floor();
    // A negative quantile saturates to index 0 on the cast.
    let index = (raw as usize).min(sorted.len() - 1);
    sorted[index]
}

/// Arithmetic mean; empty input returns 0
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_returns_zero() {
        assert_eq!(percentile(&[], 0.5), 0.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn zero_quantile_is_minimum() {
        assert_eq!(percentile(&[3.0, 1.0, 2.0], 0.0), 1.0);
    }

    #[test]
    fn unit_quantile_is_maximum() {
        assert_eq!(percentile(&[3.0, 1.0, 2.0], 1.0), 3.0);
    }

    #[test]
    fn index_is_floored_not_interpolated() {
        // n = 4, q = 0.5: floor(3 × 0.5) = 1, so the second-smallest value.
        assert_eq!(percentile(&[10.0, 20.0, 30.0, 40.0], 0.5), 20.0);
    }

    #[test]
    fn out_of_range_quantiles_clamp() {
        assert_eq!(percentile(&[1.0, 2.0], 5.0), 2.0);
        assert_eq!(percentile(&[1.0, 2.0], -1.0), 1.0);
    }
}
