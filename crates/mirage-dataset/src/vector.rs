//! Pseudo-embedding vectors
//!
//! Demo-mode embeddings must behave like real ones: identical inputs yield
//! identical vectors. The vector is a pure function of (length, key, seed).

use crate::hash::hash_string;
use crate::rng::SeededRng;

/// Derive a vector of exactly `length` floats in [-1, 1)
#[must_use]
pub fn build_vector(length: usize, key: &str, seed: u64) -> Vec<f64> {
    let sub_seed = u64::from(hash_string(&format!("{seed}:{key}")));
    let mut rng = SeededRng::new(sub_seed);
    (0..length).map(|_| rng.next_f64() * 2.0 - 1.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_is_pure_in_its_inputs() {
        let a = build_vector(384, "model-a:hello world", 42);
        let b = build_vector(384, "model-a:hello world", 42);
        assert_eq!(a, b);
    }

    #[test]
    fn vector_has_requested_length() {
        for length in [0, 1, 384, 1024] {
            assert_eq!(build_vector(length, "k", 1).len(), length);
        }
    }

    #[test]
    fn vector_components_stay_in_range() {
        for value in build_vector(512, "range-check", 7) {
            assert!((-1.0..1.0).contains(&value));
        }
    }

    #[test]
    fn key_and_seed_both_matter() {
        let base = build_vector(16, "k", 1);
        assert_ne!(base, build_vector(16, "k2", 1));
        assert_ne!(base, build_vector(16, "k", 2));
    }
}
