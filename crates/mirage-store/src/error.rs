//! Store error taxonomy
//!
//! Reads never fail: a missing entity is `None`. Mutating or deleting a
//! nonexistent entity is an integration bug, so it surfaces as an error.

/// Errors raised by demo domain accessors
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// Mutation targeted an entity that does not exist
    #[error("{kind} not found: {id}")]
    MissingEntity { kind: &'static str, id: String },
}

impl StoreError {
    /// Missing-entity error for the given kind and id
    #[inline]
    pub fn missing(kind: &'static str, id: impl Into<String>) -> Self {
        Self::MissingEntity {
            kind,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entity_names_kind_and_id() {
        let err = StoreError::missing("user", "user-99");
        assert_eq!(err.to_string(), "user not found: user-99");
    }
}
