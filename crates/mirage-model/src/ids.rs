//! Typed entity ids
//!
//! String-backed newtypes so a `RecordId` can never be passed where a
//! `NodeId` is expected. Serialized transparently as plain strings.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw id value
            #[inline]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the raw id value
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Identifier of a workspace user
    UserId
);
string_id!(
    /// Identifier of a user group
    GroupId
);
string_id!(
    /// Identifier of an indexed record (document chunk)
    RecordId
);
string_id!(
    /// Identifier of a knowledge-graph node
    NodeId
);
string_id!(
    /// Identifier of a knowledge-graph edge
    EdgeId
);
string_id!(
    /// Identifier of an embedding model
    ModelId
);
