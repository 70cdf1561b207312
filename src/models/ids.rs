//! Strongly-typed ID wrappers for category entities
//!
//! Newtype wrappers prevent mixing up category and group IDs at compile
//! time. IDs serialize transparently as UUIDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(CategoryId, "cat-");
define_id!(CategoryGroupId, "grp-");

impl CategoryId {
    /// The fixed sentinel ID of the synthetic "To Be Budgeted" category.
    ///
    /// Stable across runs so hosts can recognize a cover sourced from
    /// unallocated funds.
    pub fn to_be_budgeted() -> Self {
        Self(Uuid::nil())
    }

    /// Whether this is the synthetic "To Be Budgeted" ID
    pub fn is_to_be_budgeted(&self) -> bool {
        self.0.is_nil()
    }
}

impl CategoryGroupId {
    /// The fixed sentinel ID of the synthetic "To Be Budgeted" group
    pub fn to_be_budgeted() -> Self {
        Self(Uuid::nil())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = CategoryId::new();
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display() {
        let id = CategoryId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("cat-"));
        assert_eq!(display.len(), 12); // "cat-" + 8 chars
    }

    #[test]
    fn test_id_serialization() {
        let id = CategoryId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_from_str_strips_prefix() {
        let id = CategoryId::new();
        let display_full = id.as_uuid().to_string();
        let parsed: CategoryId = display_full.parse().unwrap();
        assert_eq!(id, parsed);

        let prefixed = format!("cat-{}", display_full);
        let parsed: CategoryId = prefixed.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_to_be_budgeted_sentinel() {
        let tbb = CategoryId::to_be_budgeted();
        assert!(tbb.is_to_be_budgeted());
        assert_eq!(tbb, CategoryId::to_be_budgeted());
        assert!(!CategoryId::new().is_to_be_budgeted());
    }
}
