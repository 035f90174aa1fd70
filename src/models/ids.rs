//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time. Ids are opaque strings on disk; fresh ids are
//! random UUIDs, but any previously stored string is accepted as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Get the raw identifier
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Short form used in listings
            pub fn short(&self) -> String {
                let head: String = self.0.chars().take(8).collect();
                format!("{}{}", $display_prefix, head)
            }

            /// Check whether user input refers to this id
            ///
            /// Accepts the full id, or a prefix of at least four characters
            /// with or without the display prefix.
            pub fn matches(&self, input: &str) -> bool {
                let input = input.trim();
                let input = input.strip_prefix($display_prefix).unwrap_or(input);
                input == self.0 || (input.len() >= 4 && self.0.starts_with(input))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Ok(Self(s.strip_prefix($display_prefix).unwrap_or(s).to_string()))
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(BudgetId, "bud-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let id1 = TransactionId::new();
        let id2 = TransactionId::new();
        assert_ne!(id1, id2);
        assert!(Uuid::parse_str(id1.as_str()).is_ok());
    }

    #[test]
    fn test_short_display() {
        let id = TransactionId::from("550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(id.short(), "txn-550e8400");
        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_matches_prefix() {
        let id = TransactionId::from("550e8400-e29b-41d4-a716-446655440000");
        assert!(id.matches("550e8400-e29b-41d4-a716-446655440000"));
        assert!(id.matches("txn-550e8400"));
        assert!(id.matches("550e"));
        assert!(!id.matches("550"));
        assert!(!id.matches("660e8400"));
    }

    #[test]
    fn test_legacy_timestamp_ids_round_trip() {
        let json = r#""1718000000000""#;
        let id: BudgetId = serde_json::from_str(json).unwrap();
        assert_eq!(id.as_str(), "1718000000000");
        assert_eq!(serde_json::to_string(&id).unwrap(), json);
    }

    #[test]
    fn test_from_str_strips_prefix() {
        let id: TransactionId = "txn-abcd1234".parse().unwrap();
        assert_eq!(id.as_str(), "abcd1234");
    }
}
