//! Newtype IDs for type-safe identifiers.
//!
//! Catalog identifiers are opaque, stable strings (e.g. `"nova-hoodie"`).
//! Wrapping them keeps a `ProductId` from being passed where an
//! `ExhibitionId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A stable catalog identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }
    };
}

define_id!(ProductId);
define_id!(ExhibitionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("nova-hoodie");
        assert_eq!(id.as_str(), "nova-hoodie");
    }

    #[test]
    fn test_id_from_str() {
        let id: ExhibitionId = "nova".into();
        assert_eq!(format!("{}", id), "nova");
    }

    #[test]
    fn test_id_serializes_as_bare_string() {
        let id = ProductId::new("nova-pants");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""nova-pants""#);

        let back: ProductId = serde_json::from_str(r#""nova-pants""#).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_compares_with_str() {
        let id = ProductId::new("nova-accessory");
        assert!(id == *"nova-accessory");
        assert!(id != *"nova-hoodie");
    }
}
