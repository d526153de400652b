//! Typed IDs for type-safe entity references.
//!
//! Records arrive from the REST layer with integer surrogate keys. Wrapping
//! them prevents accidentally passing a `CanId` where an `AgreementId` is
//! expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from a raw surrogate key.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw surrogate key.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

typed_id!(BudgetLineId, "Unique identifier for a budget line item.");
typed_id!(AgreementId, "Unique identifier for an agreement.");
typed_id!(
    CanId,
    "Unique identifier for a CAN (Common Accounting Number)."
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_id_roundtrip_raw() {
        let id = BudgetLineId::new(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(BudgetLineId::from(42), id);
    }

    #[test]
    fn test_typed_id_display() {
        assert_eq!(CanId::new(7).to_string(), "7");
    }

    #[test]
    fn test_typed_id_from_str() {
        assert_eq!(AgreementId::from_str(" 15 ").unwrap(), AgreementId::new(15));
        assert!(AgreementId::from_str("abc").is_err());
    }

    #[test]
    fn test_typed_id_serializes_transparently() {
        let json = serde_json::to_string(&CanId::new(3)).unwrap();
        assert_eq!(json, "3");

        let parsed: CanId = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, CanId::new(3));
    }
}
