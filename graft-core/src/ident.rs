//! Point identifiers
//!
//! Points have no stored representation of their own; a point *is* its
//! identifier. Edge primary keys are drawn from the same identifier space,
//! so minting a point never requires a round trip to storage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a point, and the primary-key type for edges.
///
/// A random 128-bit UUID rendered in its canonical hyphenated form.
/// Generation is decentralized: no coordination with the store, so ids can
/// be pre-minted for edges that have not been inserted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointId(Uuid);

impl PointId {
    /// Mint a fresh identifier. Never fails, has no side effects.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for PointId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Canonical hyphenated lowercase form, e.g.
        // 67e55044-10b1-426f-9247-bb680e5fe0c8
        self.0.fmt(f)
    }
}

impl FromStr for PointId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn generated_ids_are_distinct() {
        let a = PointId::generate();
        let b = PointId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn generated_ids_are_distinct_in_bulk() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(PointId::generate()));
        }
    }

    #[test]
    fn display_is_canonical_hyphenated() {
        let id = PointId::generate();
        let text = id.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(text.matches('-').count(), 4);
        assert_eq!(text, text.to_lowercase());
    }

    #[test]
    fn serializes_as_bare_string() {
        let id = PointId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }

    #[test]
    fn parses_own_display_form() {
        let id = PointId::generate();
        let parsed: PointId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    proptest! {
        #[test]
        fn display_parse_roundtrip(raw in any::<u128>()) {
            let id = PointId::from(Uuid::from_u128(raw));
            let parsed: PointId = id.to_string().parse().unwrap();
            prop_assert_eq!(parsed, id);
        }
    }
}
