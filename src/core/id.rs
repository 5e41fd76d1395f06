//! Content-item identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a content item (always positive).
///
/// Host backends hand out raw signed integers; [`ItemId::coerce`] is the
/// boundary that turns them into either a valid identifier or "absent".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Create from a known-positive value. Returns `None` for zero.
    pub const fn new(raw: u64) -> Option<Self> {
        if raw > 0 { Some(Self(raw)) } else { None }
    }

    /// Coerce a raw host identifier.
    ///
    /// - zero → `None` (no item)
    /// - negative → absolute value (malformed host ids are never rejected)
    /// - positive → itself
    pub const fn coerce(raw: i64) -> Option<Self> {
        if raw == 0 {
            None
        } else {
            Some(Self(raw.unsigned_abs()))
        }
    }

    /// Get the numeric identifier.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
