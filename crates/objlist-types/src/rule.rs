use serde::{Deserialize, Serialize};

use crate::entry::ObjectEntry;

/// Policy deciding when two entries name the same object.
///
/// Shipped content is identified by name and type alone: its checksum varies
/// between encoded variants of the same file. Custom content is matched
/// strictly, checksum included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchRule {
    /// Flag bits marking an entry as shipped content. If either side has any
    /// of these set, checksums are ignored.
    pub wildcard_flags: u32,
    /// Flag bits still compared when the checksum is ignored.
    pub type_flags: u32,
}

impl MatchRule {
    /// The legacy rule: the source-game nibble enables the wildcard and only
    /// the type nibble of the flags is compared under it.
    pub const LEGACY: Self = Self {
        wildcard_flags: 0xF0,
        type_flags: 0x0F,
    };

    /// A rule that never wildcards: full binary equality of non-empty
    /// entries.
    pub const STRICT: Self = Self {
        wildcard_flags: 0,
        type_flags: u32::MAX,
    };

    /// Returns `true` if `a` and `b` identify the same object.
    ///
    /// Empty entries never match, not even each other.
    pub fn matches(&self, a: &ObjectEntry, b: &ObjectEntry) -> bool {
        if a.is_empty() || b.is_empty() {
            return false;
        }
        if a.name != b.name {
            return false;
        }
        if self.is_wildcard(a) || self.is_wildcard(b) {
            (a.flags & self.type_flags) == (b.flags & self.type_flags)
        } else {
            a.flags == b.flags && a.checksum == b.checksum
        }
    }

    /// Returns `true` if comparisons involving `entry` ignore checksums.
    pub fn is_wildcard(&self, entry: &ObjectEntry) -> bool {
        entry.flags & self.wildcard_flags != 0
    }
}

impl Default for MatchRule {
    fn default() -> Self {
        Self::LEGACY
    }
}
