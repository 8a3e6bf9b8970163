use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::kind::ObjectType;
use crate::rule::MatchRule;

/// Size in bytes of an entry in the legacy layout.
pub const ENTRY_SIZE: usize = 16;

/// Fixed length of the name field.
pub const NAME_LENGTH: usize = 8;

const TYPE_MASK: u32 = 0x0F;
const SOURCE_GAME_MASK: u32 = 0xF0;

/// Binary identity of a content object.
///
/// Laid out on disk as 16 bytes: little-endian `flags`, an 8-byte `name`
/// and a little-endian `checksum`. The low nibble of `flags` carries the
/// [`ObjectType`], the next nibble the source game.
///
/// The all-ones and all-zeros patterns are sentinels meaning "no entry".
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectEntry {
    /// Type nibble, source-game nibble, and any further flag bits.
    pub flags: u32,
    /// Space-padded ASCII name, not necessarily NUL-terminated.
    pub name: [u8; NAME_LENGTH],
    /// Checksum of the object's data.
    pub checksum: u32,
}

impl ObjectEntry {
    /// The all-ones sentinel used to mark an unused slot.
    pub const EMPTY: Self = Self {
        flags: u32::MAX,
        name: [0xFF; NAME_LENGTH],
        checksum: u32::MAX,
    };

    /// The all-zeros sentinel, also treated as "no entry".
    pub const NULL: Self = Self {
        flags: 0,
        name: [0; NAME_LENGTH],
        checksum: 0,
    };

    /// Create an entry for `object_type` with a custom-content source.
    ///
    /// `name` is truncated or space-padded to [`NAME_LENGTH`] bytes.
    pub fn new(object_type: ObjectType, name: &str, checksum: u32) -> Self {
        let mut buf = [b' '; NAME_LENGTH];
        let bytes = name.as_bytes();
        let len = bytes.len().min(NAME_LENGTH);
        buf[..len].copy_from_slice(&bytes[..len]);
        Self {
            flags: object_type.as_u8() as u32,
            name: buf,
            checksum,
        }
    }

    /// Decode from the 16-byte legacy layout.
    pub fn from_bytes(bytes: [u8; ENTRY_SIZE]) -> Self {
        let mut name = [0u8; NAME_LENGTH];
        name.copy_from_slice(&bytes[4..12]);
        Self {
            flags: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            name,
            checksum: u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
        }
    }

    /// Encode to the 16-byte legacy layout.
    pub fn to_bytes(&self) -> [u8; ENTRY_SIZE] {
        let mut out = [0u8; ENTRY_SIZE];
        out[0..4].copy_from_slice(&self.flags.to_le_bytes());
        out[4..12].copy_from_slice(&self.name);
        out[12..16].copy_from_slice(&self.checksum.to_le_bytes());
        out
    }

    /// Returns `true` if this entry is one of the two sentinels.
    ///
    /// Compares the raw record as two 64-bit words; no field is interpreted.
    pub fn is_empty(&self) -> bool {
        let bytes = self.to_bytes();
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        lo.copy_from_slice(&bytes[..8]);
        hi.copy_from_slice(&bytes[8..]);
        let (a, b) = (u64::from_ne_bytes(lo), u64::from_ne_bytes(hi));
        (a == u64::MAX && b == u64::MAX) || (a == 0 && b == 0)
    }

    /// The object type carried in the low flag nibble.
    pub fn object_type(&self) -> Result<ObjectType, TypeError> {
        ObjectType::try_from((self.flags & TYPE_MASK) as u8)
    }

    /// The source-game nibble. Zero means custom content.
    pub fn source_game_bits(&self) -> u8 {
        ((self.flags & SOURCE_GAME_MASK) >> 4) as u8
    }

    /// Returns `true` if `self` and `other` identify the same object under
    /// `rule`.
    pub fn matches(&self, other: &ObjectEntry, rule: &MatchRule) -> bool {
        rule.matches(self, other)
    }

    /// Compare under the legacy [`MatchRule`].
    pub fn compare(a: &ObjectEntry, b: &ObjectEntry) -> bool {
        MatchRule::LEGACY.matches(a, b)
    }

    /// Stable human-readable key: `NNNNNNNN/FFFFCCCC`.
    ///
    /// The name is cut at its first NUL and space-padded to eight
    /// characters; flags and checksum are each rendered as exactly four
    /// uppercase hex digits of their low 16 bits.
    pub fn identifier(&self) -> String {
        let name: String = self
            .name_bytes()
            .iter()
            .map(|&b| if b.is_ascii() && !b.is_ascii_control() { b as char } else { '?' })
            .collect();
        format!(
            "{:<8}/{:04X}{:04X}",
            name,
            self.flags & 0xFFFF,
            self.checksum & 0xFFFF
        )
    }

    /// The name as a C string would read it from a `max_len`-byte buffer.
    ///
    /// At most `min(max_len, NAME_LENGTH + 1) - 1` bytes are taken, and the
    /// result stops at the first NUL. A zero-length buffer yields `""`.
    pub fn fixed_name(&self, max_len: usize) -> String {
        let limit = max_len.min(NAME_LENGTH + 1).saturating_sub(1);
        let bytes = self.name_bytes();
        let bytes = &bytes[..bytes.len().min(limit)];
        String::from_utf8_lossy(bytes).into_owned()
    }

    /// Hex encoding of the 16-byte legacy layout.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse the 32-character hex form produced by [`to_hex`](Self::to_hex).
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        let arr: [u8; ENTRY_SIZE] = bytes.as_slice().try_into().map_err(|_| {
            TypeError::InvalidLength {
                expected: ENTRY_SIZE,
                actual: bytes.len(),
            }
        })?;
        Ok(Self::from_bytes(arr))
    }

    fn name_bytes(&self) -> &[u8] {
        let end = self
            .name
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(NAME_LENGTH);
        &self.name[..end]
    }
}

impl Default for ObjectEntry {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for ObjectEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "ObjectEntry(empty)")
        } else {
            write!(f, "ObjectEntry({})", self.identifier())
        }
    }
}

impl fmt::Display for ObjectEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier())
    }
}

impl From<[u8; ENTRY_SIZE]> for ObjectEntry {
    fn from(bytes: [u8; ENTRY_SIZE]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<ObjectEntry> for [u8; ENTRY_SIZE] {
    fn from(entry: ObjectEntry) -> Self {
        entry.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn demo() -> ObjectEntry {
        ObjectEntry {
            flags: 0x0001,
            name: *b"DEMO    ",
            checksum: 0x00AB,
        }
    }

    #[test]
    fn all_ones_is_empty() {
        assert!(ObjectEntry::from_bytes([0xFF; ENTRY_SIZE]).is_empty());
        assert!(ObjectEntry::EMPTY.is_empty());
    }

    #[test]
    fn all_zeros_is_empty() {
        assert!(ObjectEntry::from_bytes([0; ENTRY_SIZE]).is_empty());
        assert!(ObjectEntry::NULL.is_empty());
    }

    #[test]
    fn real_entry_is_not_empty() {
        assert!(!demo().is_empty());
    }

    #[test]
    fn mixed_sentinel_halves_are_not_empty() {
        let mut bytes = [0u8; ENTRY_SIZE];
        bytes[8..].fill(0xFF);
        assert!(!ObjectEntry::from_bytes(bytes).is_empty());
    }

    #[test]
    fn byte_layout_is_little_endian() {
        let bytes = demo().to_bytes();
        assert_eq!(&bytes[0..4], &[0x01, 0x00, 0x00, 0x00]);
        assert_eq!(&bytes[4..12], b"DEMO    ");
        assert_eq!(&bytes[12..16], &[0xAB, 0x00, 0x00, 0x00]);
        assert_eq!(ObjectEntry::from_bytes(bytes), demo());
    }

    #[test]
    fn identifier_is_zero_padded() {
        assert_eq!(demo().identifier(), "DEMO    /000100AB");
        assert_eq!(demo().to_string(), "DEMO    /000100AB");
    }

    #[test]
    fn identifier_pads_short_names() {
        let entry = ObjectEntry {
            flags: 0x80,
            name: *b"AB\0\0\0\0\0\0",
            checksum: 0xDEAD_BEEF,
        };
        assert_eq!(entry.identifier(), "AB      /0080BEEF");
    }

    #[test]
    fn fixed_name_truncates_to_buffer() {
        let entry = demo();
        assert_eq!(entry.fixed_name(0), "");
        assert_eq!(entry.fixed_name(1), "");
        assert_eq!(entry.fixed_name(5), "DEMO");
        assert_eq!(entry.fixed_name(9), "DEMO    ");
        assert_eq!(entry.fixed_name(64), "DEMO    ");
    }

    #[test]
    fn fixed_name_stops_at_nul() {
        let entry = ObjectEntry {
            flags: 0,
            name: *b"ABC\0XYZW",
            checksum: 1,
        };
        assert_eq!(entry.fixed_name(9), "ABC");
    }

    #[test]
    fn new_pads_and_sets_type() {
        let entry = ObjectEntry::new(ObjectType::Paths, "TARMAC", 7);
        assert_eq!(&entry.name, b"TARMAC  ");
        assert_eq!(entry.object_type(), Ok(ObjectType::Paths));
        assert_eq!(entry.source_game_bits(), 0);
    }

    #[test]
    fn new_truncates_long_names() {
        let entry = ObjectEntry::new(ObjectType::Ride, "ROLLERCOASTER", 0);
        assert_eq!(&entry.name, b"ROLLERCO");
    }

    #[test]
    fn object_type_rejects_unknown_nibble() {
        let entry = ObjectEntry {
            flags: 0x8F,
            name: *b"BADTYPE ",
            checksum: 0,
        };
        assert_eq!(entry.object_type(), Err(TypeError::InvalidType(0x0F)));
        assert_eq!(entry.source_game_bits(), 8);
    }

    #[test]
    fn compare_uses_legacy_rule() {
        let a = demo();
        let mut b = demo();
        b.checksum = 0x1111;
        assert!(ObjectEntry::compare(&a, &a));
        assert!(!ObjectEntry::compare(&a, &b));
        assert!(!ObjectEntry::compare(&ObjectEntry::EMPTY, &ObjectEntry::NULL));
    }

    #[test]
    fn hex_roundtrip() {
        let hex = demo().to_hex();
        assert_eq!(hex.len(), 32);
        assert_eq!(ObjectEntry::from_hex(&hex).unwrap(), demo());
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert_eq!(
            ObjectEntry::from_hex("abcd"),
            Err(TypeError::InvalidLength {
                expected: ENTRY_SIZE,
                actual: 2
            })
        );
        assert!(matches!(
            ObjectEntry::from_hex("zz"),
            Err(TypeError::InvalidHex(_))
        ));
    }

    #[test]
    fn default_is_empty_sentinel() {
        assert_eq!(ObjectEntry::default(), ObjectEntry::EMPTY);
        assert_eq!(format!("{:?}", ObjectEntry::default()), "ObjectEntry(empty)");
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&demo()).unwrap();
        let parsed: ObjectEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, demo());
    }

    proptest! {
        #[test]
        fn single_byte_change_leaves_sentinel(pos in 0usize..ENTRY_SIZE, byte in 1u8..0xFF) {
            let mut ones = [0xFFu8; ENTRY_SIZE];
            ones[pos] = byte;
            prop_assert!(!ObjectEntry::from_bytes(ones).is_empty());

            let mut zeros = [0u8; ENTRY_SIZE];
            zeros[pos] = byte;
            prop_assert!(!ObjectEntry::from_bytes(zeros).is_empty());
        }

        #[test]
        fn identifier_shape_is_fixed(flags in any::<u32>(), name in any::<[u8; 8]>(), checksum in any::<u32>()) {
            let id = ObjectEntry { flags, name, checksum }.identifier();
            prop_assert_eq!(id.chars().count(), 17);
            prop_assert_eq!(id.chars().nth(8), Some('/'));
        }
    }
}
