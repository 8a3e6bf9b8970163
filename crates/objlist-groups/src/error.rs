//! Error types for the group table.

use objlist_types::{ObjectType, SlotIndex};

/// Errors from group table lookups and index translation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupError {
    /// The type value is not declared by this table.
    #[error("invalid object type: {0}")]
    InvalidType(u8),

    /// The slot is past the end of its group.
    #[error("slot {slot} out of range for {object_type} (capacity {capacity})")]
    InvalidSlot {
        object_type: ObjectType,
        slot: SlotIndex,
        capacity: u16,
    },

    /// The flat index is past the total capacity of all groups.
    #[error("flat index {index} out of range (total capacity {total})")]
    IndexOutOfRange { index: usize, total: usize },

    /// Descriptors were not given in strictly ascending type order.
    #[error("group {object_type} declared out of order after {previous}")]
    UnorderedGroups {
        previous: ObjectType,
        object_type: ObjectType,
    },
}

/// Convenience alias for group table results.
pub type GroupResult<T> = Result<T, GroupError>;
