//! Translation between flat indices and (type, slot) addresses.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use objlist_types::{ObjectType, SlotIndex};

use crate::error::{GroupError, GroupResult};
use crate::table::GroupTable;

/// A slot address within one object group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypedIndex {
    pub object_type: ObjectType,
    pub slot: SlotIndex,
}

impl TypedIndex {
    pub const fn new(object_type: ObjectType, slot: SlotIndex) -> Self {
        Self { object_type, slot }
    }
}

impl fmt::Display for TypedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.object_type, self.slot)
    }
}

impl GroupTable {
    /// Translate a flat index into its (type, slot) address.
    ///
    /// Walks the groups in order, subtracting each capacity until the
    /// remainder falls inside the current group. Indices at or past
    /// [`total_capacity`](Self::total_capacity) are rejected.
    pub fn to_typed_index(&self, flat: usize) -> GroupResult<TypedIndex> {
        let total = self.total_capacity();
        if flat >= total {
            debug!(flat, total, "flat index out of range");
            return Err(GroupError::IndexOutOfRange { index: flat, total });
        }
        let mut remainder = flat;
        for group in self.descriptors() {
            let capacity = group.capacity as usize;
            if remainder < capacity {
                // remainder < capacity <= u16::MAX
                return Ok(TypedIndex::new(group.object_type, remainder as SlotIndex));
            }
            remainder -= capacity;
        }
        Err(GroupError::IndexOutOfRange { index: flat, total })
    }

    /// Translate a (type, slot) address into its flat index.
    pub fn to_flat_index(&self, index: TypedIndex) -> GroupResult<usize> {
        let capacity = self.capacity_of(index.object_type)?;
        if index.slot >= capacity {
            return Err(GroupError::InvalidSlot {
                object_type: index.object_type,
                slot: index.slot,
                capacity,
            });
        }
        Ok(self.offset_of(index.object_type)? + index.slot as usize)
    }
}

/// Iterator over every slot of a [`GroupTable`] in flat index order.
///
/// Created by [`GroupTable::slots`].
#[derive(Clone, Debug)]
pub struct Slots<'a> {
    table: &'a GroupTable,
    group: usize,
    slot: u16,
}

impl<'a> Slots<'a> {
    pub(crate) fn new(table: &'a GroupTable) -> Self {
        Self {
            table,
            group: 0,
            slot: 0,
        }
    }
}

impl Iterator for Slots<'_> {
    type Item = TypedIndex;

    fn next(&mut self) -> Option<TypedIndex> {
        let groups = self.table.descriptors();
        while let Some(group) = groups.get(self.group) {
            if self.slot < group.capacity {
                let index = TypedIndex::new(group.object_type, self.slot);
                self.slot += 1;
                return Some(index);
            }
            self.group += 1;
            self.slot = 0;
        }
        None
    }
}
