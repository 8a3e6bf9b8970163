use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use objlist_types::{EncodingScheme, ObjectType};

use crate::error::{GroupError, GroupResult};
use crate::index::Slots;

/// Static configuration for one object group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupDescriptor {
    /// The object type this group holds.
    pub object_type: ObjectType,
    /// Maximum number of loaded objects of this type.
    pub capacity: u16,
    /// Preferred chunk encoding when the group is persisted.
    pub encoding: EncodingScheme,
}

impl GroupDescriptor {
    pub const fn new(object_type: ObjectType, capacity: u16, encoding: EncodingScheme) -> Self {
        Self {
            object_type,
            capacity,
            encoding,
        }
    }
}

/// Every object group, in declared order.
pub const STANDARD_GROUPS: [GroupDescriptor; ObjectType::COUNT] = [
    GroupDescriptor::new(ObjectType::Ride, 128, EncodingScheme::Rle),
    GroupDescriptor::new(ObjectType::SmallScenery, 252, EncodingScheme::Rle),
    GroupDescriptor::new(ObjectType::LargeScenery, 128, EncodingScheme::Rle),
    GroupDescriptor::new(ObjectType::Walls, 128, EncodingScheme::Rle),
    GroupDescriptor::new(ObjectType::Banners, 32, EncodingScheme::Rle),
    GroupDescriptor::new(ObjectType::Paths, 16, EncodingScheme::Rle),
    GroupDescriptor::new(ObjectType::PathBits, 15, EncodingScheme::Rle),
    GroupDescriptor::new(ObjectType::SceneryGroup, 19, EncodingScheme::Rle),
    GroupDescriptor::new(ObjectType::ParkEntrance, 1, EncodingScheme::Rle),
    GroupDescriptor::new(ObjectType::Water, 1, EncodingScheme::Rle),
    GroupDescriptor::new(ObjectType::ScenarioText, 1, EncodingScheme::Rotate),
    // Not part of the legacy object list; never written as legacy chunks.
    GroupDescriptor::new(ObjectType::TerrainSurface, 18, EncodingScheme::None),
    GroupDescriptor::new(ObjectType::TerrainEdge, 255, EncodingScheme::None),
    GroupDescriptor::new(ObjectType::Station, 255, EncodingScheme::None),
    GroupDescriptor::new(ObjectType::Music, 0, EncodingScheme::None),
];

const LEGACY_GROUP_COUNT: usize = 11;
const STANDARD_SLICE: &[GroupDescriptor] = &STANDARD_GROUPS;

/// The groups stored in a legacy save's object list (rides through
/// scenario text).
pub const LEGACY_GROUPS: &[GroupDescriptor] = STANDARD_SLICE.split_at(LEGACY_GROUP_COUNT).0;

static STANDARD: GroupTable = GroupTable::from_static(STANDARD_SLICE);
static LEGACY: GroupTable = GroupTable::from_static(LEGACY_GROUPS);

/// Ordered, immutable table of object groups.
///
/// The concatenation of group capacities in declaration order defines the
/// flat index space. Tables never change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupTable {
    groups: Cow<'static, [GroupDescriptor]>,
    total: usize,
}

impl GroupTable {
    /// Build a table from descriptors in strictly ascending type order.
    ///
    /// Types may be skipped, but not repeated or reordered.
    pub fn new(groups: impl Into<Vec<GroupDescriptor>>) -> GroupResult<Self> {
        let groups = groups.into();
        for pair in groups.windows(2) {
            if pair[1].object_type <= pair[0].object_type {
                return Err(GroupError::UnorderedGroups {
                    previous: pair[0].object_type,
                    object_type: pair[1].object_type,
                });
            }
        }
        let total = groups.iter().map(|g| g.capacity as usize).sum();
        Ok(Self {
            groups: Cow::Owned(groups),
            total,
        })
    }

    const fn from_static(groups: &'static [GroupDescriptor]) -> Self {
        let mut total = 0;
        let mut i = 0;
        while i < groups.len() {
            total += groups[i].capacity as usize;
            i += 1;
        }
        Self {
            groups: Cow::Borrowed(groups),
            total,
        }
    }

    /// The process-wide table covering every object type.
    pub fn standard() -> &'static GroupTable {
        &STANDARD
    }

    /// The process-wide table matching the legacy save-format object list.
    pub fn legacy() -> &'static GroupTable {
        &LEGACY
    }

    /// All descriptors in declared order.
    pub fn descriptors(&self) -> &[GroupDescriptor] {
        &self.groups
    }

    /// Sum of all group capacities: the size of the flat index space.
    pub fn total_capacity(&self) -> usize {
        self.total
    }

    /// Returns `true` if this table declares `object_type`.
    pub fn contains(&self, object_type: ObjectType) -> bool {
        self.descriptor(object_type).is_ok()
    }

    /// The descriptor for `object_type`.
    pub fn descriptor(&self, object_type: ObjectType) -> GroupResult<&GroupDescriptor> {
        self.groups
            .iter()
            .find(|g| g.object_type == object_type)
            .ok_or(GroupError::InvalidType(object_type.as_u8()))
    }

    /// Fixed slot count for `object_type`.
    pub fn capacity_of(&self, object_type: ObjectType) -> GroupResult<u16> {
        self.descriptor(object_type).map(|g| g.capacity)
    }

    /// Preferred chunk encoding for `object_type`.
    pub fn encoding_of(&self, object_type: ObjectType) -> GroupResult<EncodingScheme> {
        self.descriptor(object_type).map(|g| g.encoding)
    }

    /// [`capacity_of`](Self::capacity_of) for a raw type byte.
    pub fn capacity_of_raw(&self, raw: u8) -> GroupResult<u16> {
        self.capacity_of(Self::parse_type(raw)?)
    }

    /// [`encoding_of`](Self::encoding_of) for a raw type byte.
    pub fn encoding_of_raw(&self, raw: u8) -> GroupResult<EncodingScheme> {
        self.encoding_of(Self::parse_type(raw)?)
    }

    /// Flat index of slot 0 of `object_type`'s group.
    pub fn offset_of(&self, object_type: ObjectType) -> GroupResult<usize> {
        let mut offset = 0;
        for group in self.groups.iter() {
            if group.object_type == object_type {
                return Ok(offset);
            }
            offset += group.capacity as usize;
        }
        Err(GroupError::InvalidType(object_type.as_u8()))
    }

    /// Iterate over every slot address in flat index order.
    pub fn slots(&self) -> Slots<'_> {
        Slots::new(self)
    }

    fn parse_type(raw: u8) -> GroupResult<ObjectType> {
        ObjectType::try_from(raw).map_err(|_| GroupError::InvalidType(raw))
    }
}

impl Default for GroupTable {
    fn default() -> Self {
        Self::standard().clone()
    }
}
