use objlist_groups::TypedIndex;
use objlist_types::ObjectEntry;

/// A loaded object as seen by the registry.
pub trait LoadedObject {
    /// The identity the object was loaded from.
    fn identity(&self) -> ObjectEntry;

    /// The object's legacy data block. Owned by the object.
    fn legacy_data(&self) -> &[u8];
}

/// Source of loaded objects, addressed by slot.
///
/// Implementations own the objects; the registry only borrows them. Both
/// methods return `None` for empty or out-of-range slots.
pub trait ObjectProvider {
    type Object: LoadedObject;

    /// The object loaded at a (type, slot) address.
    fn loaded_object(&self, index: TypedIndex) -> Option<&Self::Object>;

    /// The object loaded at a flat index.
    fn loaded_object_at(&self, flat: usize) -> Option<&Self::Object>;
}

/// A plain owned object: an identity plus its legacy data block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacyObject {
    pub entry: ObjectEntry,
    pub data: Vec<u8>,
}

impl LegacyObject {
    pub fn new(entry: ObjectEntry, data: impl Into<Vec<u8>>) -> Self {
        Self {
            entry,
            data: data.into(),
        }
    }
}

impl LoadedObject for LegacyObject {
    fn identity(&self) -> ObjectEntry {
        self.entry
    }

    fn legacy_data(&self) -> &[u8] {
        &self.data
    }
}

impl<T: LoadedObject + ?Sized> LoadedObject for Box<T> {
    fn identity(&self) -> ObjectEntry {
        (**self).identity()
    }

    fn legacy_data(&self) -> &[u8] {
        (**self).legacy_data()
    }
}

impl<T: LoadedObject + ?Sized> LoadedObject for std::sync::Arc<T> {
    fn identity(&self) -> ObjectEntry {
        (**self).identity()
    }

    fn legacy_data(&self) -> &[u8] {
        (**self).legacy_data()
    }
}
