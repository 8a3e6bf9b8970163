use tracing::debug;

use objlist_groups::{GroupTable, TypedIndex};

use crate::error::RegistryResult;
use crate::provider::{LegacyObject, LoadedObject, ObjectProvider};

/// Slot-array object provider.
///
/// Holds one optional object per slot of its [`GroupTable`], stored in flat
/// index order. Intended for tests and for embedding where the caller owns
/// object lifetimes directly.
pub struct InMemoryProvider<O = LegacyObject> {
    table: GroupTable,
    slots: Vec<Option<O>>,
}

impl<O: LoadedObject> InMemoryProvider<O> {
    /// Create an empty provider shaped by `table`.
    pub fn new(table: GroupTable) -> Self {
        let slots = std::iter::repeat_with(|| None)
            .take(table.total_capacity())
            .collect();
        Self { table, slots }
    }

    /// The table this provider's slots are laid out by.
    pub fn table(&self) -> &GroupTable {
        &self.table
    }

    /// Place `object` at `index`, returning whatever was there before.
    pub fn load(&mut self, index: TypedIndex, object: O) -> RegistryResult<Option<O>> {
        let flat = self.table.to_flat_index(index)?;
        debug!(%index, flat, entry = %object.identity(), "object loaded");
        Ok(self.slots[flat].replace(object))
    }

    /// Place `object` at a flat index, returning whatever was there before.
    pub fn load_at(&mut self, flat: usize, object: O) -> RegistryResult<Option<O>> {
        let index = self.table.to_typed_index(flat)?;
        self.load(index, object)
    }

    /// Remove and return the object at `index`.
    pub fn unload(&mut self, index: TypedIndex) -> RegistryResult<Option<O>> {
        let flat = self.table.to_flat_index(index)?;
        let previous = self.slots[flat].take();
        if previous.is_some() {
            debug!(%index, flat, "object unloaded");
        }
        Ok(previous)
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns `true` if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Unload every object.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }
}

impl<O: LoadedObject> ObjectProvider for InMemoryProvider<O> {
    type Object = O;

    fn loaded_object(&self, index: TypedIndex) -> Option<&O> {
        let flat = self.table.to_flat_index(index).ok()?;
        self.loaded_object_at(flat)
    }

    fn loaded_object_at(&self, flat: usize) -> Option<&O> {
        self.slots.get(flat)?.as_ref()
    }
}

impl<O: LoadedObject> Default for InMemoryProvider<O> {
    fn default() -> Self {
        Self::new(GroupTable::standard().clone())
    }
}

impl<O: LoadedObject> std::fmt::Debug for InMemoryProvider<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryProvider")
            .field("capacity", &self.slots.len())
            .field("loaded", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use objlist_groups::GroupError;
    use objlist_types::{ObjectEntry, ObjectType};

    fn ride(name: &str) -> LegacyObject {
        LegacyObject::new(ObjectEntry::new(ObjectType::Ride, name, 1), name.as_bytes())
    }

    #[test]
    fn new_provider_is_empty() {
        let provider: InMemoryProvider = InMemoryProvider::default();
        assert!(provider.is_empty());
        assert_eq!(provider.len(), 0);
        assert!(provider.loaded_object_at(0).is_none());
    }

    #[test]
    fn load_and_read_back_by_both_addresses() {
        let mut provider = InMemoryProvider::default();
        let index = TypedIndex::new(ObjectType::SmallScenery, 3);
        provider.load(index, ride("TREE1")).unwrap();

        let by_typed = provider.loaded_object(index).expect("loaded");
        assert_eq!(by_typed.data, b"TREE1");
        let by_flat = provider.loaded_object_at(128 + 3).expect("loaded");
        assert_eq!(by_flat, by_typed);
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn load_replaces_and_returns_previous() {
        let mut provider = InMemoryProvider::default();
        let index = TypedIndex::new(ObjectType::Ride, 0);
        assert!(provider.load(index, ride("A")).unwrap().is_none());
        let previous = provider.load(index, ride("B")).unwrap();
        assert_eq!(previous, Some(ride("A")));
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn load_at_translates_flat_index() {
        let mut provider = InMemoryProvider::default();
        provider.load_at(720, ride("TEXT")).unwrap();
        let index = TypedIndex::new(ObjectType::ScenarioText, 0);
        assert!(provider.loaded_object(index).is_some());
    }

    #[test]
    fn load_out_of_range_fails() {
        let mut provider = InMemoryProvider::new(GroupTable::legacy().clone());
        let err = provider
            .load(TypedIndex::new(ObjectType::Ride, 128), ride("X"))
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Group(GroupError::InvalidSlot { .. })
        ));
        let err = provider.load_at(721, ride("X")).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Group(GroupError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn unload_and_clear() {
        let mut provider = InMemoryProvider::default();
        let a = TypedIndex::new(ObjectType::Ride, 1);
        let b = TypedIndex::new(ObjectType::Water, 0);
        provider.load(a, ride("A")).unwrap();
        provider.load(b, ride("B")).unwrap();

        assert_eq!(provider.unload(a).unwrap(), Some(ride("A")));
        assert_eq!(provider.unload(a).unwrap(), None);
        assert_eq!(provider.len(), 1);

        provider.clear();
        assert!(provider.is_empty());
    }

    #[test]
    fn missing_type_reads_as_absent() {
        let provider: InMemoryProvider = InMemoryProvider::new(GroupTable::legacy().clone());
        assert!(provider
            .loaded_object(TypedIndex::new(ObjectType::Station, 0))
            .is_none());
    }
}
