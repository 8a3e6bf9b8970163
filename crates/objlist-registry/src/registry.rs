use tracing::{debug, trace};

use objlist_groups::{GroupTable, TypedIndex};
use objlist_types::{MatchRule, ObjectEntry};

use crate::config::RegistryConfig;
use crate::error::RegistryResult;
use crate::provider::{LoadedObject, ObjectProvider};

/// Read-only lookup over the objects held by a provider.
///
/// The group table supplies bounds and flat index layout; the provider
/// supplies the objects. The registry holds no state of its own beyond the
/// match rule.
pub struct Registry<'a, P: ObjectProvider> {
    provider: &'a P,
    table: &'a GroupTable,
    rule: MatchRule,
}

impl<'a, P: ObjectProvider> Registry<'a, P> {
    /// Create a registry with the legacy match rule.
    pub fn new(provider: &'a P, table: &'a GroupTable) -> Self {
        Self {
            provider,
            table,
            rule: MatchRule::default(),
        }
    }

    /// Create a registry using the table and rule named by `config`.
    pub fn with_config(provider: &'a P, config: &RegistryConfig) -> Self {
        Self {
            provider,
            table: config.layout.table(),
            rule: config.match_rule,
        }
    }

    /// Replace the match rule used by [`find_by_identity`](Self::find_by_identity).
    pub fn with_rule(mut self, rule: MatchRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn table(&self) -> &'a GroupTable {
        self.table
    }

    pub fn rule(&self) -> &MatchRule {
        &self.rule
    }

    /// Find the slot an object with `entry`'s identity is loaded in.
    ///
    /// Only the group named by the entry's type nibble is scanned, in
    /// ascending slot order; the lowest matching slot wins. Entries whose
    /// type this table does not declare, and empty entries, are never found.
    pub fn find_by_identity(&self, entry: &ObjectEntry) -> Option<TypedIndex> {
        if entry.is_empty() {
            return None;
        }
        let object_type = match entry.object_type() {
            Ok(ty) => ty,
            Err(e) => {
                debug!(entry = %entry, error = %e, "identity has no declared type");
                return None;
            }
        };
        let capacity = match self.table.capacity_of(object_type) {
            Ok(capacity) => capacity,
            Err(e) => {
                debug!(entry = %entry, error = %e, "identity type not in table");
                return None;
            }
        };

        for slot in 0..capacity {
            let index = TypedIndex::new(object_type, slot);
            let Some(object) = self.provider.loaded_object(index) else {
                continue;
            };
            if self.rule.matches(&object.identity(), entry) {
                trace!(entry = %entry, %index, "identity found");
                return Some(index);
            }
        }
        trace!(entry = %entry, "identity not loaded");
        None
    }

    /// Identity of the object at a flat index.
    ///
    /// An unoccupied slot yields [`ObjectEntry::EMPTY`].
    pub fn loaded_identity(&self, flat: usize) -> RegistryResult<ObjectEntry> {
        let index = self.table.to_typed_index(flat)?;
        Ok(self
            .provider
            .loaded_object(index)
            .map(LoadedObject::identity)
            .unwrap_or(ObjectEntry::EMPTY))
    }

    /// Legacy data of the object at a flat index, borrowed from the provider.
    ///
    /// The flat index is read through this registry's table, the same way as
    /// [`loaded_identity`](Self::loaded_identity), so both always name the
    /// same slot.
    pub fn loaded_data(&self, flat: usize) -> RegistryResult<Option<&'a [u8]>> {
        let index = self.table.to_typed_index(flat)?;
        Ok(self
            .provider
            .loaded_object(index)
            .map(LoadedObject::legacy_data))
    }

    /// Legacy data of the object at a (type, slot) address.
    pub fn loaded_data_typed(&self, index: TypedIndex) -> RegistryResult<Option<&'a [u8]>> {
        self.table.to_flat_index(index)?;
        Ok(self
            .provider
            .loaded_object(index)
            .map(LoadedObject::legacy_data))
    }

    /// The object at a (type, slot) address.
    pub fn loaded_object(&self, index: TypedIndex) -> Option<&'a P::Object> {
        self.provider.loaded_object(index)
    }

    /// Every occupied slot and its identity, in flat index order.
    pub fn loaded_identities(&self) -> Vec<(TypedIndex, ObjectEntry)> {
        self.table
            .slots()
            .filter_map(|index| {
                self.provider
                    .loaded_object(index)
                    .map(|object| (index, object.identity()))
            })
            .collect()
    }
}
