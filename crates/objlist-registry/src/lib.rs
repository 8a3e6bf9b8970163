//! Loaded object lookup for the object list.
//!
//! A [`Registry`] answers questions about objects held by an external
//! [`ObjectProvider`]: which slot an identity is loaded in, what identity or
//! legacy data sits behind a flat index, and so on. It never loads, frees or
//! mutates objects itself.
//!
//! # Key Types
//!
//! - [`Registry`] — Query surface over a provider and a group table
//! - [`ObjectProvider`] / [`LoadedObject`] — The provider capability
//! - [`InMemoryProvider`] — Slot-array provider for tests and embedding
//! - [`RegistryConfig`] — Layout and match rule selection
//!
//! # Consistency
//!
//! Every query borrows the provider immutably for its duration, so a slot
//! scan sees one consistent state. The registry takes no locks: callers that
//! share a provider across threads wrap it in their own lock and hold the
//! read guard for as long as they hold the registry.

pub mod config;
pub mod error;
pub mod memory;
pub mod provider;
pub mod registry;

pub use config::{GroupLayout, RegistryConfig};
pub use error::{RegistryError, RegistryResult};
pub use memory::InMemoryProvider;
pub use provider::{LegacyObject, LoadedObject, ObjectProvider};
pub use registry::Registry;

pub use objlist_groups::{GroupTable, TypedIndex};
pub use objlist_types::{MatchRule, ObjectEntry, ObjectType};
