//! Object group table and flat index translation.
//!
//! Objects are stored in per-type groups of fixed capacity. Concatenating the
//! groups in declared type order yields a single flat address space used by
//! save files and legacy formats. The order and capacities in
//! [`GroupTable::standard`] are a wire-compatibility contract: changing them
//! breaks every file that embeds a flat index.
//!
//! # Key Types
//!
//! - [`GroupDescriptor`] — Capacity and encoding hint for one object type
//! - [`GroupTable`] — Ordered, immutable set of descriptors
//! - [`TypedIndex`] — A (type, slot) address

pub mod error;
pub mod index;
pub mod table;

pub use error::{GroupError, GroupResult};
pub use index::{Slots, TypedIndex};
pub use table::{GroupDescriptor, GroupTable, LEGACY_GROUPS, STANDARD_GROUPS};
