//! Foundation types for the object list.
//!
//! Every content object (ride, scenery, path, ...) is named by a fixed
//! 16-byte [`ObjectEntry`]. This crate defines that record, the closed set of
//! [`ObjectType`]s it can carry, the per-group [`EncodingScheme`] hint, and
//! the [`MatchRule`] used to decide when two entries name the same object.
//!
//! # Key Types
//!
//! - [`ObjectEntry`] — Legacy binary identity with sentinel detection
//! - [`ObjectType`] — Object group enumeration in declared order
//! - [`EncodingScheme`] — Chunk encoding hint consumed by persistence code
//! - [`MatchRule`] — Checksum wildcard policy for identity comparison

pub mod entry;
pub mod error;
pub mod kind;
pub mod rule;

pub use entry::{ObjectEntry, ENTRY_SIZE, NAME_LENGTH};
pub use error::TypeError;
pub use kind::{EncodingScheme, ObjectType, SlotIndex};
pub use rule::MatchRule;
