//! Ordered heterogeneous child sequences.
//!
//! A schema choice group with unbounded repetition is stored as a
//! [`ChildSequence`] of one generated item enum. The enum's tag type carries
//! the catalog that maps each tag to its element name.

pub mod catalog;
pub mod sequence;

pub use catalog::{CatalogEntry, ChoiceItem, ChoiceTag};
pub use sequence::{ChildSequence, Slot};
