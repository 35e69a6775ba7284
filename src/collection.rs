//! Synthetic collection generation
//!
//! Collections are sequences of single-key objects such as `{"item": 1}`.
//! The value of the i-th element is always `i + 1`, so any window of a
//! collection can be produced without materializing the rest.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::ops::Range;

/// Default label for generated items
pub const DEFAULT_LABEL: &str = "item";

/// A single generated object, serialized as `{ <field>: <value> }`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticItem<'a> {
    /// Key of the single entry
    pub field: &'a str,
    /// 1-based position in the collection
    pub value: u64,
}

impl Serialize for SyntheticItem<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.field, &self.value)?;
        map.end()
    }
}

/// Generate the full collection of `count` items
pub fn generate(count: u64, label: &str) -> Vec<SyntheticItem<'_>> {
    generate_range(0..count, label)
}

/// Generate the items at positions `range` (0-based) of a collection
pub fn generate_range(range: Range<u64>, label: &str) -> Vec<SyntheticItem<'_>> {
    range
        .map(|index| SyntheticItem {
            field: label,
            value: index + 1,
        })
        .collect()
}
