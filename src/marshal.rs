//! Marshalling aligned sets back into the caller's mapping shape.

use std::collections::HashMap;

use crate::core::sequence::SequenceSet;

/// Convert a set into a name-to-residues mapping.
///
/// Pure and total: no validation is re-performed and every entry is emitted,
/// gap characters included, keyed by its original name.
#[must_use]
pub fn to_mapping(set: &SequenceSet) -> HashMap<String, String> {
    set.iter()
        .map(|entry| (entry.name.clone(), entry.residues.clone()))
        .collect()
}
