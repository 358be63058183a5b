use serde::{Deserialize, Serialize};

use crate::core::types::SeqKind;

/// A single named sequence with its declared kind.
///
/// Residues are stored with the casing the caller supplied; validation is
/// case-insensitive but never rewrites the stored string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceEntry {
    /// Sequence name, the key in the caller's mapping
    pub name: String,

    /// Residue string; after alignment it contains gap characters
    pub residues: String,

    /// Declared kind the residues were validated against
    pub kind: SeqKind,
}

impl SequenceEntry {
    pub fn new(name: impl Into<String>, residues: impl Into<String>, kind: SeqKind) -> Self {
        Self {
            name: name.into(),
            residues: residues.into(),
            kind,
        }
    }
}

/// Ordered collection of sequences for one alignment request.
///
/// Each set is built fresh per invocation, consumed once by the engine, and
/// discarded after marshalling; it is never shared across requests.
/// Duplicate names resolve last-write-wins: the later residues replace the
/// earlier ones while the entry keeps its original position, matching
/// mapping overwrite semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceSet {
    entries: Vec<SequenceEntry>,
    aligned: bool,
}

impl SequenceSet {
    /// Create an empty, unaligned set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, replacing any existing entry with the same name
    pub fn push(&mut self, entry: SequenceEntry) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.name == entry.name) {
            *existing = entry;
        } else {
            self.entries.push(entry);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SequenceEntry> {
        self.entries.iter()
    }

    /// Mutable access for engines rewriting residues in place
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SequenceEntry> {
        self.entries.iter_mut()
    }

    /// Whether the entries carry engine-produced, gap-padded residues
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.aligned
    }

    /// Mark the set as aligned; engines call this before returning
    pub fn mark_aligned(&mut self) {
        self.aligned = true;
    }
}
