use serde::{Deserialize, Serialize};

/// Residues legal for protein sequences (the 20 canonical amino acids)
pub const AMINO_ALPHABET: &str = "ACDEFGHIKLMNPQRSTVWY";

/// Residues legal for DNA sequences
pub const DNA_ALPHABET: &str = "ACGT";

/// Residues legal for RNA sequences
pub const RNA_ALPHABET: &str = "ACGU";

/// Wildcard accepted wherever a specific amino acid is expected
pub const AMINO_ANY: char = 'X';

/// Wildcard accepted wherever a specific nucleotide is expected
pub const NUCLEOTIDE_ANY: char = 'N';

/// Canonical gap character emitted by alignment engines
pub const GAP: char = '-';

/// Integer tag for [`SeqKind::Dna`] at the loosely typed boundary
pub const DNA: i64 = 1;

/// Integer tag for [`SeqKind::Rna`] at the loosely typed boundary
pub const RNA: i64 = 2;

/// Integer tag for [`SeqKind::Protein`] at the loosely typed boundary
pub const PROTEIN: i64 = 3;

/// Check whether a character is a gap placeholder.
///
/// Engines emit `-`; the remaining characters appear in pre-aligned input
/// and are accepted anywhere during validation.
#[must_use]
pub fn is_gap(c: char) -> bool {
    matches!(c, '-' | '.' | '_' | '~' | ' ')
}

/// Declared kind of a sequence, selecting which residue alphabet applies.
///
/// `Unknown` disables alphabet checking entirely: every character passes
/// through to the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeqKind {
    #[default]
    Unknown,
    Dna,
    Rna,
    Protein,
}

impl SeqKind {
    /// Integer tag used at the loosely typed boundary (0 for `Unknown`)
    #[must_use]
    pub const fn tag(self) -> i64 {
        match self {
            Self::Unknown => 0,
            Self::Dna => DNA,
            Self::Rna => RNA,
            Self::Protein => PROTEIN,
        }
    }

    /// Resolve an integer tag back to a kind.
    ///
    /// Returns `None` for tags outside the recognized set.
    #[must_use]
    pub const fn from_tag(tag: i64) -> Option<Self> {
        match tag {
            0 => Some(Self::Unknown),
            DNA => Some(Self::Dna),
            RNA => Some(Self::Rna),
            PROTEIN => Some(Self::Protein),
            _ => None,
        }
    }

    /// Whether `residue` is legal for this kind, case-insensitively.
    ///
    /// Gap characters are the caller's concern; see [`is_gap`].
    #[must_use]
    pub fn accepts(self, residue: char) -> bool {
        let upper = residue.to_ascii_uppercase();
        match self {
            Self::Unknown => true,
            Self::Dna => DNA_ALPHABET.contains(upper) || upper == NUCLEOTIDE_ANY,
            Self::Rna => RNA_ALPHABET.contains(upper) || upper == NUCLEOTIDE_ANY,
            Self::Protein => AMINO_ALPHABET.contains(upper) || upper == AMINO_ANY,
        }
    }
}

impl std::fmt::Display for SeqKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Dna => write!(f, "DNA"),
            Self::Rna => write!(f, "RNA"),
            Self::Protein => write!(f, "protein"),
        }
    }
}
