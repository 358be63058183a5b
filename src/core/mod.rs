//! Core data types for the alignment boundary.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`SeqKind`]: Declared sequence kind with its residue alphabet
//! - [`SequenceEntry`]: A single named sequence
//! - [`SequenceSet`]: The ordered collection handed to the engine
//!
//! ## Alphabets
//!
//! Residue legality follows the Clustal Omega lineage:
//!
//! | Kind    | Alphabet               | Wildcard |
//! |---------|------------------------|----------|
//! | DNA     | `ACGT`                 | `N`      |
//! | RNA     | `ACGU`                 | `N`      |
//! | Protein | `ACDEFGHIKLMNPQRSTVWY` | `X`      |
//! | Unknown | any character          | -        |
//!
//! Gap characters (`-`, `.`, `_`, `~`, space) are accepted at any position
//! for every kind; `-` is the canonical gap engines emit.

pub mod sequence;
pub mod types;

pub use sequence::{SequenceEntry, SequenceSet};
pub use types::SeqKind;
