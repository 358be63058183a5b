//! # msa-broker
//!
//! A validated boundary layer between a host application and an external
//! multiple-sequence-alignment engine.
//!
//! Callers hand over a mapping of named sequences; the broker validates
//! every residue against the declared alphabet, resolves the alignment
//! options against the engine's defaults, invokes the engine once under a
//! process-wide lock, and returns the aligned sequences keyed by their
//! original names. The alignment algorithm itself (guide trees,
//! progressive/iterative HMM alignment, mBed clustering) stays behind the
//! [`AlignmentEngine`] trait and is never reimplemented here.
//!
//! ## Features
//!
//! - **Alphabet validation**: per-residue checks for DNA, RNA, and protein,
//!   with wildcard and gap characters; `Unknown` passes through unchecked
//! - **Tri-state options**: booleans override engine defaults only when
//!   explicitly set; integer knobs take the caller's value when present
//! - **Degenerate short-circuit**: zero or one sequences return the input
//!   unchanged without an engine call
//! - **All-or-nothing errors**: a typed [`AlignError`] identifying exactly
//!   which input was malformed, never a truncated result
//! - **Loose boundary**: a documented fallback entry point for dynamically
//!   typed hosts, with integer kind tags and scalar value coercion
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use msa_broker::{Aligner, AlignmentEngine, EngineError, EngineOptions, SeqKind, SequenceSet};
//!
//! /// Toy engine that pads sequences with trailing gaps.
//! struct PadToWidth;
//!
//! impl AlignmentEngine for PadToWidth {
//!     fn align(
//!         &self,
//!         mut set: SequenceSet,
//!         _options: &EngineOptions,
//!     ) -> Result<SequenceSet, EngineError> {
//!         let width = set.iter().map(|e| e.residues.len()).max().unwrap_or(0);
//!         for entry in set.iter_mut() {
//!             for _ in entry.residues.len()..width {
//!                 entry.residues.push('-');
//!             }
//!         }
//!         set.mark_aligned();
//!         Ok(set)
//!     }
//! }
//!
//! let aligner = Aligner::new(PadToWidth);
//! let mut input = HashMap::new();
//! input.insert("A".to_string(), "GATTACA".to_string());
//! input.insert("B".to_string(), "GATTACANN".to_string());
//!
//! let result = aligner.align(SeqKind::Dna, &input).unwrap();
//! assert_eq!(result["A"], "GATTACA--");
//! assert_eq!(result["B"], "GATTACANN");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequence kinds, alphabets, entries, and sets
//! - [`validate`]: Input validation and the loose coercion fallback
//! - [`options`]: Caller config and resolved engine options
//! - [`engine`]: The external engine contract
//! - [`broker`]: The orchestration entry point
//! - [`marshal`]: Result marshalling back to the caller's mapping

pub mod broker;
pub mod core;
pub mod engine;
pub mod error;
pub mod marshal;
pub mod options;
pub mod validate;

// Re-export the public surface; the integer tags are published alongside the
// entry point for callers driving the loose boundary.
pub use broker::Aligner;
pub use engine::{AlignmentEngine, EngineError};
pub use self::core::sequence::{SequenceEntry, SequenceSet};
pub use self::core::types::{SeqKind, DNA, PROTEIN, RNA};
pub use error::AlignError;
pub use options::{AlignConfig, EngineOptions};
