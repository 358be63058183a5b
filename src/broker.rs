//! The single orchestration entry point around an alignment engine.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::core::sequence::SequenceSet;
use crate::core::types::SeqKind;
use crate::engine::{self, AlignmentEngine};
use crate::error::AlignError;
use crate::options::AlignConfig;
use crate::{marshal, validate};

/// Boundary layer around an [`AlignmentEngine`].
///
/// Each call validates its input into a fresh [`SequenceSet`], resolves
/// options against the engine's defaults, and invokes the engine at most
/// once. No mutable state is retained between calls, so a single `Aligner`
/// may serve concurrent callers; the engine invocations themselves are
/// serialized process-wide (see [`AlignmentEngine`]).
pub struct Aligner<E> {
    engine: E,
    config: AlignConfig,
}

impl<E: AlignmentEngine> Aligner<E> {
    /// Create a broker using the engine's default options for every knob
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            config: AlignConfig::default(),
        }
    }

    /// Create a broker with caller overrides for the alignment knobs
    pub fn with_config(engine: E, config: AlignConfig) -> Self {
        Self { engine, config }
    }

    /// Align a mapping of named sequences declared as `kind`.
    ///
    /// An empty input returns an empty mapping without touching the engine.
    /// Zero or one validated sequences return the input unchanged: aligning
    /// a single sequence is the identity, there is nothing to align against.
    /// On success the result carries exactly the input's key set.
    ///
    /// # Errors
    ///
    /// Returns `AlignError::InvalidResidue` for a character outside `kind`'s
    /// alphabet, or `AlignError::Engine` if the engine reports failure. The
    /// request is all-or-nothing: no partial result survives an error.
    pub fn align(
        &self,
        kind: SeqKind,
        sequences: &HashMap<String, String>,
    ) -> Result<HashMap<String, String>, AlignError> {
        if sequences.is_empty() {
            return Ok(HashMap::new());
        }

        let set = validate::build_set(
            sequences.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            kind,
        )?;

        if set.len() <= 1 {
            return Ok(sequences.clone());
        }
        self.run(set)
    }

    /// Align loosely typed entries, the documented fallback for dynamically
    /// typed hosts.
    ///
    /// Names must be JSON strings; values may be strings, numbers, or
    /// booleans (coerced to their string rendering). The sequence kind
    /// arrives as an integer tag ([`DNA`](crate::DNA), [`RNA`](crate::RNA),
    /// [`PROTEIN`](crate::PROTEIN)); `None` means [`SeqKind::Unknown`],
    /// which skips alphabet checking. Duplicate names resolve
    /// last-write-wins. The degenerate single-sequence result carries the
    /// coerced string rendering of the value.
    ///
    /// # Errors
    ///
    /// Returns `AlignError::InvalidSequenceType` for an unrecognized tag,
    /// checked before any entry is read (but after the empty-input
    /// short-circuit), `AlignError::InvalidKeyType` or
    /// `AlignError::ValueCoercion` for non-conforming entries, plus every
    /// error [`align`](Self::align) can produce.
    pub fn align_loose(
        &self,
        sequence_type: Option<i64>,
        entries: &[(Value, Value)],
    ) -> Result<HashMap<String, String>, AlignError> {
        if entries.is_empty() {
            return Ok(HashMap::new());
        }

        let tag = sequence_type.unwrap_or(SeqKind::Unknown.tag());
        let kind = SeqKind::from_tag(tag).ok_or(AlignError::InvalidSequenceType(tag))?;

        let set = validate::build_set_loose(entries, kind)?;
        if set.len() <= 1 {
            return Ok(marshal::to_mapping(&set));
        }
        self.run(set)
    }

    fn run(&self, set: SequenceSet) -> Result<HashMap<String, String>, AlignError> {
        let options = self.config.resolve(self.engine.defaults());
        debug!(
            sequences = set.len(),
            workers = options.num_workers.get(),
            "invoking alignment engine"
        );

        // Configure and align back to back under the process-wide lock so a
        // per-call worker count cannot race another invocation's engine
        // re-initialization.
        let aligned = {
            let _guard = engine::invocation_guard();
            self.engine.configure(options.num_workers)?;
            self.engine.align(set, &options)?
        };

        debug!(sequences = aligned.len(), "alignment complete");
        Ok(marshal::to_mapping(&aligned))
    }
}
