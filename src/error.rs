use thiserror::Error;

use crate::engine::EngineError;

/// Everything that can abort an alignment request.
///
/// Every variant is fatal to the whole request: the caller receives either a
/// complete, fully keyed result mapping or one of these, never a truncated
/// result. Nothing is retried; retrying an engine failure is the caller's
/// decision.
#[derive(Error, Debug)]
pub enum AlignError {
    /// The integer sequence-type tag is outside the recognized set
    #[error("unrecognized sequence type tag {0}; expected one of UNKNOWN, DNA, RNA, or PROTEIN")]
    InvalidSequenceType(i64),

    /// A sequence name at the loose boundary is not a string; the payload
    /// is the JSON rendering of the offending key
    #[error("sequence name must be a string, got {0}")]
    InvalidKeyType(String),

    /// A sequence value at the loose boundary has no string rendering
    #[error("cannot render the value for sequence {key:?} as a string")]
    ValueCoercion { key: String },

    /// A residue outside the declared kind's alphabet that is neither the
    /// wildcard nor a gap character
    #[error("invalid residue {residue:?} in sequence {name:?}")]
    InvalidResidue { name: String, residue: char },

    /// The external engine reported a non-success outcome
    #[error("alignment engine failed")]
    Engine(#[from] EngineError),
}
