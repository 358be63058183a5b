//! The external alignment engine contract.
//!
//! The alignment algorithm itself (guide trees, progressive/iterative HMM
//! alignment, mBed clustering) lives behind [`AlignmentEngine`]; this crate
//! never reimplements it. Implementations typically wrap an FFI binding or a
//! subprocess around a real aligner.

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::core::sequence::SequenceSet;
use crate::options::EngineOptions;

/// Opaque failure reported by an alignment engine.
///
/// The broker surfaces this as a generic engine failure; callers should not
/// depend on the message contents.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct EngineError {
    message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Narrow contract for an external multiple-sequence-alignment engine.
///
/// The broker guarantees that [`configure`](Self::configure) and
/// [`align`](Self::align) for one invocation run back to back under a
/// process-wide lock, so engines with process-global state (a one-time init
/// call parameterized by thread count, say) may re-initialize on every
/// `configure` without racing other invocations that requested a different
/// worker count.
pub trait AlignmentEngine {
    /// Built-in option defaults, used for every knob the caller leaves unset
    fn defaults(&self) -> EngineOptions {
        EngineOptions::default()
    }

    /// Apply process-global settings for the next [`align`](Self::align)
    /// call. Engines without global state keep the no-op default.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if the engine rejects the settings.
    fn configure(&self, workers: NonZeroUsize) -> Result<(), EngineError> {
        let _ = workers;
        Ok(())
    }

    /// Align the set. On success every entry carries gap-padded residues of
    /// equal length and the returned set is marked aligned.
    ///
    /// The call runs to completion or failure; there is no cancellation,
    /// timeout, or partial result.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] on any non-success outcome.
    fn align(
        &self,
        set: SequenceSet,
        options: &EngineOptions,
    ) -> Result<SequenceSet, EngineError>;
}

static INVOCATION_LOCK: Mutex<()> = Mutex::new(());

/// Serialize configure+align across concurrent invocations.
///
/// A poisoned lock is recovered rather than propagated: the guard protects
/// no data of our own, only the ordering of engine calls.
pub(crate) fn invocation_guard() -> MutexGuard<'static, ()> {
    INVOCATION_LOCK
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}
