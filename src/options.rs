//! Alignment run configuration.
//!
//! [`AlignConfig`] carries the caller's overrides; any knob left unset falls
//! back to the engine's built-in defaults when resolved into
//! [`EngineOptions`], the immutable record handed to the engine.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Caller-facing alignment knobs.
///
/// Booleans are tri-state: `None` preserves the engine default, which for
/// some engines differs from `false`. Integer knobs take the caller's value
/// whenever present. No range validation happens here beyond the natural
/// bounds of the types; rejecting out-of-range values is the engine's
/// responsibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignConfig {
    /// Use mBed-like clustering for guide-tree construction
    pub mbed_guide_tree: Option<bool>,

    /// Use mBed-like clustering during iteration
    pub mbed_iteration: Option<bool>,

    /// Number of combined guide-tree/HMM iterations
    pub num_combined_iterations: Option<u32>,

    /// Maximum guide-tree iterations within the combined iterations
    pub max_guidetree_iterations: Option<u32>,

    /// Maximum HMM iterations within the combined iterations
    pub max_hmm_iterations: Option<u32>,

    /// Worker threads for the engine's internal parallelism
    pub num_workers: Option<NonZeroUsize>,
}

impl AlignConfig {
    /// Merge these overrides onto the engine's defaults.
    #[must_use]
    pub fn resolve(&self, defaults: EngineOptions) -> EngineOptions {
        EngineOptions {
            use_mbed_guide_tree: self.mbed_guide_tree.unwrap_or(defaults.use_mbed_guide_tree),
            use_mbed_for_iteration: self.mbed_iteration.unwrap_or(defaults.use_mbed_for_iteration),
            num_combined_iterations: self
                .num_combined_iterations
                .unwrap_or(defaults.num_combined_iterations),
            max_guidetree_iterations: self
                .max_guidetree_iterations
                .unwrap_or(defaults.max_guidetree_iterations),
            max_hmm_iterations: self.max_hmm_iterations.unwrap_or(defaults.max_hmm_iterations),
            num_workers: self.num_workers.unwrap_or(defaults.num_workers),
        }
    }
}

/// Fully resolved options for one engine invocation.
///
/// Immutable once passed to the engine; a fresh record is resolved for every
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    pub use_mbed_guide_tree: bool,
    pub use_mbed_for_iteration: bool,
    pub num_combined_iterations: u32,
    pub max_guidetree_iterations: u32,
    pub max_hmm_iterations: u32,
    pub num_workers: NonZeroUsize,
}

impl Default for EngineOptions {
    /// Defaults following the Clustal Omega lineage: mBed clustering on for
    /// both guide tree and iteration, no refinement iterations, one worker.
    fn default() -> Self {
        Self {
            use_mbed_guide_tree: true,
            use_mbed_for_iteration: true,
            num_combined_iterations: 0,
            max_guidetree_iterations: 0,
            max_hmm_iterations: 0,
            num_workers: NonZeroUsize::MIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_keeps_defaults() {
        let defaults = EngineOptions::default();
        let resolved = AlignConfig::default().resolve(defaults);
        assert_eq!(resolved, defaults);
    }

    #[test]
    fn test_explicit_false_overrides_default_true() {
        let config = AlignConfig {
            mbed_guide_tree: Some(false),
            ..AlignConfig::default()
        };
        let resolved = config.resolve(EngineOptions::default());
        assert!(!resolved.use_mbed_guide_tree);
        // The sibling knob keeps the engine default
        assert!(resolved.use_mbed_for_iteration);
    }

    #[test]
    fn test_integer_knobs_take_caller_values() {
        let config = AlignConfig {
            num_combined_iterations: Some(3),
            max_hmm_iterations: Some(5),
            num_workers: NonZeroUsize::new(8),
            ..AlignConfig::default()
        };
        let resolved = config.resolve(EngineOptions::default());
        assert_eq!(resolved.num_combined_iterations, 3);
        assert_eq!(resolved.max_guidetree_iterations, 0);
        assert_eq!(resolved.max_hmm_iterations, 5);
        assert_eq!(resolved.num_workers.get(), 8);
    }

    #[test]
    fn test_config_deserializes_with_partial_fields() {
        let config: AlignConfig =
            serde_json::from_str(r#"{"mbed_guide_tree": false, "num_workers": 4}"#).unwrap();
        assert_eq!(config.mbed_guide_tree, Some(false));
        assert_eq!(config.mbed_iteration, None);
        assert_eq!(config.num_workers, NonZeroUsize::new(4));
    }
}
