//! Key estimation modules
//!
//! Estimate musical key from a pitch-class profile using:
//! - Krumhansl-Schmuckler templates (24 key hypotheses)
//! - Pearson correlation scoring
//! - Best/alternate key selection

pub mod engine;
pub mod report;
pub mod templates;

pub use engine::KeyCorrelationEngine;
pub use templates::KeyTemplates;

use crate::analysis::result::Key;
use crate::features::chroma::PitchClassProfile;
use serde::Serialize;

/// Key estimation result
///
/// Owns the profile it was computed from and the full 24-entry correlation
/// table. Immutable after construction; the table keeps its canonical
/// insertion order (major keys C..B, then minor keys C..B) so that
/// downstream feature vectors built from it are comparable across songs.
#[derive(Debug, Clone, Serialize)]
pub struct KeyEstimationResult {
    profile: PitchClassProfile,
    correlations: Vec<(Key, f64)>,
    best_key: Key,
    best_correlation: f64,
    alternate_key: Option<Key>,
    alternate_correlation: Option<f64>,
}

impl KeyEstimationResult {
    pub(crate) fn new(
        profile: PitchClassProfile,
        correlations: Vec<(Key, f64)>,
        best_key: Key,
        best_correlation: f64,
        alternate: Option<(Key, f64)>,
    ) -> Self {
        Self {
            profile,
            correlations,
            best_key,
            best_correlation,
            alternate_key: alternate.map(|(k, _)| k),
            alternate_correlation: alternate.map(|(_, c)| c),
        }
    }

    /// The pitch-class profile this result was computed from
    pub fn profile(&self) -> &PitchClassProfile {
        &self.profile
    }

    /// All 24 (key, correlation) pairs in canonical table order
    ///
    /// Order is fixed (major C..B, then minor C..B), never sorted by value.
    /// Callers needing score-ranked output sort a copy externally.
    pub fn ranked_correlations(&self) -> &[(Key, f64)] {
        &self.correlations
    }

    /// The best-correlated key
    pub fn best_key(&self) -> Key {
        self.best_key
    }

    /// Correlation of the best key
    pub fn best_correlation(&self) -> f64 {
        self.best_correlation
    }

    /// A close runner-up key, when one exists
    pub fn alternate_key(&self) -> Option<Key> {
        self.alternate_key
    }

    /// Correlation of the alternate key, when one exists
    pub fn alternate_correlation(&self) -> Option<f64> {
        self.alternate_correlation
    }
}
