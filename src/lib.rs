//! # Tonal DSP
//!
//! A musical key estimation engine using the Krumhansl-Schmuckler
//! template-correlation method.
//!
//! ## Features
//!
//! - **Profile building**: aggregate a 12xT chroma matrix into a
//!   per-pitch-class energy profile, with optional analysis windows
//! - **Key estimation**: Pearson correlation of the observed profile against
//!   all 24 key hypotheses (12 tonics x major/minor)
//! - **Reporting**: normalized profile, full correlation table, and
//!   best/alternate key summaries
//! - **Batch helpers**: embarrassingly parallel estimation across songs or
//!   across windows of one song
//!
//! ## Quick Start
//!
//! ```
//! use tonal_dsp::{estimate_key, ChromaMatrix, EstimatorConfig, PitchClass};
//!
//! // A chroma matrix from your extractor: 12 pitch-class rows, T frames.
//! // This toy matrix concentrates energy on C, E and G.
//! let mut rows = vec![vec![0.1f64; 4]; 12];
//! rows[PitchClass::C.index()] = vec![1.0; 4];
//! rows[PitchClass::E.index()] = vec![0.8; 4];
//! rows[PitchClass::G.index()] = vec![0.9; 4];
//! let chroma = ChromaMatrix::from_rows(rows);
//!
//! let result = estimate_key(&chroma, None, EstimatorConfig::default())?;
//! assert_eq!(result.best_key().name(), "C major");
//! # Ok::<(), tonal_dsp::KeyError>(())
//! ```
//!
//! ## Architecture
//!
//! The estimation pipeline follows this flow:
//!
//! ```text
//! Chroma Matrix → Profile Building → Template Correlation → Result
//! ```
//!
//! Audio decoding, harmonic/percussive separation and chroma extraction are
//! external collaborators: this crate starts at the chroma matrix.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod batch;
pub mod config;
pub mod error;
pub mod features;

// Re-export main types
pub use analysis::result::{Key, PitchClass};
pub use config::EstimatorConfig;
pub use error::KeyError;
pub use features::chroma::{build_profile, ChromaMatrix, FrameRange, PitchClassProfile, SampleRange};
pub use features::key::{KeyCorrelationEngine, KeyEstimationResult, KeyTemplates};

/// Estimate the musical key of a chroma matrix
///
/// Builds the pitch-class profile over the selected frame window and
/// correlates it against all 24 key hypotheses.
///
/// # Arguments
///
/// * `chroma` - 12xT pitch-class energy grid (row = pitch class, C first)
/// * `range` - Optional analysis window in frame columns; `None` analyzes
///   the whole matrix
/// * `config` - Estimator configuration parameters
///
/// # Errors
///
/// Returns [`KeyError`] if the matrix shape is malformed, the window is
/// empty, or the resulting profile has zero variance.
pub fn estimate_key(
    chroma: &ChromaMatrix,
    range: Option<FrameRange>,
    config: EstimatorConfig,
) -> Result<KeyEstimationResult, KeyError> {
    log::debug!(
        "Starting key estimation: {}x{} chroma matrix, range {:?}",
        chroma.num_rows(),
        chroma.num_frames(),
        range
    );

    let profile = build_profile(chroma, range)?;
    KeyCorrelationEngine::with_config(config).estimate_key(&profile)
}
