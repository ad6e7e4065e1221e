//! Pitch-class profile building

use super::matrix::{ChromaMatrix, FrameRange};
use crate::analysis::result::PitchClass;
use crate::error::KeyError;
use serde::{Deserialize, Serialize};

/// Per-pitch-class energy profile
///
/// Raw per-row sums of a chroma matrix over the selected frame window, keyed
/// by pitch class in ordinal order (C first). Values are never normalized
/// here; normalization is a presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchClassProfile {
    energies: [f64; 12],
}

impl PitchClassProfile {
    /// Profile from explicit per-pitch-class energies (ordinal order, C first)
    pub fn from_energies(energies: [f64; 12]) -> Self {
        Self { energies }
    }

    /// Energy of one pitch class
    pub fn energy(&self, pitch_class: PitchClass) -> f64 {
        self.energies[pitch_class.index()]
    }

    /// All 12 energies in pitch-class ordinal order
    pub fn energies(&self) -> &[f64; 12] {
        &self.energies
    }

    /// Iterate (pitch class, energy) pairs in ordinal order
    pub fn iter(&self) -> impl Iterator<Item = (PitchClass, f64)> + '_ {
        PitchClass::ALL.iter().map(move |&pc| (pc, self.energy(pc)))
    }

    /// Largest energy in the profile
    pub fn max_energy(&self) -> f64 {
        self.energies.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Build a pitch-class profile from a chroma matrix
///
/// Sums each pitch-class row over the selected frame window. With
/// `range = None` the whole matrix is aggregated; callers that pre-sliced
/// their chroma matrix pass `None`.
///
/// # Errors
///
/// - [`KeyError::InvalidChromaShape`] if the matrix does not have exactly 12
///   equal-length rows
/// - [`KeyError::EmptyRange`] if the resolved frame window selects no frames
///
/// # Example
///
/// ```
/// use tonal_dsp::{build_profile, ChromaMatrix, PitchClass};
///
/// let mut rows = vec![vec![0.0f64; 4]; 12];
/// rows[PitchClass::G.index()] = vec![1.0, 2.0, 3.0, 4.0];
/// let chroma = ChromaMatrix::from_rows(rows);
///
/// let profile = build_profile(&chroma, None)?;
/// assert_eq!(profile.energy(PitchClass::G), 10.0);
/// # Ok::<(), tonal_dsp::KeyError>(())
/// ```
pub fn build_profile(
    chroma: &ChromaMatrix,
    range: Option<FrameRange>,
) -> Result<PitchClassProfile, KeyError> {
    if chroma.num_rows() != 12 {
        return Err(KeyError::InvalidChromaShape(format!(
            "expected 12 pitch-class rows, got {}",
            chroma.num_rows()
        )));
    }

    let num_frames = chroma.num_frames();
    for (i, row) in chroma.rows().iter().enumerate() {
        if row.len() != num_frames {
            return Err(KeyError::InvalidChromaShape(format!(
                "row {} has {} frames, expected {}",
                i,
                row.len(),
                num_frames
            )));
        }
    }

    let columns = range.unwrap_or_default().resolve(num_frames)?;
    log::debug!(
        "Building pitch-class profile over frames {}..{} of {}",
        columns.start,
        columns.end,
        num_frames
    );

    let mut energies = [0.0f64; 12];
    for (energy, row) in energies.iter_mut().zip(chroma.rows()) {
        *energy = row[columns.clone()].iter().sum();
    }

    Ok(PitchClassProfile::from_energies(energies))
}
