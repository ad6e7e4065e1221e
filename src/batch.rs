//! Batch estimation helpers
//!
//! Key estimation is a pure, millisecond-scale computation with no shared
//! state, so batches parallelize trivially: one engine call per item, no
//! coordination. Each item gets its own `Result`, so a malformed song is
//! flagged in place instead of aborting the rest of the batch.

use crate::error::KeyError;
use crate::features::chroma::{build_profile, ChromaMatrix, FrameRange};
use crate::features::key::{KeyCorrelationEngine, KeyEstimationResult};
use rayon::prelude::*;

/// Estimate the key of many songs in parallel
///
/// Items are processed independently across the rayon thread pool; the
/// output order matches the input order.
pub fn estimate_keys(
    engine: &KeyCorrelationEngine,
    songs: &[ChromaMatrix],
) -> Vec<Result<KeyEstimationResult, KeyError>> {
    log::debug!("Batch key estimation over {} songs", songs.len());
    songs
        .par_iter()
        .map(|chroma| build_profile(chroma, None).and_then(|p| engine.estimate_key(&p)))
        .collect()
}

/// Estimate the key of consecutive fixed-length windows of one song
///
/// Splits the chroma matrix into non-overlapping windows of
/// `window_frames` columns (the trailing partial window included) and
/// estimates each independently. Useful for spotting sections where the
/// key prediction becomes unstable.
///
/// # Errors
///
/// Returns [`KeyError::EmptyRange`] immediately if `window_frames` is zero
/// or the matrix has no frames; per-window failures are reported in the
/// corresponding output slot.
pub fn estimate_key_windows(
    engine: &KeyCorrelationEngine,
    chroma: &ChromaMatrix,
    window_frames: usize,
) -> Result<Vec<Result<KeyEstimationResult, KeyError>>, KeyError> {
    if window_frames == 0 {
        return Err(KeyError::EmptyRange(
            "window length of 0 frames".to_string(),
        ));
    }
    let num_frames = chroma.num_frames();
    if num_frames == 0 {
        return Err(KeyError::EmptyRange("chroma matrix has no frames".to_string()));
    }

    let windows: Vec<FrameRange> = (0..num_frames)
        .step_by(window_frames)
        .map(|start| FrameRange::new(Some(start), Some(start + window_frames)))
        .collect();

    log::debug!(
        "Windowed key estimation: {} windows of {} frames",
        windows.len(),
        window_frames
    );

    Ok(windows
        .par_iter()
        .map(|&range| build_profile(chroma, Some(range)).and_then(|p| engine.estimate_key(&p)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::result::{Key, PitchClass};
    use crate::features::key::templates::KS_MAJOR_PROFILE;

    /// 12xN matrix whose per-row sums follow the major template rotated to
    /// `tonic`
    fn template_matrix(tonic: usize, num_frames: usize) -> ChromaMatrix {
        let rows = (0..12)
            .map(|pc| {
                let total = KS_MAJOR_PROFILE[(pc + 12 - tonic) % 12];
                vec![total / num_frames as f64; num_frames]
            })
            .collect();
        ChromaMatrix::from_rows(rows)
    }

    #[test]
    fn test_batch_preserves_order() {
        let engine = KeyCorrelationEngine::new();
        let songs = vec![template_matrix(0, 8), template_matrix(7, 8), template_matrix(2, 8)];
        let results = estimate_keys(&engine, &songs);

        assert_eq!(results.len(), 3);
        let keys: Vec<Key> = results
            .iter()
            .map(|r| r.as_ref().unwrap().best_key())
            .collect();
        assert_eq!(
            keys,
            vec![
                Key::Major(PitchClass::C),
                Key::Major(PitchClass::G),
                Key::Major(PitchClass::D),
            ]
        );
    }

    #[test]
    fn test_batch_isolates_failures() {
        let engine = KeyCorrelationEngine::new();
        let songs = vec![
            template_matrix(0, 8),
            ChromaMatrix::from_rows(vec![vec![0.0; 8]; 11]), // bad shape
            ChromaMatrix::from_rows(vec![vec![1.0; 8]; 12]), // degenerate
            template_matrix(5, 8),
        ];
        let results = estimate_keys(&engine, &songs);

        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(KeyError::InvalidChromaShape(_))));
        assert!(matches!(results[2], Err(KeyError::DegenerateProfile(_))));
        assert_eq!(
            results[3].as_ref().unwrap().best_key(),
            Key::Major(PitchClass::F)
        );
    }

    #[test]
    fn test_windows_cover_whole_matrix() {
        let engine = KeyCorrelationEngine::new();
        let chroma = template_matrix(9, 10);
        let results = estimate_key_windows(&engine, &chroma, 4).unwrap();

        // Windows 0..4, 4..8, 8..10
        assert_eq!(results.len(), 3);
        for result in &results {
            assert_eq!(
                result.as_ref().unwrap().best_key(),
                Key::Major(PitchClass::A)
            );
        }
    }

    #[test]
    fn test_windows_reject_zero_length() {
        let engine = KeyCorrelationEngine::new();
        let chroma = template_matrix(0, 10);
        assert!(matches!(
            estimate_key_windows(&engine, &chroma, 0),
            Err(KeyError::EmptyRange(_))
        ));
    }
}
