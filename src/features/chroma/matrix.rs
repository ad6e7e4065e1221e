//! Chroma matrix and analysis window types

use crate::error::KeyError;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Pitch-class energy grid: 12 rows (one per pitch class, C first) by T
/// time-frame columns
///
/// Produced by an external constant-Q chroma extractor. The matrix is stored
/// row-major; shape validation happens when a profile is built from it, so a
/// malformed grid surfaces as [`KeyError::InvalidChromaShape`] at analysis
/// time rather than panicking here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChromaMatrix {
    rows: Vec<Vec<f64>>,
}

impl ChromaMatrix {
    /// Create a chroma matrix from pitch-class rows (row index = pitch class
    /// ordinal, column index = time frame)
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Create a chroma matrix from frame-major data (one 12-element chroma
    /// vector per time frame), transposing into row-major storage
    pub fn from_frames(frames: &[Vec<f64>]) -> Self {
        let num_rows = frames.first().map_or(0, |f| f.len());
        let mut rows = vec![Vec::with_capacity(frames.len()); num_rows];
        for frame in frames {
            for (row, &value) in rows.iter_mut().zip(frame.iter()) {
                row.push(value);
            }
        }
        Self { rows }
    }

    /// Number of pitch-class rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of time-frame columns
    pub fn num_frames(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    /// Energy values of one pitch-class row
    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }

    pub(crate) fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

/// Analysis window in samples, either side optional
///
/// An unspecified side clamps to the corresponding signal boundary, so
/// `SampleRange::default()` selects the whole signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRange {
    /// First sample of the window (inclusive); `None` = start of signal
    pub start: Option<usize>,
    /// One past the last sample of the window; `None` = end of signal
    pub end: Option<usize>,
}

impl SampleRange {
    /// Window from explicit sample bounds
    pub fn new(start: Option<usize>, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// Window from bounds in seconds, converted at the given sample rate
    ///
    /// Seconds are converted with `round(t * sample_rate)`, the same
    /// time-to-sample mapping the chroma extractor's front end uses.
    ///
    /// # Example
    ///
    /// ```
    /// use tonal_dsp::SampleRange;
    ///
    /// let range = SampleRange::from_seconds(None, Some(22.0), 22050);
    /// assert_eq!(range.end, Some(485_100));
    /// assert_eq!(range.start, None);
    /// ```
    pub fn from_seconds(start: Option<f64>, end: Option<f64>, sample_rate: u32) -> Self {
        let to_samples = |t: f64| (t * sample_rate as f64).round() as usize;
        Self {
            start: start.map(to_samples),
            end: end.map(to_samples),
        }
    }

    /// Convert sample bounds to frame-column bounds for a chroma matrix
    /// extracted with the given hop size
    pub fn to_frames(self, hop_size: usize) -> FrameRange {
        let hop = hop_size.max(1);
        FrameRange {
            start: self.start.map(|s| s / hop),
            end: self.end.map(|e| e / hop),
        }
    }
}

/// Analysis window in chroma frame columns, either side optional
///
/// This is the unit of restriction for profile building: the selected
/// columns of the chroma matrix are summed, everything else is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRange {
    /// First frame column (inclusive); `None` = first frame
    pub start: Option<usize>,
    /// One past the last frame column; `None` = last frame
    pub end: Option<usize>,
}

impl FrameRange {
    /// Window from explicit frame bounds
    pub fn new(start: Option<usize>, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// Resolve against a matrix of `num_frames` columns
    ///
    /// The end bound clamps to the matrix width. A window that selects no
    /// frames is an error.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::EmptyRange`] if the resolved window is empty.
    pub fn resolve(self, num_frames: usize) -> Result<Range<usize>, KeyError> {
        let start = self.start.unwrap_or(0);
        let end = self.end.unwrap_or(num_frames).min(num_frames);
        if start >= end {
            return Err(KeyError::EmptyRange(format!(
                "frame window {}..{} selects no frames (matrix has {} frames)",
                start, end, num_frames
            )));
        }
        Ok(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_frames_transposes() {
        let frames = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let matrix = ChromaMatrix::from_frames(&frames);
        assert_eq!(matrix.num_rows(), 3);
        assert_eq!(matrix.num_frames(), 2);
        assert_eq!(matrix.row(0), &[1.0, 4.0]);
        assert_eq!(matrix.row(2), &[3.0, 6.0]);
    }

    #[test]
    fn test_from_frames_empty() {
        let matrix = ChromaMatrix::from_frames(&[]);
        assert_eq!(matrix.num_rows(), 0);
        assert_eq!(matrix.num_frames(), 0);
    }

    #[test]
    fn test_sample_range_from_seconds() {
        let range = SampleRange::from_seconds(Some(1.5), Some(3.0), 44100);
        assert_eq!(range.start, Some(66_150));
        assert_eq!(range.end, Some(132_300));
    }

    #[test]
    fn test_sample_range_to_frames() {
        let range = SampleRange::new(Some(1024), Some(5120)).to_frames(512);
        assert_eq!(range, FrameRange::new(Some(2), Some(10)));

        // Partial frames truncate toward zero
        let range = SampleRange::new(Some(1000), None).to_frames(512);
        assert_eq!(range.start, Some(1));
        assert_eq!(range.end, None);
    }

    #[test]
    fn test_frame_range_resolve_full() {
        let range = FrameRange::default().resolve(100).unwrap();
        assert_eq!(range, 0..100);
    }

    #[test]
    fn test_frame_range_resolve_clamps_end() {
        let range = FrameRange::new(Some(10), Some(500)).resolve(100).unwrap();
        assert_eq!(range, 10..100);
    }

    #[test]
    fn test_frame_range_resolve_one_sided() {
        assert_eq!(
            FrameRange::new(Some(30), None).resolve(100).unwrap(),
            30..100
        );
        assert_eq!(FrameRange::new(None, Some(30)).resolve(100).unwrap(), 0..30);
    }

    #[test]
    fn test_frame_range_empty() {
        assert!(matches!(
            FrameRange::new(Some(50), Some(50)).resolve(100),
            Err(KeyError::EmptyRange(_))
        ));
        assert!(matches!(
            FrameRange::new(Some(200), None).resolve(100),
            Err(KeyError::EmptyRange(_))
        ));
        assert!(matches!(
            FrameRange::default().resolve(0),
            Err(KeyError::EmptyRange(_))
        ));
    }
}
