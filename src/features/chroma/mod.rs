//! Chroma input handling
//!
//! Accepts the 12xT pitch-class energy grid produced by an external chroma
//! extractor and aggregates it into a per-pitch-class energy profile:
//! - Chroma matrix and analysis window types
//! - Pitch-class profile building (raw column sums, no normalization)

pub mod matrix;
pub mod profile;

pub use matrix::{ChromaMatrix, FrameRange, SampleRange};
pub use profile::{build_profile, PitchClassProfile};
