//! Error types for the key estimation engine

use std::fmt;

/// Errors that can occur during key estimation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Malformed chroma grid (wrong row count, ragged rows)
    InvalidChromaShape(String),

    /// The resolved analysis window contains no frames
    EmptyRange(String),

    /// Zero-variance pitch-class profile; Pearson correlation is undefined
    DegenerateProfile(String),
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::InvalidChromaShape(msg) => write!(f, "Invalid chroma shape: {}", msg),
            KeyError::EmptyRange(msg) => write!(f, "Empty range: {}", msg),
            KeyError::DegenerateProfile(msg) => write!(f, "Degenerate profile: {}", msg),
        }
    }
}

impl std::error::Error for KeyError {}
