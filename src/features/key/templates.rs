//! Krumhansl-Schmuckler key templates
//!
//! Tonal profiles for major and minor keys, indexed by semitone offset from
//! the tonic. The templates never rotate; the observed profile is reindexed
//! against them.

/// Krumhansl-Schmuckler major-key profile (tonic first)
pub const KS_MAJOR_PROFILE: [f64; 12] = [
    6.35, 2.23, 3.48, 2.33, 4.38, 4.09, 2.52, 5.19, 2.39, 3.66, 2.29, 2.88,
];

/// Krumhansl-Schmuckler minor-key profile (tonic first)
pub const KS_MINOR_PROFILE: [f64; 12] = [
    6.33, 2.68, 3.52, 5.38, 2.60, 3.53, 2.54, 4.75, 3.98, 2.69, 3.34, 3.17,
];

/// Reference templates for the two modes
#[derive(Debug, Clone)]
pub struct KeyTemplates {
    /// Major-key profile
    pub major: [f64; 12],

    /// Minor-key profile
    pub minor: [f64; 12],
}

impl KeyTemplates {
    /// Create key templates with the Krumhansl-Schmuckler profiles
    pub fn new() -> Self {
        Self {
            major: KS_MAJOR_PROFILE,
            minor: KS_MINOR_PROFILE,
        }
    }
}

impl Default for KeyTemplates {
    fn default() -> Self {
        Self::new()
    }
}
