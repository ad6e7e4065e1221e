//! Key correlation engine
//!
//! Correlates an observed pitch-class profile against the Krumhansl-Schmuckler
//! templates under all 12 tonic rotations and both modes.
//!
//! # Reference
//!
//! Krumhansl, C. L. (1990). *Cognitive Foundations of Musical Pitch*.
//! Oxford University Press. The correlation form of the key-finding
//! algorithm is due to Krumhansl and Schmuckler.

use super::templates::KeyTemplates;
use super::KeyEstimationResult;
use crate::analysis::result::{Key, PitchClass};
use crate::config::EstimatorConfig;
use crate::error::KeyError;
use crate::features::chroma::PitchClassProfile;

/// Krumhansl-Schmuckler key correlation engine
///
/// Holds the two reference templates and the estimator configuration. Pure
/// computation, no cross-call state: one engine can score any number of
/// profiles, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct KeyCorrelationEngine {
    templates: KeyTemplates,
    config: EstimatorConfig,
}

impl KeyCorrelationEngine {
    /// Engine with Krumhansl-Schmuckler templates and default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom configuration
    pub fn with_config(config: EstimatorConfig) -> Self {
        Self {
            templates: KeyTemplates::new(),
            config,
        }
    }

    /// Estimate the key of a pitch-class profile
    ///
    /// Builds all 24 key hypotheses: for each tonic rotation the profile is
    /// reindexed starting at that tonic and correlated against the fixed
    /// mode template (the template itself never rotates). Correlations are
    /// rounded to 3 decimal places before storage, and the table keeps the
    /// canonical order: major keys C..B, then minor keys C..B.
    ///
    /// The best key is the first maximum in table order. The alternate key,
    /// when present, is the first other hypothesis whose correlation exceeds
    /// `alternate_ratio * best` without being exactly equal to the best.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::DegenerateProfile`] if the profile has zero
    /// variance (all 12 energies equal), which makes Pearson correlation
    /// undefined.
    ///
    /// # Example
    ///
    /// ```
    /// use tonal_dsp::{KeyCorrelationEngine, PitchClassProfile};
    ///
    /// let profile = PitchClassProfile::from_energies([
    ///     10.0, 2.0, 3.0, 2.0, 4.0, 4.0, 2.0, 5.0, 2.0, 3.0, 2.0, 2.0,
    /// ]);
    /// let result = KeyCorrelationEngine::new().estimate_key(&profile)?;
    ///
    /// assert_eq!(result.best_key().name(), "C major");
    /// assert_eq!(result.best_correlation(), 0.93);
    /// # Ok::<(), tonal_dsp::KeyError>(())
    /// ```
    pub fn estimate_key(
        &self,
        profile: &PitchClassProfile,
    ) -> Result<KeyEstimationResult, KeyError> {
        let energies = profile.energies();
        log::debug!("Estimating key from profile {:?}", energies);

        let min = energies.iter().copied().fold(f64::INFINITY, f64::min);
        let max = energies.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if min == max {
            return Err(KeyError::DegenerateProfile(format!(
                "all 12 pitch-class energies equal {}; correlation is undefined",
                min
            )));
        }

        let mut correlations = Vec::with_capacity(24);
        for (template, mode) in [
            (&self.templates.major, Mode::Major),
            (&self.templates.minor, Mode::Minor),
        ] {
            for rotation in 0..12 {
                let mut hypothesis = [0.0f64; 12];
                for (offset, value) in hypothesis.iter_mut().enumerate() {
                    *value = energies[(rotation + offset) % 12];
                }
                let corr = round3(pearson(template, &hypothesis));
                let tonic = PitchClass::from_index(rotation);
                let key = match mode {
                    Mode::Major => Key::Major(tonic),
                    Mode::Minor => Key::Minor(tonic),
                };
                correlations.push((key, corr));
            }
        }

        // First maximum in table order wins ties
        let (mut best_key, mut best_corr) = correlations[0];
        for &(key, corr) in &correlations[1..] {
            if corr > best_corr {
                best_key = key;
                best_corr = corr;
            }
        }

        let alternate = correlations
            .iter()
            .find(|&&(_, corr)| corr > self.config.alternate_ratio * best_corr && corr != best_corr)
            .copied();

        log::debug!(
            "Best key: {} ({}), alternate: {:?}",
            best_key,
            best_corr,
            alternate
        );

        Ok(KeyEstimationResult::new(
            profile.clone(),
            correlations,
            best_key,
            best_corr,
            alternate,
        ))
    }
}

enum Mode {
    Major,
    Minor,
}

/// Pearson correlation coefficient between two 12-element vectors
fn pearson(a: &[f64; 12], b: &[f64; 12]) -> f64 {
    let n = a.len() as f64;
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    cov / (var_a * var_b).sqrt()
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
