//! Textual reporting helpers
//!
//! Thin formatting over [`KeyEstimationResult`]: normalized profile
//! printout, full correlation table, best/alternate summary. All helpers
//! return a `String`; callers decide where to print.

use super::KeyEstimationResult;
use crate::features::chroma::PitchClassProfile;
use std::fmt::Write;

/// Format the relative prominence of each pitch class
///
/// Energies are divided by the profile maximum and printed to 3 decimal
/// places, one pitch class per line. An all-zero profile prints 0.000 for
/// every pitch class.
pub fn format_profile(profile: &PitchClassProfile) -> String {
    let max = profile.max_energy();
    let mut out = String::new();
    for (pitch_class, energy) in profile.iter() {
        let relative = if max > 0.0 { energy / max } else { 0.0 };
        writeln!(out, "{}\t{:5.3}", pitch_class, relative).expect("write to String");
    }
    out
}

/// Format the correlation coefficients of all 24 key hypotheses
///
/// One hypothesis per line in canonical table order, 3 decimal places.
pub fn format_correlation_table(result: &KeyEstimationResult) -> String {
    let mut out = String::new();
    for (key, correlation) in result.ranked_correlations() {
        writeln!(out, "{}\t{:6.3}", key, correlation).expect("write to String");
    }
    out
}

/// Format the best key, mentioning the alternate key when one is close
pub fn format_summary(result: &KeyEstimationResult) -> String {
    let mut out = format!(
        "likely key: {}, correlation: {}",
        result.best_key(),
        result.best_correlation()
    );
    if let (Some(key), Some(correlation)) =
        (result.alternate_key(), result.alternate_correlation())
    {
        write!(out, "\nalso possible: {}, correlation: {}", key, correlation)
            .expect("write to String");
    }
    out
}
