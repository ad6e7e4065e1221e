//! Configuration parameters for key estimation

/// Key estimation configuration parameters
#[derive(Debug, Clone, Copy)]
pub struct EstimatorConfig {
    /// Alternate-key threshold ratio (default: 0.9)
    ///
    /// A hypothesis is reported as the alternate key when its correlation is
    /// strictly greater than `alternate_ratio * best_correlation` and not
    /// exactly equal to the best correlation. The equality comparison is
    /// exact (no epsilon band): two hypotheses with identical rounded
    /// correlations never suppress each other's candidacy by proximity,
    /// only by exact value.
    pub alternate_ratio: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            alternate_ratio: 0.9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ratio() {
        let config = EstimatorConfig::default();
        assert_eq!(config.alternate_ratio, 0.9);
    }
}
