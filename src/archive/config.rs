//! Archive configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Probability of admitting a candidate that is incomparable with the
/// reference point.
pub const DEFAULT_ACCEPTANCE_PROBABILITY: f64 = 0.05;

/// Configuration shared by bounded and reference-point archives.
///
/// # Examples
///
/// ```
/// use u_archive::archive::ArchiveConfig;
///
/// let config = ArchiveConfig::default()
///     .with_maximum_size(50)
///     .with_acceptance_probability(0.1)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArchiveConfig {
    /// Maximum number of solutions kept after each `add`.
    pub maximum_size: usize,

    /// Probability in `[0, 1]` of tentatively admitting a candidate that
    /// neither dominates nor is dominated by the reference point.
    ///
    /// Only used by reference-point archives.
    pub acceptance_probability: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            maximum_size: 100,
            acceptance_probability: DEFAULT_ACCEPTANCE_PROBABILITY,
            seed: None,
        }
    }
}

impl ArchiveConfig {
    pub fn with_maximum_size(mut self, n: usize) -> Self {
        self.maximum_size = n;
        self
    }

    pub fn with_acceptance_probability(mut self, p: f64) -> Self {
        self.acceptance_probability = p;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.maximum_size == 0 {
            return Err("maximum_size must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.acceptance_probability) {
            return Err(format!(
                "acceptance_probability must be in [0, 1], got {}",
                self.acceptance_probability
            ));
        }
        Ok(())
    }
}
