pub mod coupling;
pub mod engine;
pub mod types;

pub use self::types::{ClusterDeltas, CorridorInputRow, SynergyCoefficients, SynergyOutputRow};
use crate::config::{CalibrationWeights, DEFAULT_MAX_AMPLIFIER};
use crate::{EcoNetError, EnResult};

/// Raises a corridor's base eco-impact score by a bounded synergy multiplier
/// derived from pairwise cluster coupling.
///
/// Stateless apart from the calibration table and the amplifier cap, both
/// read-only after construction, so one instance is safe to share across
/// threads without synchronization.
#[derive(Debug)]
pub struct SynergyAmplifier {
    pub weights: CalibrationWeights,
    max_amplifier: f64,
}

impl SynergyAmplifier {
    /// Builds an amplifier with the default calibration table.
    ///
    /// Fails if `max_amplifier < 1.0`: an amplifier below 1.0 would mean
    /// synergy reduces the score.
    pub fn new(max_amplifier: f64) -> EnResult<Self> {
        if max_amplifier < 1.0 {
            return Err(EcoNetError::Config(
                "maxAmplifier must be >= 1.0".to_string(),
            ));
        }
        Ok(Self {
            weights: CalibrationWeights::default(),
            max_amplifier,
        })
    }

    /// Builds an amplifier with a caller-supplied calibration table, which
    /// is validated before use.
    pub fn with_weights(max_amplifier: f64, weights: CalibrationWeights) -> EnResult<Self> {
        weights.validate()?;
        let mut amp = Self::new(max_amplifier)?;
        amp.weights = weights;
        Ok(amp)
    }

    pub fn max_amplifier(&self) -> f64 {
        self.max_amplifier
    }

    /// Scores one corridor. Pure and total over finite inputs: every numeric
    /// edge case is absorbed by clamping or by the coupling formula's
    /// defined-zero case, never by an error.
    pub fn compute(&self, row: &CorridorInputRow) -> SynergyOutputRow {
        engine::compute(self, row)
    }
}

impl Default for SynergyAmplifier {
    fn default() -> Self {
        Self {
            weights: CalibrationWeights::default(),
            max_amplifier: DEFAULT_MAX_AMPLIFIER,
        }
    }
}
