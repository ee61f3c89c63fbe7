use serde::{Deserialize, Serialize};

use crate::scorer::{CorridorInputRow, SynergyAmplifier, SynergyCoefficients};
use crate::EnResult;

/// Persisted shape of one evaluated corridor: a field-for-field copy of the
/// amplifier's output row, with no derived values added. How this record is
/// stored or transmitted is entirely the downstream collaborator's concern.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CorridorRecord {
    pub corridor_id: String,
    pub region: String,
    pub base_eco_impact_score: f64,
    pub synergy_amplifier: f64,
    pub eco_impact_score_synergy: f64,
    pub coeffs: SynergyCoefficients,
}

/// Thin evaluation surface over the amplifier.
pub struct CorridorAnalyticsService {
    amplifier: SynergyAmplifier,
}

impl CorridorAnalyticsService {
    pub fn new(max_amplifier: f64) -> EnResult<Self> {
        Ok(Self {
            amplifier: SynergyAmplifier::new(max_amplifier)?,
        })
    }

    pub fn evaluate_corridor(&self, row: &CorridorInputRow) -> CorridorRecord {
        let out = self.amplifier.compute(row);
        CorridorRecord {
            corridor_id: out.corridor_id,
            region: out.region,
            base_eco_impact_score: out.base_eco_impact_score,
            synergy_amplifier: out.synergy_amplifier,
            eco_impact_score_synergy: out.eco_impact_score_synergy,
            coeffs: out.coeffs,
        }
    }
}
