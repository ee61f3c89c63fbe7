use serde::{Deserialize, Serialize};

use crate::cluster::CouplingPair;
use crate::{EcoNetError, EnResult};

/// Default cap on the synergy amplifier.
pub const DEFAULT_MAX_AMPLIFIER: f64 = 1.20;

/// Calibration table for the corridor score.
///
/// Every value here is a calibration point, not a derived constant: the six
/// base-score weights happen to be equal today and the five synergy weights
/// happen to sum to 1.0, but each is independently adjustable. `validate`
/// enforces the table invariants when a caller supplies its own weights.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationWeights {
    // === BASE SCORE (per sub-score) ===
    pub weight_smart_grid: f64,
    pub weight_net_zero: f64,
    pub weight_green_infra: f64,
    pub weight_air_sensing: f64,
    pub weight_low_carbon_mobility: f64,
    pub weight_circular_materials: f64,

    // === SYNERGY (per coupling pair, convex combination) ===
    pub weight_grid_ev: f64,
    pub weight_grid_buildings: f64,
    pub weight_green_buildings: f64,
    pub weight_air_mobility: f64,
    pub weight_materials_buildings: f64,

    /// Largest additive boost synergy can contribute to the multiplier
    /// before the amplifier clamp.
    pub max_increment: f64,
}

impl Default for CalibrationWeights {
    fn default() -> Self {
        Self {
            weight_smart_grid: 1.0,
            weight_net_zero: 1.0,
            weight_green_infra: 1.0,
            weight_air_sensing: 1.0,
            weight_low_carbon_mobility: 1.0,
            weight_circular_materials: 1.0,

            weight_grid_ev: 0.30,
            weight_grid_buildings: 0.25,
            weight_green_buildings: 0.20,
            weight_air_mobility: 0.15,
            weight_materials_buildings: 0.10,

            max_increment: 0.20,
        }
    }
}

impl CalibrationWeights {
    pub fn base_weights(&self) -> [f64; 6] {
        [
            self.weight_smart_grid,
            self.weight_net_zero,
            self.weight_green_infra,
            self.weight_air_sensing,
            self.weight_low_carbon_mobility,
            self.weight_circular_materials,
        ]
    }

    pub fn base_weight_sum(&self) -> f64 {
        self.base_weights().iter().sum()
    }

    pub fn pair_weight(&self, pair: CouplingPair) -> f64 {
        match pair {
            CouplingPair::GridEv => self.weight_grid_ev,
            CouplingPair::GridBuildings => self.weight_grid_buildings,
            CouplingPair::GreenBuildings => self.weight_green_buildings,
            CouplingPair::AirMobility => self.weight_air_mobility,
            CouplingPair::MaterialsBuildings => self.weight_materials_buildings,
        }
    }

    /// Checks the table invariants: non-negative base weights with a positive
    /// sum, and synergy weights forming a convex combination (sum 1.0).
    pub fn validate(&self) -> EnResult<()> {
        if self.base_weights().iter().any(|w| *w < 0.0) {
            return Err(EcoNetError::Validation(
                "base-score weights must be non-negative".to_string(),
            ));
        }
        if self.base_weight_sum() <= 0.0 {
            return Err(EcoNetError::Validation(
                "base-score weights must have a positive sum".to_string(),
            ));
        }

        let synergy_sum = self.weight_grid_ev
            + self.weight_grid_buildings
            + self.weight_green_buildings
            + self.weight_air_mobility
            + self.weight_materials_buildings;
        if (synergy_sum - 1.0).abs() > 1e-9 {
            return Err(EcoNetError::Validation(format!(
                "synergy weights must sum to 1.0 (got {})",
                synergy_sum
            )));
        }

        if self.max_increment < 0.0 {
            return Err(EcoNetError::Validation(
                "max_increment must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
