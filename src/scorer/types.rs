use serde::{Deserialize, Serialize};

use crate::cluster::{Cluster, CouplingPair};

/// Corridor-aggregated physical deltas for one cluster.
/// Negative values denote reductions (savings); the sign convention is
/// load-bearing for the coupling formula.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterDeltas {
    /// Energy change, kWh
    pub delta_e_kwh: f64,
    /// CO2 change, t CO2
    pub delta_c_tco2: f64,
    /// Water change, m^3
    pub delta_w_m3: f64,
    /// Pollution change, ug/m^3 (e.g. PM2.5)
    pub delta_p_ugm3: f64,
}

/// One corridor's full input: six normalized sub-scores in [0,1] (not
/// enforced; out-of-range values are absorbed by clamping) and one
/// `ClusterDeltas` record per cluster.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CorridorInputRow {
    pub corridor_id: String,
    pub region: String,

    pub smart_grid_score: f64,
    pub net_zero_score: f64,
    pub green_infra_score: f64,
    pub air_sensing_score: f64,
    pub low_carbon_mobility_score: f64,
    pub circular_materials_score: f64,

    pub smart_grid: ClusterDeltas,
    pub buildings: ClusterDeltas,
    pub mobility: ClusterDeltas,
    pub green_infra: ClusterDeltas,
    pub air_sensing: ClusterDeltas,
    pub materials: ClusterDeltas,
}

impl CorridorInputRow {
    pub fn deltas(&self, cluster: Cluster) -> &ClusterDeltas {
        match cluster {
            Cluster::SmartGrid => &self.smart_grid,
            Cluster::Buildings => &self.buildings,
            Cluster::Mobility => &self.mobility,
            Cluster::GreenInfra => &self.green_infra,
            Cluster::AirSensing => &self.air_sensing,
            Cluster::Materials => &self.materials,
        }
    }

    pub fn sub_scores(&self) -> [f64; 6] {
        [
            self.smart_grid_score,
            self.net_zero_score,
            self.green_infra_score,
            self.air_sensing_score,
            self.low_carbon_mobility_score,
            self.circular_materials_score,
        ]
    }
}

/// Derived coupling coefficients, one per pair, each in [0,1].
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SynergyCoefficients {
    pub grid_ev: f64,
    pub grid_buildings: f64,
    pub green_buildings: f64,
    pub air_mobility: f64,
    pub materials_buildings: f64,
}

impl SynergyCoefficients {
    pub fn coefficient(&self, pair: CouplingPair) -> f64 {
        match pair {
            CouplingPair::GridEv => self.grid_ev,
            CouplingPair::GridBuildings => self.grid_buildings,
            CouplingPair::GreenBuildings => self.green_buildings,
            CouplingPair::AirMobility => self.air_mobility,
            CouplingPair::MaterialsBuildings => self.materials_buildings,
        }
    }
}

/// Result of one `compute` call. Fresh value per call; shares nothing with
/// the input beyond copied identifier/region strings.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SynergyOutputRow {
    pub corridor_id: String,
    pub region: String,
    /// Pre-synergy composite, 0-1
    pub base_eco_impact_score: f64,
    /// Multiplicative factor >= 1.0, capped by the configured maximum
    pub synergy_amplifier: f64,
    /// Final score, capped at 1.0
    pub eco_impact_score_synergy: f64,
    pub coeffs: SynergyCoefficients,
}
