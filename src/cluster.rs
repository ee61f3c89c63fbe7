use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// One infrastructure category of a corridor, with its own physical-delta
/// measurements and normalized sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum Cluster {
    SmartGrid,
    Buildings,
    Mobility,
    GreenInfra,
    AirSensing,
    Materials,
}

/// The five fixed cluster couplings whose physical effects reinforce each
/// other. Iteration order is the calibration-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum CouplingPair {
    /// SmartGrid <-> Mobility (EV charging + demand response)
    GridEv,
    /// SmartGrid <-> Buildings (demand response + building automation)
    GridBuildings,
    /// GreenInfra <-> Buildings (UHI cooling -> HVAC savings)
    GreenBuildings,
    /// AirSensing <-> Mobility (signal timing / routing by PM2.5)
    AirMobility,
    /// Materials <-> Buildings (embodied + operational carbon)
    MaterialsBuildings,
}

impl CouplingPair {
    pub const fn clusters(self) -> (Cluster, Cluster) {
        match self {
            CouplingPair::GridEv => (Cluster::SmartGrid, Cluster::Mobility),
            CouplingPair::GridBuildings => (Cluster::SmartGrid, Cluster::Buildings),
            CouplingPair::GreenBuildings => (Cluster::GreenInfra, Cluster::Buildings),
            CouplingPair::AirMobility => (Cluster::AirSensing, Cluster::Mobility),
            CouplingPair::MaterialsBuildings => (Cluster::Materials, Cluster::Buildings),
        }
    }
}
