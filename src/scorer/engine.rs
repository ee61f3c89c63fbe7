use strum::IntoEnumIterator;
use tracing::debug;

use super::coupling::{clamp01, normalized_coupling};
use super::types::{CorridorInputRow, SynergyCoefficients, SynergyOutputRow};
use super::SynergyAmplifier;
use crate::cluster::CouplingPair;
use crate::config::CalibrationWeights;

/// Full pipeline: base score, coefficients, amplifier, capped final score.
pub fn compute(amp: &SynergyAmplifier, row: &CorridorInputRow) -> SynergyOutputRow {
    let base_score = base_eco_impact_score(&amp.weights, row);
    let coeffs = synergy_coefficients(row);

    let synergy_raw = aggregate_synergy(&amp.weights, &coeffs);
    let amplifier = clamp_amplifier(1.0 + synergy_raw, amp.max_amplifier);
    let final_score = clamp01(base_score * amplifier);

    debug!(
        corridor = %row.corridor_id,
        base = base_score,
        amplifier,
        score = final_score,
        "corridor synergy computed"
    );

    SynergyOutputRow {
        corridor_id: row.corridor_id.clone(),
        region: row.region.clone(),
        base_eco_impact_score: base_score,
        synergy_amplifier: amplifier,
        eco_impact_score_synergy: final_score,
        coeffs,
    }
}

/// Weight-sum-normalized composite of the six sub-scores, clamped to [0,1].
pub fn base_eco_impact_score(weights: &CalibrationWeights, row: &CorridorInputRow) -> f64 {
    let w = weights.base_weights();
    let num: f64 = row
        .sub_scores()
        .iter()
        .zip(w.iter())
        .map(|(s, w)| s * w)
        .sum();

    clamp01(num / weights.base_weight_sum())
}

/// Evaluates the coupling formula on the five fixed pairs. Each pair couples
/// the negated carbon deltas of its clusters, except air<->mobility which
/// couples the negated pollution deltas.
pub fn synergy_coefficients(row: &CorridorInputRow) -> SynergyCoefficients {
    SynergyCoefficients {
        grid_ev: pair_coupling(row, CouplingPair::GridEv),
        grid_buildings: pair_coupling(row, CouplingPair::GridBuildings),
        green_buildings: pair_coupling(row, CouplingPair::GreenBuildings),
        air_mobility: pair_coupling(row, CouplingPair::AirMobility),
        materials_buildings: pair_coupling(row, CouplingPair::MaterialsBuildings),
    }
}

fn pair_coupling(row: &CorridorInputRow, pair: CouplingPair) -> f64 {
    let (a, b) = pair.clusters();
    let (da, db) = (row.deltas(a), row.deltas(b));

    // Favorable direction = reduction, so deltas enter negated.
    let (fa, fb) = match pair {
        CouplingPair::AirMobility => (-da.delta_p_ugm3, -db.delta_p_ugm3),
        _ => (-da.delta_c_tco2, -db.delta_c_tco2),
    };
    normalized_coupling(fa, fb)
}

/// Convex combination of the five coefficients, clamped to [0,1] and scaled
/// to the maximum increment.
pub fn aggregate_synergy(weights: &CalibrationWeights, coeffs: &SynergyCoefficients) -> f64 {
    let total: f64 = CouplingPair::iter()
        .map(|pair| coeffs.coefficient(pair) * weights.pair_weight(pair))
        .sum();

    weights.max_increment * clamp01(total)
}

fn clamp_amplifier(a: f64, max_amplifier: f64) -> f64 {
    if a < 1.0 {
        return 1.0;
    }
    if a > max_amplifier {
        return max_amplifier;
    }
    a
}
