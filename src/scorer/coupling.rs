/// Normalized coupling between two favorable (already negated) deltas.
///
/// Zero whenever either side shows no net improvement; otherwise
/// `2ab / (a^2 + b^2)`, which is symmetric, bounded to [0,1] by AM-GM,
/// and hits 1.0 exactly when the two magnitudes match.
pub fn normalized_coupling(a: f64, b: f64) -> f64 {
    if a <= 0.0 || b <= 0.0 {
        return 0.0;
    }

    let denom = a * a + b * b;
    if denom == 0.0 {
        return 0.0;
    }
    2.0 * a * b / denom
}

pub fn clamp01(x: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    if x > 1.0 {
        return 1.0;
    }
    x
}
