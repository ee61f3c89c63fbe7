use econet::scorer::coupling::{clamp01, normalized_coupling};
use rstest::rstest;

// --- DEFINED-ZERO BOUNDARY ---
// A cluster with no net improvement cannot contribute synergy.
#[rstest]
#[case(0.0, 5.0)]
#[case(5.0, 0.0)]
#[case(-3.0, 5.0)]
#[case(5.0, -3.0)]
#[case(0.0, 0.0)]
#[case(-1.0, -1.0)]
fn test_coupling_zero_for_non_positive(#[case] a: f64, #[case] b: f64) {
    assert_eq!(
        normalized_coupling(a, b),
        0.0,
        "Coupling must be 0 for ({}, {})",
        a,
        b
    );
}

// --- FIXED POINT ---
// Perfectly balanced reinforcement: coupling(a, a) == 1 for any a > 0.
#[rstest]
#[case(1e-12)]
#[case(0.5)]
#[case(10.0)]
#[case(1e9)]
fn test_coupling_fixed_point(#[case] a: f64) {
    assert_eq!(normalized_coupling(a, a), 1.0, "coupling({}, {}) != 1", a, a);
}

// --- SYMMETRY ---
#[rstest]
#[case(10.0, 8.0)]
#[case(12.0, 6.0)]
#[case(3.0, 5.0)]
#[case(0.001, 1000.0)]
fn test_coupling_symmetry(#[case] a: f64, #[case] b: f64) {
    assert_eq!(normalized_coupling(a, b), normalized_coupling(b, a));
}

// --- BOUNDS & DIVERGENCE ---
#[rstest]
#[case(10.0, 8.0)]
#[case(1.0, 100.0)]
#[case(1.0, 1e6)]
fn test_coupling_in_unit_interval(#[case] a: f64, #[case] b: f64) {
    let c = normalized_coupling(a, b);
    assert!((0.0..=1.0).contains(&c), "coupling({}, {}) = {}", a, b, c);
}

#[test]
fn test_coupling_tends_to_zero_as_magnitudes_diverge() {
    let near = normalized_coupling(10.0, 8.0);
    let far = normalized_coupling(10.0, 1000.0);
    let farther = normalized_coupling(10.0, 1e6);
    assert!(near > far);
    assert!(far > farther);
    assert!(farther < 1e-4);
}

// --- CLAMP ---
#[rstest]
#[case(-0.5, 0.0)]
#[case(0.0, 0.0)]
#[case(0.42, 0.42)]
#[case(1.0, 1.0)]
#[case(1.7, 1.0)]
fn test_clamp01(#[case] x: f64, #[case] expected: f64) {
    assert_eq!(clamp01(x), expected);
}
