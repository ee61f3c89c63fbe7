use criterion::{criterion_group, criterion_main, Criterion};
use econet::scorer::{ClusterDeltas, CorridorInputRow, SynergyAmplifier};
use std::hint::black_box;

fn sample_row() -> CorridorInputRow {
    CorridorInputRow {
        corridor_id: "BENCH-01".to_string(),
        region: "Bench-Region".to_string(),
        smart_grid_score: 0.8,
        net_zero_score: 0.7,
        green_infra_score: 0.6,
        air_sensing_score: 0.5,
        low_carbon_mobility_score: 0.9,
        circular_materials_score: 0.7,
        smart_grid: ClusterDeltas {
            delta_c_tco2: -10.0,
            ..Default::default()
        },
        buildings: ClusterDeltas {
            delta_c_tco2: -12.0,
            ..Default::default()
        },
        mobility: ClusterDeltas {
            delta_c_tco2: -8.0,
            delta_p_ugm3: -5.0,
            ..Default::default()
        },
        green_infra: ClusterDeltas {
            delta_c_tco2: -6.0,
            ..Default::default()
        },
        air_sensing: ClusterDeltas {
            delta_p_ugm3: -3.0,
            ..Default::default()
        },
        materials: ClusterDeltas {
            delta_c_tco2: -4.0,
            ..Default::default()
        },
    }
}

fn bench_compute(c: &mut Criterion) {
    let amp = SynergyAmplifier::new(1.20).unwrap();
    let row = sample_row();

    c.bench_function("corridor_compute", |b| {
        b.iter(|| black_box(amp.compute(black_box(&row))))
    });
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
