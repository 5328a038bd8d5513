//! The engine has no shared mutable state, so parallel evaluation must agree
//! with sequential evaluation exactly.

mod common;

use prahar::hazard::classify;
use prahar::historical::nearest_historical;
use rayon::prelude::*;

#[test]
fn test_parallel_batch_matches_sequential() {
    let batch = common::batch();

    let sequential: Vec<_> = batch
        .iter()
        .map(|p| {
            let result = p.simulate();
            (result, classify(result.megatons).tier, nearest_historical(result.megatons).name)
        })
        .collect();

    let parallel: Vec<_> = batch
        .par_iter()
        .map(|p| {
            let result = p.simulate();
            (result, classify(result.megatons).tier, nearest_historical(result.megatons).name)
        })
        .collect();

    assert_eq!(sequential.len(), parallel.len());
    for (seq, par) in sequential.iter().zip(&parallel) {
        assert_eq!(seq.0.megatons.to_bits(), par.0.megatons.to_bits());
        assert_eq!(seq.0.crater_diameter_m.to_bits(), par.0.crater_diameter_m.to_bits());
        assert_eq!(seq.1, par.1);
        assert_eq!(seq.2, par.2);
    }
}

#[test]
fn test_batch_energy_scales_with_velocity_squared() {
    let batch = common::batch();
    // Within each (diameter, material) group velocities are listed in order
    for group in batch.chunks(4) {
        let base = &group[0];
        for p in &group[1..] {
            let ratio = p.simulate().energy_joules / base.simulate().energy_joules;
            let expected = (p.velocity_m_s / base.velocity_m_s).powi(2);
            assert!(common::relative_difference(ratio, expected) < 1e-12);
        }
    }
}
