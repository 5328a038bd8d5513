//! Common test utilities for integration tests.

use prahar::material::MaterialClass;
use prahar::types::ImpactParameters;

/// Build parameters that are known to be valid.
pub fn params(diameter_m: f64, material: MaterialClass, velocity_m_s: f64) -> ImpactParameters {
    ImpactParameters::new(diameter_m, material, velocity_m_s).expect("valid test parameters")
}

/// A spread of impactors from pebbles to planet-killers.
#[allow(dead_code)]
pub fn batch() -> Vec<ImpactParameters> {
    let diameters = [0.1, 1.0, 20.0, 60.0, 350.0, 1_000.0, 10_000.0];
    let velocities = [11_000.0, 19_000.0, 30_000.0, 72_000.0];
    let mut out = Vec::new();
    for &diameter in &diameters {
        for material in MaterialClass::ALL {
            for &velocity in &velocities {
                out.push(params(diameter, material, velocity));
            }
        }
    }
    out
}

/// Relative difference |a - b| / max(|a|, |b|).
#[allow(dead_code)]
pub fn relative_difference(a: f64, b: f64) -> f64 {
    let scale = a.abs().max(b.abs());
    if scale == 0.0 { 0.0 } else { (a - b).abs() / scale }
}
