//! Test utilities for impact estimation tests.
//!
//! Provides fixtures for well-known impactors and a relative-difference
//! assertion for energies spanning many orders of magnitude.

use crate::material::MaterialClass;
use crate::types::ImpactParameters;

/// Fixtures for creating test impact parameters.
pub mod fixtures {
    use super::*;

    /// Chelyabinsk-scale: 20 m stony body at 19 km/s.
    pub fn chelyabinsk() -> ImpactParameters {
        params(20.0, MaterialClass::Stony, 19_000.0)
    }

    /// Tunguska-scale: 60 m stony body at 20 km/s.
    pub fn tunguska() -> ImpactParameters {
        params(60.0, MaterialClass::Stony, 20_000.0)
    }

    /// Extinction-scale: 10 km metallic body at 20 km/s.
    pub fn extinction() -> ImpactParameters {
        params(10_000.0, MaterialClass::Metallic, 20_000.0)
    }

    /// Build parameters that are known to be valid.
    pub fn params(diameter_m: f64, material: MaterialClass, velocity_m_s: f64) -> ImpactParameters {
        ImpactParameters::new(diameter_m, material, velocity_m_s)
            .expect("fixture parameters must be valid")
    }
}

/// Assertions on energies.
pub mod assertions {
    /// Relative difference |a - b| / max(|a|, |b|); 0 when both are 0.
    pub fn relative_difference(a: f64, b: f64) -> f64 {
        let scale = a.abs().max(b.abs());
        if scale == 0.0 {
            0.0
        } else {
            (a - b).abs() / scale
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixtures_are_ordered_by_energy() {
        let small = fixtures::chelyabinsk().simulate().megatons;
        let medium = fixtures::tunguska().simulate().megatons;
        let large = fixtures::extinction().simulate().megatons;
        assert!(small < medium && medium < large);
    }

    #[test]
    fn test_relative_difference() {
        assert_eq!(assertions::relative_difference(0.0, 0.0), 0.0);
        assert_relative_eq!(assertions::relative_difference(100.0, 99.0), 0.01, epsilon = 1e-12);
    }
}
