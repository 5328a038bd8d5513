//! Property-based tests for the impact engine using proptest.
//!
//! These tests verify the scaling laws and guards across the full range of
//! plausible (and implausible) impactors.

use proptest::prelude::*;

use super::*;
use crate::hazard::{HAZARD_TIERS, HazardTier, classify};
use crate::historical::nearest_historical;
use crate::test_utils::{assertions, fixtures};
use crate::types::TNT_JOULES_PER_MEGATON;

fn any_material() -> impl Strategy<Value = MaterialClass> {
    prop_oneof![
        Just(MaterialClass::Carbonaceous),
        Just(MaterialClass::Stony),
        Just(MaterialClass::Metallic),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Volume matches (4/3)π(d/2)³ and grows with diameter.
    #[test]
    fn prop_sphere_volume_monotonic(
        diameter in 1e-3f64..1e6,
        growth in 1.001f64..10.0,
    ) {
        let volume = sphere_volume(diameter);
        let expected = 4.0 / 3.0 * std::f64::consts::PI * (diameter / 2.0).powi(3);
        prop_assert!(assertions::relative_difference(volume, expected) < 1e-12);
        prop_assert!(sphere_volume(diameter * growth) > volume);
    }

    /// Mass is linear in density.
    #[test]
    fn prop_mass_linear_in_density(
        volume in 1e-6f64..1e15,
        density in 1.0f64..20_000.0,
    ) {
        let mass = mass_from_volume(volume, density);
        let unit = mass_from_volume(volume, 1.0) * density;
        prop_assert!(assertions::relative_difference(mass, unit) < 1e-12);
    }

    /// Doubling velocity quadruples energy; faster is always more energetic.
    #[test]
    fn prop_kinetic_energy_quadratic(
        mass in 1.0f64..1e18,
        velocity in 100.0f64..80_000.0,
    ) {
        let base = kinetic_energy(mass, velocity);
        let doubled = kinetic_energy(mass, 2.0 * velocity);
        prop_assert!(assertions::relative_difference(doubled, 4.0 * base) < 1e-12);
        prop_assert!(kinetic_energy(mass, velocity * 1.01) > base);
    }

    /// Megaton conversion is strictly increasing and linear.
    #[test]
    fn prop_megatons_linear(joules in 0.0f64..1e30, factor in 1.5f64..1000.0) {
        let mt = megatons_from_joules(joules);
        prop_assert!(assertions::relative_difference(mt * TNT_JOULES_PER_MEGATON, joules) < 1e-12);
        if joules > 0.0 {
            prop_assert!(megatons_from_joules(joules * factor) > mt);
        }
    }

    /// Estimators are finite for any positive energy and monotonic in it.
    #[test]
    fn prop_estimators_monotonic(megatons in 1e-12f64..1e15, growth in 1.01f64..100.0) {
        let bigger = megatons * growth;
        prop_assert!(crater_diameter(bigger) > crater_diameter(megatons));
        prop_assert!(seismic_magnitude(bigger) > seismic_magnitude(megatons));
        prop_assert!(fireball_radius(bigger) > fireball_radius(megatons));
        prop_assert!(seismic_magnitude(megatons).is_finite());
    }

    /// Every non-negative energy matches exactly one tier, and it is the one
    /// `for_megatons` picks.
    #[test]
    fn prop_exactly_one_tier(megatons in 0.0f64..1e12) {
        let matching: Vec<HazardTier> = HAZARD_TIERS
            .iter()
            .copied()
            .filter(|tier| tier.contains(megatons))
            .collect();
        prop_assert_eq!(matching.len(), 1);
        prop_assert_eq!(matching[0], classify(megatons).tier);
    }

    /// Energies within a small log-distance of a catalogue entry map to an
    /// entry with that same energy.
    #[test]
    fn prop_near_catalogue_energy_matches(index in 0usize..4, jitter in -0.05f64..0.05) {
        let event = &crate::historical::HISTORICAL_EVENTS[index];
        let probe = event.megatons * 10f64.powf(jitter);
        prop_assert_eq!(nearest_historical(probe).megatons, event.megatons);
    }

    /// Identical inputs give bit-identical results.
    #[test]
    fn prop_simulate_deterministic(
        diameter in 1e-3f64..1e5,
        material in any_material(),
        velocity in 100.0f64..80_000.0,
    ) {
        let params = fixtures::params(diameter, material, velocity);
        let first = params.simulate();
        let second = params.simulate();
        prop_assert_eq!(first.megatons.to_bits(), second.megatons.to_bits());
        prop_assert_eq!(first, second);
    }

    /// Results stay finite for extreme but positive inputs.
    #[test]
    fn prop_simulate_finite(
        diameter in 1e-4f64..1e7,
        material in any_material(),
        velocity in 1.0f64..1e5,
    ) {
        let result = simulate(diameter, material, velocity);
        prop_assert!(result.megatons.is_finite() && result.megatons > 0.0);
        prop_assert!(result.crater_diameter_m.is_finite());
        prop_assert!(result.seismic_magnitude.is_finite());
        prop_assert!(result.fireball_radius_m.is_finite());
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn test_zero_matches_tiny_energy_analogue() {
        assert_eq!(nearest_historical(0.0), nearest_historical(1e-12));
    }

    #[test]
    fn test_tunguska_fixture_is_regional() {
        let result = fixtures::tunguska().simulate();
        assert!((1.0..100.0).contains(&result.megatons));
        assert_eq!(classify(result.megatons).tier, HazardTier::RegionalThreat);
    }
}
