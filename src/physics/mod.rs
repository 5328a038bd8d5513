//! Impact physics engine.
//!
//! Closed-form estimates only: the asteroid is a uniform sphere, its kinetic
//! energy is classical, and the consequences are empirical scaling laws of
//! the TNT-equivalent energy. Every function here is pure and total over its
//! documented domain, so results can be computed from any thread.
//!
//! Preconditions (positive diameter, density and velocity) are enforced by
//! [`ImpactParameters::new`](crate::types::ImpactParameters::new); the engine
//! does not re-check them.

mod effects;
mod energy;

#[cfg(test)]
mod proptest_physics;

pub use effects::{crater_diameter, fireball_radius, seismic_magnitude};
pub use energy::{kinetic_energy, mass_from_volume, megatons_from_joules, sphere_volume};

use crate::material::MaterialClass;
use crate::types::{HIROSHIMA_MEGATONS, SPEED_OF_SOUND, SimulationResult};

/// Run the full estimate for one impactor.
///
/// # Arguments
/// * `diameter_m` - Asteroid diameter (meters, > 0)
/// * `material` - Composition class, fixes the bulk density
/// * `velocity_m_s` - Impact velocity (m/s, > 0)
pub fn simulate(diameter_m: f64, material: MaterialClass, velocity_m_s: f64) -> SimulationResult {
    let volume = sphere_volume(diameter_m);
    let mass_kg = mass_from_volume(volume, material.density());
    let energy_joules = kinetic_energy(mass_kg, velocity_m_s);
    let megatons = megatons_from_joules(energy_joules);

    SimulationResult {
        mass_kg,
        energy_joules,
        megatons,
        crater_diameter_m: crater_diameter(megatons),
        seismic_magnitude: seismic_magnitude(megatons),
        fireball_radius_m: fireball_radius(megatons),
    }
}

/// Number of Hiroshima-yield bombs releasing the same energy.
pub fn hiroshima_equivalents(megatons: f64) -> f64 {
    megatons / HIROSHIMA_MEGATONS
}

/// Mach number of a velocity at sea level.
pub fn mach_number(velocity_m_s: f64) -> f64 {
    velocity_m_s / SPEED_OF_SOUND
}
