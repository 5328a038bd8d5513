//! Volume, mass and kinetic energy of a spherical impactor.

use std::f64::consts::PI;

use crate::types::TNT_JOULES_PER_MEGATON;

/// Volume of a sphere of the given diameter (m³).
///
/// V = (4/3)·π·(d/2)³
pub fn sphere_volume(diameter: f64) -> f64 {
    let radius = diameter / 2.0;
    (4.0 / 3.0) * PI * radius.powi(3)
}

/// Mass from volume (m³) and bulk density (kg/m³).
pub fn mass_from_volume(volume: f64, density: f64) -> f64 {
    volume * density
}

/// Classical kinetic energy E = ½·m·v² (joules).
///
/// Non-relativistic; fine for impact speeds of a few to a few tens of km/s.
pub fn kinetic_energy(mass: f64, velocity: f64) -> f64 {
    0.5 * mass * velocity.powi(2)
}

/// Convert joules to megatons of TNT.
pub fn megatons_from_joules(joules: f64) -> f64 {
    joules / TNT_JOULES_PER_MEGATON
}
