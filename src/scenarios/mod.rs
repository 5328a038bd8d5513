//! Preset impact scenarios.
//!
//! Well-known impacts the operator can load instead of typing parameters:
//! - Chelyabinsk-class airburst
//! - Tunguska-class regional impactor
//! - Meteor-Crater-class iron impactor
//! - Chicxulub-class extinction event

pub mod presets;

use crate::material::MaterialClass;
use crate::types::{ImpactParameters, InputError, METERS_PER_KM};

pub use presets::SCENARIOS;

/// A predefined set of impact parameters.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    /// Impactor diameter (meters).
    pub diameter_m: f64,
    /// Impactor composition.
    pub material: MaterialClass,
    /// Impact velocity (m/s).
    pub velocity_m_s: f64,
}

impl Scenario {
    /// Validated parameters for this preset.
    pub fn parameters(&self) -> Result<ImpactParameters, InputError> {
        ImpactParameters::new(self.diameter_m, self.material, self.velocity_m_s)
    }

    /// Velocity in km/s, as shown in the input form.
    pub fn velocity_km_s(&self) -> f64 {
        self.velocity_m_s / METERS_PER_KM
    }
}

/// Look up a scenario by id.
pub fn get_scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}
