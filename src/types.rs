//! Core physics types and constants for impact consequence estimation.

use crate::material::MaterialClass;
use crate::physics;

// Physical constants (SI units)

/// Energy released by one megaton of TNT (joules)
pub const TNT_JOULES_PER_MEGATON: f64 = 4.184e15;

/// Yield of the Hiroshima bomb in megatons (used for report comparisons)
pub const HIROSHIMA_MEGATONS: f64 = 0.015;

/// Speed of sound at sea level (m/s), used for the Mach readout
pub const SPEED_OF_SOUND: f64 = 343.0;

/// Meters per kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// Lowest energy (megatons) fed into a logarithm when matching historical events.
pub const HISTORICAL_LOG_FLOOR_MEGATONS: f64 = 0.001;

/// Errors raised while turning operator input into [`ImpactParameters`].
///
/// The physics engine itself never fails; these only come from the shell.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be a number, got {input:?}")]
    NotANumber { field: &'static str, input: String },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("unknown spectral class {0:?} (choose C, S or M)")]
    UnknownMaterial(String),
}

/// The validated input triple for one impact run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactParameters {
    /// Asteroid diameter in meters (> 0)
    pub diameter_m: f64,
    /// Bulk composition class
    pub material: MaterialClass,
    /// Impact velocity in meters per second (> 0)
    pub velocity_m_s: f64,
}

impl ImpactParameters {
    /// Build parameters, rejecting non-finite or non-positive diameter and velocity.
    pub fn new(
        diameter_m: f64,
        material: MaterialClass,
        velocity_m_s: f64,
    ) -> Result<Self, InputError> {
        Ok(Self {
            diameter_m: require_positive("diameter", diameter_m)?,
            material,
            velocity_m_s: require_positive("velocity", velocity_m_s)?,
        })
    }

    /// Parse the three operator entries.
    ///
    /// Velocity is typed in km/s (as the operator thinks about it) and stored in m/s.
    pub fn from_user_input(
        diameter_text: &str,
        material_text: &str,
        velocity_km_s_text: &str,
    ) -> Result<Self, InputError> {
        let diameter_m = parse_number("diameter", diameter_text)?;
        let material: MaterialClass = material_text.parse()?;
        let velocity_km_s = parse_number("velocity", velocity_km_s_text)?;
        // Validate before scaling so the error reports what the operator typed
        require_positive("velocity", velocity_km_s)?;
        Self::new(diameter_m, material, velocity_km_s * METERS_PER_KM)
    }

    /// Velocity in km/s
    pub fn velocity_km_s(&self) -> f64 {
        self.velocity_m_s / METERS_PER_KM
    }

    /// Run the physics engine on these parameters.
    pub fn simulate(&self) -> SimulationResult {
        physics::simulate(self.diameter_m, self.material, self.velocity_m_s)
    }
}

/// Parse a trimmed decimal number for the named field.
pub fn parse_number(field: &'static str, text: &str) -> Result<f64, InputError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber {
            field,
            input: text.to_string(),
        })
}

fn require_positive(field: &'static str, value: f64) -> Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(InputError::NonPositive { field, value });
    }
    Ok(value)
}

/// Derived quantities of one impact.
///
/// A plain return value: produced by [`physics::simulate`], never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationResult {
    /// Asteroid mass (kg)
    pub mass_kg: f64,
    /// Kinetic energy at impact (J)
    pub energy_joules: f64,
    /// Kinetic energy in megatons of TNT
    pub megatons: f64,
    /// Estimated crater diameter (m)
    pub crater_diameter_m: f64,
    /// Richter-like magnitude, 0 when energy is not positive
    pub seismic_magnitude: f64,
    /// Fireball / blast radius (m)
    pub fireball_radius_m: f64,
}

impl SimulationResult {
    /// Crater diameter in km
    pub fn crater_diameter_km(&self) -> f64 {
        self.crater_diameter_m / METERS_PER_KM
    }

    /// Fireball radius in km
    pub fn fireball_radius_km(&self) -> f64 {
        self.fireball_radius_m / METERS_PER_KM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_positive_values() {
        let params = ImpactParameters::new(20.0, MaterialClass::Stony, 19_000.0)
            .expect("valid parameters");
        assert_eq!(params.diameter_m, 20.0);
        assert_eq!(params.velocity_km_s(), 19.0);
    }

    #[test]
    fn test_new_rejects_zero_and_negative() {
        assert_eq!(
            ImpactParameters::new(0.0, MaterialClass::Stony, 1.0),
            Err(InputError::NonPositive {
                field: "diameter",
                value: 0.0
            })
        );
        assert_eq!(
            ImpactParameters::new(10.0, MaterialClass::Metallic, -3.0),
            Err(InputError::NonPositive {
                field: "velocity",
                value: -3.0
            })
        );
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert_eq!(
            ImpactParameters::new(f64::NAN, MaterialClass::Stony, 1.0),
            Err(InputError::NonFinite { field: "diameter" })
        );
        assert_eq!(
            ImpactParameters::new(1.0, MaterialClass::Stony, f64::INFINITY),
            Err(InputError::NonFinite { field: "velocity" })
        );
    }

    #[test]
    fn test_from_user_input_converts_km_per_s() {
        let params = ImpactParameters::from_user_input(" 60 ", "s", "20").expect("valid input");
        assert_eq!(params.diameter_m, 60.0);
        assert_eq!(params.material, MaterialClass::Stony);
        assert_eq!(params.velocity_m_s, 20_000.0);
    }

    #[test]
    fn test_from_user_input_reports_bad_fields() {
        let err = ImpactParameters::from_user_input("abc", "S", "20").unwrap_err();
        assert!(matches!(err, InputError::NotANumber { field: "diameter", .. }));

        let err = ImpactParameters::from_user_input("10", "X", "20").unwrap_err();
        assert_eq!(err, InputError::UnknownMaterial("X".to_string()));

        let err = ImpactParameters::from_user_input("10", "M", "-1").unwrap_err();
        assert_eq!(
            err,
            InputError::NonPositive {
                field: "velocity",
                value: -1.0
            }
        );
    }

    #[test]
    fn test_error_messages_are_readable() {
        let err = InputError::NonPositive {
            field: "diameter",
            value: -2.0,
        };
        assert_eq!(err.to_string(), "diameter must be positive, got -2");
        let err = InputError::UnknownMaterial("Q".into());
        assert!(err.to_string().contains("C, S or M"));
    }

    #[test]
    fn test_result_km_conversions() {
        let result = SimulationResult {
            mass_kg: 1.0,
            energy_joules: 1.0,
            megatons: 1.0,
            crater_diameter_m: 1500.0,
            seismic_magnitude: 5.87,
            fireball_radius_m: 140.0,
        };
        assert_eq!(result.crater_diameter_km(), 1.5);
        assert_eq!(result.fireball_radius_km(), 0.14);
    }
}
