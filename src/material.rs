//! Asteroid composition classes.
//!
//! Spectral class determines bulk density, which together with the diameter
//! fixes the asteroid's mass. The three classes are a closed set, so they are
//! an enum carrying their own reference data rather than a keyed lookup table.

use std::fmt;
use std::str::FromStr;

use crate::types::InputError;

/// Bulk composition of an impactor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialClass {
    /// C-type: dark, carbon-rich, low density.
    Carbonaceous,
    /// S-type: rocky, silicate-rich.
    Stony,
    /// M-type: iron-nickel.
    Metallic,
}

impl MaterialClass {
    /// All classes in catalogue order (C, S, M).
    pub const ALL: [MaterialClass; 3] = [
        MaterialClass::Carbonaceous,
        MaterialClass::Stony,
        MaterialClass::Metallic,
    ];

    /// Single-letter spectral code.
    pub fn code(self) -> char {
        match self {
            MaterialClass::Carbonaceous => 'C',
            MaterialClass::Stony => 'S',
            MaterialClass::Metallic => 'M',
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            MaterialClass::Carbonaceous => "C-type (Carbonaceous)",
            MaterialClass::Stony => "S-type (Stony)",
            MaterialClass::Metallic => "M-type (Metallic)",
        }
    }

    /// Bulk density in kg/m³. Always positive.
    pub fn density(self) -> f64 {
        match self {
            MaterialClass::Carbonaceous => 1500.0,
            MaterialClass::Stony => 3000.0,
            MaterialClass::Metallic => 7800.0,
        }
    }

    /// Short description for the spectrum analysis screen.
    pub fn description(self) -> &'static str {
        match self {
            MaterialClass::Carbonaceous => "Dark, carbon-rich.",
            MaterialClass::Stony => "Rocky, silicate-rich.",
            MaterialClass::Metallic => "Iron-nickel core.",
        }
    }

    /// Look up a class by its spectral code (case-insensitive).
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'C' => Some(MaterialClass::Carbonaceous),
            'S' => Some(MaterialClass::Stony),
            'M' => Some(MaterialClass::Metallic),
            _ => None,
        }
    }
}

impl fmt::Display for MaterialClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaterialClass {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let material = match (chars.next(), chars.next()) {
            (Some(code), None) => Self::from_code(code),
            _ => None,
        };
        material.ok_or_else(|| InputError::UnknownMaterial(trimmed.to_string()))
    }
}
