//! Preset scenario definitions.
//!
//! Parameters are rounded literature values, chosen so each preset lands in
//! the hazard tier its namesake is known for.

use crate::material::MaterialClass;

use super::Scenario;

/// All available preset scenarios.
pub static SCENARIOS: &[Scenario] = &[
    CHELYABINSK,
    TUNGUSKA,
    METEOR_CRATER,
    CHICXULUB,
];

/// Chelyabinsk, 2013: ~20 m stony body at ~19 km/s, about half a megaton.
pub static CHELYABINSK: Scenario = Scenario {
    id: "chelyabinsk",
    name: "Chelyabinsk Airburst",
    description: "20 m stony meteoroid at 19 km/s. Shattered windows across a city.",
    diameter_m: 20.0,
    material: MaterialClass::Stony,
    velocity_m_s: 19_000.0,
};

/// Tunguska, 1908: ~60 m stony body, low tens of megatons.
pub static TUNGUSKA: Scenario = Scenario {
    id: "tunguska",
    name: "Tunguska Event",
    description: "60 m stony body at 20 km/s. Flattened a forest over 2,000 km².",
    diameter_m: 60.0,
    material: MaterialClass::Stony,
    velocity_m_s: 20_000.0,
};

/// Meteor Crater, ~50,000 years ago: ~50 m iron impactor.
pub static METEOR_CRATER: Scenario = Scenario {
    id: "meteor_crater",
    name: "Meteor Crater",
    description: "50 m iron impactor at 12.8 km/s. Dug a crater over a kilometre wide.",
    diameter_m: 50.0,
    material: MaterialClass::Metallic,
    velocity_m_s: 12_800.0,
};

/// Chicxulub, 66 million years ago: ~10 km impactor.
pub static CHICXULUB: Scenario = Scenario {
    id: "chicxulub",
    name: "Chicxulub Impactor",
    description: "10 km metallic body at 20 km/s. Ended the age of the dinosaurs.",
    diameter_m: 10_000.0,
    material: MaterialClass::Metallic,
    velocity_m_s: 20_000.0,
};
