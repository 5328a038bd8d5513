//! P.R.A.H.A.R. - Planetary Risk Assessment for Hazardous Asteroid Reentry
//!
//! Closed-form asteroid impact estimates (mass, energy, crater, seismic
//! magnitude, blast radius), hazard classification and historical analogue
//! matching, plus the Bevy/egui shell that drives them.

pub mod detection;
pub mod hazard;
pub mod historical;
pub mod input;
pub mod material;
pub mod physics;
pub mod report;
pub mod scenarios;
pub mod simulation;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
