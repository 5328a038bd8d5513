//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

// Phases
/// Detection alert
pub const DETECTION: &str = egui_phosphor::regular::SHOOTING_STAR;
/// Spectrum analysis
pub const SPECTRUM: &str = egui_phosphor::regular::ATOM;
/// Trajectory entry
pub const TRAJECTORY: &str = egui_phosphor::regular::ROCKET;
/// Impact simulation
pub const IMPACT: &str = egui_phosphor::regular::LIGHTNING;

// Report sections
pub const OBJECT: &str = egui_phosphor::regular::CROSSHAIR;
pub const PHYSICAL: &str = egui_phosphor::regular::ASTERISK;
pub const ENERGY: &str = egui_phosphor::regular::RADIOACTIVE;
pub const HISTORICAL: &str = egui_phosphor::regular::CLOCK;
pub const CRATER: &str = egui_phosphor::regular::GLOBE;
pub const SEISMIC: &str = egui_phosphor::regular::PATH;
pub const THREAT: &str = egui_phosphor::regular::WARNING_CIRCLE;

// Actions and status
/// Run the simulation
pub const RUN: &str = egui_phosphor::regular::PLAY;
/// Run again (new detection)
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
/// Exit
pub const CLOSE: &str = egui_phosphor::regular::X;
/// Preset list
pub const PRESETS: &str = egui_phosphor::regular::LIST;
/// Warning/alert icon
pub const WARNING: &str = egui_phosphor::regular::WARNING;
/// Success/check icon
pub const SUCCESS: &str = egui_phosphor::regular::CHECK_CIRCLE;
/// Info icon
pub const INFO: &str = egui_phosphor::regular::INFO;

/// Icon for a report section title.
pub fn for_section(title: &str) -> &'static str {
    match title {
        "OBJECT" => OBJECT,
        "PHYSICAL" => PHYSICAL,
        "ENERGY" => ENERGY,
        "HISTORICAL SIMILAR" => HISTORICAL,
        "CRATER" => CRATER,
        "SEISMIC" => SEISMIC,
        t if t.starts_with("THREAT") => THREAT,
        _ => INFO,
    }
}
