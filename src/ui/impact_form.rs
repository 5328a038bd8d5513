//! Side panel collecting the impact parameters.
//!
//! Mirrors the operator's workflow: detection alert, spectral class,
//! diameter and velocity, then run. Input is validated here; the engine
//! only ever sees [`ImpactParameters`] that passed validation.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::material::MaterialClass;
use crate::physics::mach_number;
use crate::scenarios::{SCENARIOS, Scenario};
use crate::simulation::{CurrentImpact, DetectionState, RunImpactEvent};
use crate::types::{ImpactParameters, InputError, METERS_PER_KM, parse_number};

use super::icons;

/// Colors for the form.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(26, 26, 36, 240);
    pub const ALERT: Color32 = Color32::from_rgb(224, 85, 85);
    pub const ERROR: Color32 = Color32::from_rgb(240, 120, 100);
    pub const HINT: Color32 = Color32::from_rgb(150, 150, 160);
    pub const ACCENT: Color32 = Color32::from_rgb(85, 221, 136);
}

/// Operator entries as typed, plus the last validation error.
#[derive(Resource, Clone, Debug, Default)]
pub struct ImpactForm {
    /// Diameter in meters.
    pub diameter: String,
    pub material: Option<MaterialClass>,
    /// Velocity in km/s.
    pub velocity_km_s: String,
    pub error: Option<String>,
}

impl ImpactForm {
    /// Validate the entries.
    pub fn parameters(&self) -> Result<ImpactParameters, InputError> {
        let code = self
            .material
            .map(|m| m.code().to_string())
            .unwrap_or_default();
        ImpactParameters::from_user_input(&self.diameter, &code, &self.velocity_km_s)
    }

    /// Fill the form from a preset.
    pub fn load_scenario(&mut self, scenario: &Scenario) {
        self.diameter = format!("{}", scenario.diameter_m);
        self.material = Some(scenario.material);
        self.velocity_km_s = format!("{}", scenario.velocity_km_s());
        self.error = None;
    }

    /// Mach number of the typed velocity, if it parses to a positive value.
    pub fn mach_preview(&self) -> Option<f64> {
        parse_number("velocity", &self.velocity_km_s)
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(|v| mach_number(v * METERS_PER_KM))
    }

    /// Validate and store the error message on failure.
    fn submit(&mut self) -> Option<ImpactParameters> {
        match self.parameters() {
            Ok(params) => {
                self.error = None;
                Some(params)
            }
            Err(err) => {
                warn!("Rejected impact parameters: {err}");
                self.error = Some(err.to_string());
                None
            }
        }
    }
}

/// System that renders the parameter form.
pub fn impact_form_system(
    mut contexts: EguiContexts,
    mut form: ResMut<ImpactForm>,
    detection: Res<DetectionState>,
    current: Res<CurrentImpact>,
    mut run_events: MessageWriter<RunImpactEvent>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("impact_form")
        .resizable(false)
        .exact_width(340.0)
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(16, 12)),
        )
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 6.0;

            render_detection(ui, &detection);
            ui.separator();

            render_presets(ui, &mut form);
            ui.separator();

            render_diameter(ui, &mut form);
            ui.separator();

            render_spectrum(ui, &mut form);
            ui.separator();

            render_trajectory(ui, &mut form);
            ui.separator();

            ui.label(
                egui::RichText::new(format!("{} PHASE 4: IMPACT SIMULATION", icons::IMPACT))
                    .strong(),
            );
            let run_label = if current.outcome.is_some() {
                format!("{} Re-run with these values", icons::RUN)
            } else {
                format!("{} Run physics simulation", icons::RUN)
            };
            if ui.button(run_label).clicked()
                && let Some(parameters) = form.submit()
            {
                run_events.write(RunImpactEvent { parameters });
            }

            if let Some(error) = &form.error {
                ui.colored_label(colors::ERROR, format!("{} {error}", icons::WARNING));
            }
        });
}

fn render_detection(ui: &mut egui::Ui, detection: &DetectionState) {
    ui.label(
        egui::RichText::new(format!("{} PHASE 1: DETECTION", icons::DETECTION)).strong(),
    );
    ui.colored_label(
        colors::ALERT,
        format!("{} ALERT: Detected by {}", icons::WARNING, detection.current.observatory),
    );
    ui.label(format!("Object: {}", detection.current.designation));
    ui.label("Status: Potential Earth impactor");
}

fn render_presets(ui: &mut egui::Ui, form: &mut ImpactForm) {
    egui::CollapsingHeader::new(format!("{} Historical presets", icons::PRESETS))
        .default_open(false)
        .show(ui, |ui| {
            for scenario in SCENARIOS.iter() {
                let response = ui
                    .button(scenario.name)
                    .on_hover_text(scenario.description);
                if response.clicked() {
                    info!("Loaded preset {}", scenario.id);
                    form.load_scenario(scenario);
                }
            }
        });
}

fn render_diameter(ui: &mut egui::Ui, form: &mut ImpactForm) {
    ui.horizontal(|ui| {
        ui.label("Diameter (m):");
        ui.add(
            egui::TextEdit::singleline(&mut form.diameter)
                .hint_text("e.g. 60")
                .desired_width(120.0),
        );
    });
}

fn render_spectrum(ui: &mut egui::Ui, form: &mut ImpactForm) {
    ui.label(
        egui::RichText::new(format!("{} PHASE 2: SPECTRUM ANALYSIS", icons::SPECTRUM)).strong(),
    );
    for material in MaterialClass::ALL {
        let selected = form.material == Some(material);
        let text = format!("[{}] {}", material.code(), material.name());
        if ui.selectable_label(selected, text).clicked() {
            form.material = Some(material);
        }
        ui.label(
            egui::RichText::new(format!(
                "{}  Density: {} kg/m³",
                material.description(),
                material.density()
            ))
            .small()
            .color(colors::HINT),
        );
    }
    if let Some(material) = form.material {
        ui.colored_label(
            colors::ACCENT,
            format!(
                "{} CONFIRMED: {} (Density: {})",
                icons::SUCCESS,
                material.name(),
                material.density()
            ),
        );
    }
}

fn render_trajectory(ui: &mut egui::Ui, form: &mut ImpactForm) {
    ui.label(
        egui::RichText::new(format!("{} PHASE 3: TRAJECTORY", icons::TRAJECTORY)).strong(),
    );
    ui.horizontal(|ui| {
        ui.label("Velocity (km/s):");
        ui.add(
            egui::TextEdit::singleline(&mut form.velocity_km_s)
                .hint_text("e.g. 20")
                .desired_width(120.0),
        );
    });
    if let Some(mach) = form.mach_preview() {
        ui.label(egui::RichText::new(format!("Mach {mach:.1}")).color(colors::HINT));
    }
}
