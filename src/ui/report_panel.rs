//! Central panel showing the impact report.
//!
//! The threat tier is shown immediately as a colored banner; the full text
//! report is revealed a character at a time, like a teletype.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::simulation::{CurrentImpact, ImpactOutcome, ResetEvent};

use super::{ShellSettings, icons};

/// Typewriter progress for the current report.
#[derive(Resource, Default)]
pub struct ReportReveal {
    /// Characters revealed so far (fractional between frames).
    pub revealed: f32,
    /// Run counter the progress belongs to.
    pub run: u32,
}

impl ReportReveal {
    /// Advance by `dt` seconds, restarting when a new run has completed.
    pub fn advance(&mut self, run: u32, dt: f32, chars_per_sec: f32) {
        if run != self.run {
            self.run = run;
            self.revealed = 0.0;
        }
        self.revealed += dt * chars_per_sec;
    }

    pub fn skip(&mut self) {
        self.revealed = f32::INFINITY;
    }
}

/// The first `chars` characters of `text`, never splitting a character.
pub fn visible_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// System to advance the typewriter reveal.
pub fn animate_reveal(
    time: Res<Time>,
    settings: Res<ShellSettings>,
    current: Res<CurrentImpact>,
    mut reveal: ResMut<ReportReveal>,
) {
    if current.outcome.is_none() {
        return;
    }
    reveal.advance(current.runs, time.delta_secs(), settings.reveal_chars_per_sec);
}

/// System to render the report panel.
pub fn report_panel_system(
    mut contexts: EguiContexts,
    current: Res<CurrentImpact>,
    settings: Res<ShellSettings>,
    mut reveal: ResMut<ReportReveal>,
    mut reset_events: MessageWriter<ResetEvent>,
    mut exit: MessageWriter<AppExit>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(outcome) = &current.outcome else {
            render_placeholder(ui);
            return;
        };

        render_threat_banner(ui, outcome);
        ui.add_space(4.0);
        render_section_index(ui, outcome);
        ui.add_space(8.0);

        let text = outcome.report.to_text(settings.report_width);
        let shown = if settings.reveal {
            visible_prefix(&text, reveal.revealed as usize)
        } else {
            text.as_str()
        };
        let complete = shown.len() == text.len();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .max_height((ui.available_height() - 48.0).max(120.0))
            .stick_to_bottom(!complete)
            .show(ui, |ui| {
                ui.label(egui::RichText::new(shown).monospace());
            });

        ui.separator();
        ui.horizontal(|ui| {
            if !complete && ui.button("Skip").clicked() {
                reveal.skip();
            }
            if ui.button(format!("{} Run again", icons::RESET)).clicked() {
                reset_events.write(ResetEvent);
            }
            if ui.button(format!("{} Exit", icons::CLOSE)).clicked() {
                info!("Stay vigilant.");
                exit.write(AppExit::Success);
            }
        });
    });
}

fn render_placeholder(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.4);
        ui.heading("P.R.A.H.A.R.");
        ui.label("Planetary Risk Assessment for Hazardous Asteroid Reentry");
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new(format!(
                "{} Enter the object's parameters and run the simulation.",
                icons::INFO
            ))
            .weak(),
        );
    });
}

fn render_threat_banner(ui: &mut egui::Ui, outcome: &ImpactOutcome) {
    let [r, g, b] = outcome.assessment.severity.rgb();
    let color = egui::Color32::from_rgb(r, g, b);

    egui::Frame::new()
        .fill(color.gamma_multiply(0.25))
        .stroke(egui::Stroke::new(1.5, color))
        .inner_margin(egui::Margin::same(12))
        .corner_radius(egui::CornerRadius::same(6))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "{} THREAT: {} {}",
                    icons::THREAT,
                    outcome.assessment.severity.tag(),
                    outcome.assessment.tier.label()
                ))
                .size(18.0)
                .color(color)
                .strong(),
            );
            ui.label(outcome.assessment.description);
            ui.label(format!(
                "{} {:.1} Mt  {} crater {:.2} km  {} similar to {}",
                icons::ENERGY,
                outcome.result.megatons,
                icons::CRATER,
                outcome.result.crater_diameter_km(),
                icons::HISTORICAL,
                outcome.analogue.name
            ));
        });
}

/// One chip per report section; hovering shows the section body.
fn render_section_index(ui: &mut egui::Ui, outcome: &ImpactOutcome) {
    ui.horizontal_wrapped(|ui| {
        for section in &outcome.report.sections {
            ui.label(
                egui::RichText::new(format!(
                    "{} {}",
                    icons::for_section(&section.title),
                    section.title
                ))
                .small(),
            )
            .on_hover_text(section.lines.join("\n"));
        }
    });
}
