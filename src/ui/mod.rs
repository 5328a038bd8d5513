//! UI module providing the egui-based interaction shell.
//!
//! A side panel walks the operator through detection, spectrum analysis and
//! trajectory entry; the central panel shows the impact report.

pub mod icons;
mod impact_form;
mod report_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use impact_form::ImpactForm;
pub use report_panel::{ReportReveal, visible_prefix};

use crate::report::DEFAULT_REPORT_WIDTH;

/// Seconds between characters in the report reveal.
pub const SLOW_PRINT_DELAY_SECS: f32 = 0.006;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShellSettings>()
            .init_resource::<ImpactForm>()
            .init_resource::<ReportReveal>()
            .init_resource::<icons::FontsInitialized>()
            .add_systems(Update, report_panel::animate_reveal)
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    impact_form::impact_form_system,
                    report_panel::report_panel_system,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// Presentation settings for the shell.
///
/// Insert a customized copy before `App::run` to override the defaults.
#[derive(Resource, Clone, Debug)]
pub struct ShellSettings {
    /// Column width of the plain-text report.
    pub report_width: usize,
    /// Reveal the report one character at a time.
    pub reveal: bool,
    /// Characters revealed per second.
    pub reveal_chars_per_sec: f32,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            report_width: DEFAULT_REPORT_WIDTH,
            reveal: true,
            reveal_chars_per_sec: 1.0 / SLOW_PRINT_DELAY_SECS,
        }
    }
}
