//! P.R.A.H.A.R. - Planetary Risk Assessment for Hazardous Asteroid Reentry
//!
//! A desktop application estimating the consequences of an asteroid impact
//! from its diameter, composition and velocity.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use prahar::input::ShortcutPlugin;
use prahar::simulation::SimulationPlugin;
use prahar::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "P.R.A.H.A.R. - Impact Assessment".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .add_plugins((SimulationPlugin, UiPlugin, ShortcutPlugin))
        .add_systems(Startup, spawn_camera)
        .run();
}

/// egui renders through the primary camera.
fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
