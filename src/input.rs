//! Keyboard shortcuts for the impact shell.
//!
//! - F5: run again (new detection, clear the report)
//! - Escape: exit

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::simulation::ResetEvent;

/// Plugin providing keyboard shortcuts.
pub struct ShortcutPlugin;

impl Plugin for ShortcutPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts);
    }
}

/// What a key press asks the shell to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutAction {
    RunAgain,
    Exit,
}

/// Map a key to its shortcut, if any.
///
/// Escape is ignored while a text field has focus so it can cancel editing
/// instead of closing the app.
pub fn shortcut_for(key: KeyCode, text_input_focused: bool) -> Option<ShortcutAction> {
    match key {
        KeyCode::F5 => Some(ShortcutAction::RunAgain),
        KeyCode::Escape if !text_input_focused => Some(ShortcutAction::Exit),
        _ => None,
    }
}

fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut reset_events: MessageWriter<ResetEvent>,
    mut exit: MessageWriter<AppExit>,
) {
    let text_input_focused = contexts
        .ctx_mut()
        .is_ok_and(|ctx| ctx.wants_keyboard_input());

    for key in keys.get_just_pressed() {
        match shortcut_for(*key, text_input_focused) {
            Some(ShortcutAction::RunAgain) => {
                info!("Run again requested");
                reset_events.write(ResetEvent);
            }
            Some(ShortcutAction::Exit) => {
                info!("Stay vigilant.");
                exit.write(AppExit::Success);
            }
            None => {}
        }
    }
}
