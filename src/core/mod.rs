//! Core domain: app state machine, camera, menus, and the quit flow.

mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

pub use state::AppState;
pub use systems::screen_title;
pub use ui::{MenuAction, MenuButton};

use bevy::prelude::*;

use crate::core::systems::{exit_app, request_quit, setup_camera, update_window_title};
use crate::core::ui::instructions::{cleanup_instructions_screen, spawn_instructions_screen};
use crate::core::ui::intro::{cleanup_intro_screen, spawn_intro_screen};
use crate::core::ui::{handle_menu_buttons, handle_menu_keys};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(AppState::Intro), spawn_intro_screen)
            .add_systems(OnExit(AppState::Intro), cleanup_intro_screen)
            .add_systems(OnEnter(AppState::Instructions), spawn_instructions_screen)
            .add_systems(OnExit(AppState::Instructions), cleanup_instructions_screen)
            .add_systems(OnEnter(AppState::Quit), exit_app)
            .add_systems(
                Update,
                (
                    update_window_title.run_if(state_changed::<AppState>),
                    request_quit,
                    (handle_menu_buttons, handle_menu_keys).run_if(
                        in_state(AppState::Intro).or(in_state(AppState::Instructions)),
                    ),
                ),
            );
    }
}
