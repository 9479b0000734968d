//! Core domain: camera, screen titles, and the quit flow.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowCloseRequested};

use crate::core::state::AppState;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Window caption for each screen.
pub fn screen_title(state: AppState) -> &'static str {
    match state {
        AppState::Intro => "Duel Arena",
        AppState::Instructions => "Duel Arena - Help",
        AppState::Match => "Duel Arena - Fight!",
        AppState::Quit => "Duel Arena",
    }
}

pub(crate) fn update_window_title(
    state: Res<State<AppState>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    window.title = screen_title(*state.get()).to_string();
}

/// Closing the window or pressing Escape asks to quit from any screen.
pub(crate) fn request_quit(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut close_requests: MessageReader<WindowCloseRequested>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let closed = close_requests.read().count() > 0;
    if closed || keyboard.just_pressed(KeyCode::Escape) {
        info!("Quit requested");
        next_state.set(AppState::Quit);
    }
}

pub(crate) fn exit_app(mut exit: MessageWriter<AppExit>) {
    info!("Shutting down");
    exit.write(AppExit::Success);
}
