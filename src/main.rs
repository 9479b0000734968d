mod audio;
mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod duel;
mod movement;
mod sprites;
mod ui;

use bevy::prelude::*;
use bevy::window::WindowResolution;
use std::path::Path;

use crate::content::{TUNING_PATH, load_tuning_or_default};

fn main() {
    let tuning = load_tuning_or_default(Path::new(TUNING_PATH));
    let resolution = WindowResolution::new(
        tuning.arena.width.round() as u32,
        tuning.arena.height.round() as u32,
    );

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: core::screen_title(core::AppState::Intro).to_string(),
            resolution,
            resizable: false,
            ..default()
        }),
        // Close requests go through the Quit screen state.
        close_when_requested: false,
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin::new(tuning),
        combat::CombatPlugin,
        duel::DuelPlugin,
        sprites::SpritesPlugin,
        audio::AudioCuesPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
