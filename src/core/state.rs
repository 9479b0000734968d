//! Core domain: application screens.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum AppState {
    #[default]
    Intro,
    Instructions,
    Match,
    Quit,
}
