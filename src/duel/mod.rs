//! Duel domain: the fixed-tick match loop.

mod controls;
mod outcome;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use controls::{ControlBindings, ControlSet, key_label};
pub use outcome::{MatchOutcome, MatchSignal};
pub use state::{Duel, TickReport};
pub use systems::{DuelIntents, next_app_state};

use bevy::prelude::*;

use crate::core::AppState;

/// Ordered phases of one fixed tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DuelSet {
    Input,
    Simulate,
}

pub struct DuelPlugin;

impl Plugin for DuelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlBindings>()
            .configure_sets(
                FixedUpdate,
                (DuelSet::Input, DuelSet::Simulate)
                    .chain()
                    .run_if(in_state(AppState::Match)),
            )
            .add_systems(OnEnter(AppState::Match), systems::start_duel)
            .add_systems(OnExit(AppState::Match), systems::end_duel)
            .add_systems(
                FixedUpdate,
                (
                    systems::read_duel_input.in_set(DuelSet::Input),
                    systems::advance_duel.in_set(DuelSet::Simulate),
                ),
            );
    }
}
