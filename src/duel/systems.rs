//! Duel domain: systems that drive the simulation from bevy schedules.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::controls::ControlBindings;
use super::outcome::MatchSignal;
use super::state::Duel;
use crate::combat::{FighterDefeatedEvent, FighterIntent, SoundCueEvent};
use crate::content::{DuelTuning, LevelLayout};
use crate::core::AppState;

/// Intents sampled for the next tick, indexed by player.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct DuelIntents(pub [FighterIntent; 2]);

pub(crate) fn start_duel(
    mut commands: Commands,
    layout: Res<LevelLayout>,
    tuning: Res<DuelTuning>,
) {
    commands.insert_resource(Duel::new(&layout, &tuning));
    commands.insert_resource(DuelIntents::default());
    info!(
        "Match started on a {}x{} arena with {} platforms",
        tuning.arena.width,
        tuning.arena.height,
        layout.platforms.len()
    );
}

pub(crate) fn end_duel(mut commands: Commands, duel: Option<Res<Duel>>) {
    if let Some(duel) = duel {
        info!("Match ended after {} ticks", duel.ticks());
    }
    commands.remove_resource::<Duel>();
    commands.remove_resource::<DuelIntents>();
}

pub(crate) fn read_duel_input(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<ControlBindings>,
    mut intents: ResMut<DuelIntents>,
) {
    intents.0 = bindings.0.map(|controls| controls.intent(&keys));
}

pub(crate) fn advance_duel(
    mut duel: ResMut<Duel>,
    intents: Res<DuelIntents>,
    mut cues: MessageWriter<SoundCueEvent>,
    mut defeats: MessageWriter<FighterDefeatedEvent>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let report = duel.tick(intents.0);

    for (player, cue) in report.cues {
        cues.write(SoundCueEvent { player, cue });
    }
    for player in report.defeated {
        defeats.write(FighterDefeatedEvent { player });
    }

    if let Some(state) = next_app_state(report.signal) {
        info!("Match over, returning to {:?}", state);
        next_state.set(state);
    }
}

/// App state a tick's signal asks for, if any.
pub fn next_app_state(signal: MatchSignal) -> Option<AppState> {
    match signal {
        MatchSignal::Continue => None,
        MatchSignal::ReturnToIntro => Some(AppState::Intro),
    }
}
