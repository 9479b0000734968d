//! Combat domain: combat-related events.

use bevy::ecs::message::Message;

use crate::combat::PlayerId;

/// One-shot sound requested by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Slash,
    Block,
    Fireball,
}

/// Event emitted when a fighter's state or a launch asks for a sound
#[derive(Debug, Clone, Copy)]
pub struct SoundCueEvent {
    pub player: PlayerId,
    pub cue: SoundCue,
}

impl Message for SoundCueEvent {}

/// Event emitted once when a player's health bar empties
#[derive(Debug, Clone, Copy)]
pub struct FighterDefeatedEvent {
    pub player: PlayerId,
}

impl Message for FighterDefeatedEvent {}
