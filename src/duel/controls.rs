//! Duel domain: the two fixed keyboard layouts and intent mapping.

use bevy::prelude::*;

use crate::combat::{Action, FighterIntent};
use crate::movement::Facing;

/// One player's keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSet {
    pub left: KeyCode,
    pub right: KeyCode,
    pub crouch: KeyCode,
    pub jump: KeyCode,
    pub attack: KeyCode,
    pub fireball: KeyCode,
    pub defend: KeyCode,
}

impl ControlSet {
    pub fn player_one() -> Self {
        Self {
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            crouch: KeyCode::KeyS,
            jump: KeyCode::KeyW,
            attack: KeyCode::KeyG,
            fireball: KeyCode::KeyH,
            defend: KeyCode::KeyJ,
        }
    }

    pub fn player_two() -> Self {
        Self {
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
            crouch: KeyCode::ArrowDown,
            jump: KeyCode::ArrowUp,
            attack: KeyCode::Comma,
            fireball: KeyCode::Period,
            defend: KeyCode::Slash,
        }
    }

    /// Map held keys to an intent. Only one action wins, in the order
    /// left, crouch, right, attack, fireball, defend; jump is independent.
    pub fn intent(&self, keys: &ButtonInput<KeyCode>) -> FighterIntent {
        let action = if keys.pressed(self.left) {
            Action::Walk(Facing::Left)
        } else if keys.pressed(self.crouch) {
            Action::Crouch
        } else if keys.pressed(self.right) {
            Action::Walk(Facing::Right)
        } else if keys.pressed(self.attack) {
            Action::Attack
        } else if keys.pressed(self.fireball) {
            Action::Fireball
        } else if keys.pressed(self.defend) {
            Action::Defend
        } else {
            Action::Idle
        };

        FighterIntent {
            action,
            jump: keys.pressed(self.jump),
        }
    }

    /// Key and role pairs, in the order the help screen lists them.
    pub fn bindings(&self) -> [(KeyCode, &'static str); 7] {
        [
            (self.jump, "Jump"),
            (self.left, "Left"),
            (self.crouch, "Crouch"),
            (self.right, "Right"),
            (self.attack, "Sword Attack"),
            (self.fireball, "Fireball"),
            (self.defend, "Defend"),
        ]
    }
}

/// Display name for the keys the duel binds.
pub fn key_label(key: KeyCode) -> &'static str {
    match key {
        KeyCode::KeyA => "A",
        KeyCode::KeyD => "D",
        KeyCode::KeyS => "S",
        KeyCode::KeyW => "W",
        KeyCode::KeyG => "G",
        KeyCode::KeyH => "H",
        KeyCode::KeyJ => "J",
        KeyCode::ArrowLeft => "LEFT",
        KeyCode::ArrowRight => "RIGHT",
        KeyCode::ArrowDown => "DOWN",
        KeyCode::ArrowUp => "UP",
        KeyCode::Comma => "COMMA",
        KeyCode::Period => "PERIOD",
        KeyCode::Slash => "SLASH",
        _ => "?",
    }
}

/// Both players' layouts, indexed by player.
#[derive(Resource, Debug, Clone)]
pub struct ControlBindings(pub [ControlSet; 2]);

impl Default for ControlBindings {
    fn default() -> Self {
        Self([ControlSet::player_one(), ControlSet::player_two()])
    }
}
