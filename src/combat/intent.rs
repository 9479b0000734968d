//! Combat domain: per-tick intents derived from held keys.

use crate::movement::Facing;

/// The single exclusive action a fighter requests this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    Walk(Facing),
    Crouch,
    Attack,
    Fireball,
    Defend,
    /// Nothing held: stop and stand.
    #[default]
    Idle,
}

/// Action plus the independent jump request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FighterIntent {
    pub action: Action,
    pub jump: bool,
}

impl FighterIntent {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            jump: false,
        }
    }

    pub fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }
}
