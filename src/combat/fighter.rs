//! Combat domain: fighter identity, state, and accessors.

use serde::{Deserialize, Serialize};

use crate::combat::SoundCue;
use crate::content::DuelTuning;
use crate::movement::{Aabb, Body, Facing};
use crate::sprites::{AnimationController, AnimationKind, SpriteFrame};

/// Which of the two local players owns something.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Facing at match start: the players face each other.
    pub fn spawn_facing(self) -> Facing {
        match self {
            PlayerId::One => Facing::Right,
            PlayerId::Two => Facing::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CombatState {
    #[default]
    Movement,
    Attack,
    Defend,
    Crouch,
    Dying,
}

/// One player's fighter for the duration of a match.
#[derive(Debug, Clone, PartialEq)]
pub struct Fighter {
    pub id: PlayerId,
    pub body: Body,
    pub facing: Facing,
    pub(crate) state: CombatState,
    pub(crate) anim: AnimationController,
    pub(crate) can_damage: bool,
    pub(crate) defending: bool,
    pub(crate) dead: bool,
    pub(crate) sound_trigger: Option<SoundCue>,
    pub(crate) frame: SpriteFrame,
}

impl Fighter {
    pub fn new(id: PlayerId, center_x: f32, bottom: f32, facing: Facing, tuning: &DuelTuning) -> Self {
        Self {
            id,
            body: Body::new(center_x, bottom, tuning.fighter.width, tuning.fighter.height),
            facing,
            state: CombatState::Movement,
            anim: AnimationController::default(),
            can_damage: false,
            defending: false,
            dead: false,
            sound_trigger: None,
            frame: SpriteFrame {
                kind: AnimationKind::Jump,
                facing,
                index: 0,
            },
        }
    }

    /// Fighter at its match-start spot: top edge at the top of the arena,
    /// centred on its spawn fraction of the arena width.
    pub fn spawn(id: PlayerId, tuning: &DuelTuning) -> Self {
        let center_x = tuning.arena.width * tuning.fighter.spawn_fractions[id.index()];
        Self::new(id, center_x, tuning.fighter.height, id.spawn_facing(), tuning)
    }

    pub fn state(&self) -> CombatState {
        self.state
    }

    pub fn can_damage(&self) -> bool {
        self.can_damage
    }

    pub fn is_defending(&self) -> bool {
        self.defending
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn sound_trigger(&self) -> bool {
        self.sound_trigger.is_some()
    }

    /// Raw animation counter for the current state.
    pub fn counter(&self) -> u32 {
        self.anim.counter()
    }

    pub fn frame(&self) -> SpriteFrame {
        self.frame
    }

    pub fn rect(&self) -> Aabb {
        self.body.rect()
    }

    pub fn is_grounded(&self) -> bool {
        self.body.grounded
    }
}
