//! Animation counters and frame selection.
//!
//! The counter here is the single measure of how far a fighter is into its
//! current state; combat reads it raw to gate hit windows.

use serde::{Deserialize, Serialize};

use crate::movement::Facing;

/// Animations a fighter can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum AnimationKind {
    Idle,
    Sprint,
    Jump,
    Crouch,
    Defend,
    Attack,
    Dying,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 7] = [
        AnimationKind::Idle,
        AnimationKind::Sprint,
        AnimationKind::Jump,
        AnimationKind::Crouch,
        AnimationKind::Defend,
        AnimationKind::Attack,
        AnimationKind::Dying,
    ];

    /// Counter cycle driving this animation.
    pub const fn cycle(self) -> AnimationCycle {
        match self {
            AnimationKind::Idle => AnimationCycle::new(120, Some(30)),
            AnimationKind::Sprint => AnimationCycle::new(1, None),
            AnimationKind::Jump => AnimationCycle::new(8, None),
            AnimationKind::Crouch => AnimationCycle::new(60, Some(30)),
            AnimationKind::Defend => AnimationCycle::new(12, None),
            AnimationKind::Attack => AnimationCycle::new(32, Some(4)),
            AnimationKind::Dying => AnimationCycle::new(100, Some(20)),
        }
    }

    /// File stem used by the sprite manifest.
    pub fn file_stem(self) -> &'static str {
        match self {
            AnimationKind::Idle => "idle",
            AnimationKind::Sprint => "sprint",
            AnimationKind::Jump => "jump",
            AnimationKind::Crouch => "crouch",
            AnimationKind::Defend => "defend",
            AnimationKind::Attack => "attack",
            AnimationKind::Dying => "dying",
        }
    }
}

/// Length of a counter cycle and how many counts each image is held for.
/// `None` means the image index is the raw counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationCycle {
    pub total_frames: u32,
    pub frames_per_image: Option<u32>,
}

impl AnimationCycle {
    pub const fn new(total_frames: u32, frames_per_image: Option<u32>) -> Self {
        Self {
            total_frames,
            frames_per_image,
        }
    }

    /// Last counter value before the cycle wraps.
    pub const fn last_count(&self) -> u32 {
        self.total_frames.saturating_sub(1)
    }

    pub fn image_index(&self, counter: u32) -> usize {
        match self.frames_per_image {
            Some(per_image) if per_image > 0 => (counter / per_image) as usize,
            _ => counter as usize,
        }
    }

    pub fn image_count(&self) -> usize {
        self.image_index(self.last_count()) + 1
    }
}

/// Image to display for a fighter this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteFrame {
    pub kind: AnimationKind,
    pub facing: Facing,
    pub index: usize,
}

/// Per-entity animation counter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationController {
    current: Option<AnimationKind>,
    counter: u32,
}

impl AnimationController {
    /// Request `kind` for this tick and advance the counter.
    ///
    /// Switching kinds resets the counter to 0 before advancing, so the first
    /// tick of a new animation reports counter 1.
    pub fn play(&mut self, kind: AnimationKind, facing: Facing) -> SpriteFrame {
        if self.current != Some(kind) {
            self.counter = 0;
        }

        let cycle = kind.cycle();
        if self.counter >= cycle.last_count() {
            self.counter = 0;
        } else {
            self.counter += 1;
        }
        self.current = Some(kind);

        SpriteFrame {
            kind,
            facing,
            index: cycle.image_index(self.counter),
        }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn current(&self) -> Option<AnimationKind> {
        self.current
    }

    /// True once `kind` is playing and its counter has reached the end of the cycle.
    pub fn reached_end(&self, kind: AnimationKind) -> bool {
        self.current == Some(kind) && self.counter >= kind.cycle().last_count()
    }
}
