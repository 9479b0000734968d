//! Combat domain: health bars.

use crate::combat::PlayerId;
use crate::content::DuelTuning;
use crate::movement::Aabb;

/// Thickness of the drawn bar in pixels.
pub const HEALTH_BAR_THICKNESS: f32 = 10.0;

/// Which side of its anchor a bar grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarAnchor {
    /// Right edge pinned to the anchor; the bar shrinks toward it.
    Right,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HealthBar {
    pub owner: PlayerId,
    pub anchor: BarAnchor,
    pub anchor_x: f32,
    pub top: f32,
    health: i32,
    max: i32,
    dead: bool,
}

impl HealthBar {
    pub fn new(owner: PlayerId, max: i32, anchor: BarAnchor, anchor_x: f32, top: f32) -> Self {
        Self {
            owner,
            anchor,
            anchor_x,
            top,
            health: max,
            max,
            dead: false,
        }
    }

    /// Player one's bar hangs left of its anchor, player two's right of it,
    /// so the bars meet in the middle.
    pub fn for_player(owner: PlayerId, tuning: &DuelTuning) -> Self {
        let anchor = match owner {
            PlayerId::One => BarAnchor::Right,
            PlayerId::Two => BarAnchor::Left,
        };
        let anchor_x = tuning.arena.width * tuning.rules.health_bar_anchors[owner.index()];
        Self::new(
            owner,
            tuning.rules.max_health,
            anchor,
            anchor_x,
            tuning.rules.health_bar_top,
        )
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Subtract `amount`. Returns true on the call that empties the bar.
    /// A dead bar ignores further damage.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.dead {
            return false;
        }
        self.health -= amount;
        if self.health <= 0 {
            self.health = 0;
            self.dead = true;
            return true;
        }
        false
    }

    /// Drawn rectangle: one pixel of width per point of health.
    pub fn fill_rect(&self) -> Aabb {
        let width = self.health as f32;
        let left = match self.anchor {
            BarAnchor::Right => self.anchor_x - width,
            BarAnchor::Left => self.anchor_x,
        };
        Aabb::new(left, self.top, width, HEALTH_BAR_THICKNESS)
    }
}
