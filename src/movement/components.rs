//! Movement domain: bodies, bounding boxes, and facing.
//!
//! All gameplay coordinates are arena pixels with the origin at the top-left
//! corner and y growing downward. Conversion to bevy world space happens in
//! the sprites domain.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Unit sign along the x axis.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Axis-aligned rectangle in arena pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.top + self.height / 2.0
    }

    /// Strict overlap: touching edges do not count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }
}

/// Horizontal extent of the playable arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaBounds {
    pub width: f32,
    pub height: f32,
}

impl ArenaBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True once `rect` lies entirely beyond the left or right edge.
    pub fn fully_outside_horizontally(&self, rect: &Aabb) -> bool {
        rect.right() <= 0.0 || rect.left >= self.width
    }
}

/// Which arena edge a body was clamped against this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaEdge {
    Left,
    Right,
}

/// Kinematic state of a fighter, anchored at bottom-centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub center_x: f32,
    pub bottom: f32,
    pub vx: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,
    pub grounded: bool,
}

impl Body {
    /// New airborne body at rest.
    pub fn new(center_x: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self {
            center_x,
            bottom,
            vx: 0.0,
            vy: 0.0,
            width,
            height,
            grounded: false,
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(
            self.center_x - self.width / 2.0,
            self.bottom - self.height,
            self.width,
            self.height,
        )
    }

    pub fn left(&self) -> f32 {
        self.center_x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center_x + self.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.bottom - self.height
    }

    pub fn center_y(&self) -> f32 {
        self.bottom - self.height / 2.0
    }

    pub fn set_left(&mut self, left: f32) {
        self.center_x = left + self.width / 2.0;
    }

    pub fn set_right(&mut self, right: f32) {
        self.center_x = right - self.width / 2.0;
    }

    /// Edge the fighter leads with when facing `facing`.
    pub fn leading_edge(&self, facing: Facing) -> f32 {
        match facing {
            Facing::Right => self.right(),
            Facing::Left => self.left(),
        }
    }

    pub fn is_stationary(&self) -> bool {
        self.vx == 0.0
    }

    /// Supported by `platform`: horizontal overlap and feet at or below its top
    /// while the head is still above its bottom.
    pub fn rests_on(&self, platform: &Aabb) -> bool {
        self.left() < platform.right()
            && self.right() > platform.left
            && self.bottom >= platform.top
            && self.top() < platform.bottom()
    }
}
