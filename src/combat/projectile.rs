//! Combat domain: fireballs and the per-owner projectile slots.

use bevy::prelude::*;

use crate::combat::PlayerId;
use crate::content::ProjectileDef;
use crate::movement::{Aabb, ArenaBounds, Facing};

/// An accelerating fireball travelling along its owner's facing.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub owner: PlayerId,
    pub direction: Facing,
    pub rect: Aabb,
    pub speed: f32,
    pub frame_counter: u32,
}

impl Projectile {
    /// New projectile whose trailing edge sits on `leading_edge` and whose
    /// vertical centre is `center_y`.
    pub fn launch(
        owner: PlayerId,
        direction: Facing,
        leading_edge: f32,
        center_y: f32,
        def: &ProjectileDef,
    ) -> Self {
        let left = match direction {
            Facing::Right => leading_edge,
            Facing::Left => leading_edge - def.width,
        };
        Self {
            owner,
            direction,
            rect: Aabb::new(left, center_y - def.height / 2.0, def.width, def.height),
            speed: def.initial_speed,
            frame_counter: 0,
        }
    }

    /// Accelerate, advance the frame counter, and move one tick.
    pub fn advance(&mut self, def: &ProjectileDef) {
        self.speed += def.acceleration;

        self.frame_counter += 1;
        if self.frame_counter >= def.wrap_at {
            self.frame_counter = def.wrap_to;
        }

        self.rect.left += self.direction.sign() * self.speed;
    }

    pub fn image_index(&self, def: &ProjectileDef) -> usize {
        (self.frame_counter / def.ticks_per_image.max(1)) as usize
    }

    pub fn has_left(&self, arena: &ArenaBounds) -> bool {
        arena.fully_outside_horizontally(&self.rect)
    }
}

/// At most one live projectile per player, indexed by owner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectileSlots {
    slots: [Option<Projectile>; 2],
}

impl ProjectileSlots {
    pub fn is_live(&self, owner: PlayerId) -> bool {
        self.slots[owner.index()].is_some()
    }

    pub fn get(&self, owner: PlayerId) -> Option<&Projectile> {
        self.slots[owner.index()].as_ref()
    }

    /// Store `projectile` in its owner's slot. Refused if the slot is taken.
    pub fn launch(&mut self, projectile: Projectile) -> bool {
        let slot = &mut self.slots[projectile.owner.index()];
        if slot.is_some() {
            return false;
        }
        debug!(
            "Player {} launched a fireball at x={}",
            projectile.owner.number(),
            projectile.rect.left
        );
        *slot = Some(projectile);
        true
    }

    /// Move every live projectile, then drop those that left the arena.
    /// Returns the owners whose projectile expired.
    pub fn advance(&mut self, def: &ProjectileDef, arena: &ArenaBounds) -> Vec<PlayerId> {
        let mut expired = Vec::new();
        for slot in &mut self.slots {
            let Some(projectile) = slot else {
                continue;
            };
            projectile.advance(def);
            if projectile.has_left(arena) {
                debug!("Player {} fireball left the arena", projectile.owner.number());
                expired.push(projectile.owner);
                *slot = None;
            }
        }
        expired
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.slots.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
