//! Movement domain: gravity integration, platform resting, and arena clamping.

use bevy::prelude::*;

use crate::content::PhysicsDef;
use crate::movement::{Aabb, ArenaBounds, ArenaEdge, Body};

/// Instant upward impulse; only takes effect on the ground.
pub fn jump(body: &mut Body, physics: &PhysicsDef) -> bool {
    if !body.grounded {
        return false;
    }
    body.grounded = false;
    body.vy -= physics.jump_impulse;
    true
}

/// First platform in layout order the body rests on.
///
/// Layout order is row-major, so this is also the topmost row, but within a
/// row there is no ordering by penetration depth.
pub fn resting_platform<'a>(body: &Body, platforms: &'a [Aabb]) -> Option<&'a Aabb> {
    platforms.iter().find(|platform| body.rests_on(platform))
}

/// Advance one tick: gravity, rest check, translation, arena clamp.
///
/// The rest check runs before translation, so this tick's displacement is
/// resolved against next tick's check.
pub fn step_body(
    body: &mut Body,
    platforms: &[Aabb],
    arena: &ArenaBounds,
    physics: &PhysicsDef,
) -> Option<ArenaEdge> {
    body.vy += physics.gravity;

    match resting_platform(body, platforms) {
        Some(platform) if body.vy >= 0.0 => {
            if !body.grounded {
                debug!("Landed at y={}", platform.top);
            }
            body.bottom = platform.top;
            body.vy = 0.0;
            body.grounded = true;
        }
        Some(_) => {}
        None => body.grounded = false,
    }

    body.center_x += body.vx;
    body.bottom += body.vy;

    clamp_to_arena(body, arena)
}

/// Stops a body pushing into either side wall.
pub fn clamp_to_arena(body: &mut Body, arena: &ArenaBounds) -> Option<ArenaEdge> {
    if body.left() <= 0.0 && body.vx < 0.0 {
        body.set_left(0.0);
        body.vx = 0.0;
        return Some(ArenaEdge::Left);
    }
    if body.right() >= arena.width && body.vx > 0.0 {
        body.set_right(arena.width);
        body.vx = 0.0;
        return Some(ArenaEdge::Right);
    }
    None
}
