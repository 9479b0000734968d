//! Sprites module for frame selection and drawing the duel.
//!
//! This module handles:
//! - Animation counters that double as the combat clock
//! - Loading the sprite manifest from JSON
//! - Spawning and syncing sprites from the simulation

mod animation;
mod manifest;
mod render;


use bevy::prelude::*;

pub use animation::{AnimationController, AnimationCycle, AnimationKind, SpriteFrame};
pub use manifest::{MANIFEST_PATH, SpriteManifest, SpriteRegistry};
pub use render::{
    BackgroundSprite, FighterSprite, PlatformSprite, ProjectileSprite, arena_to_world,
    rect_translation,
};

use crate::core::AppState;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteRegistry>()
            .add_systems(
                Startup,
                (manifest::load_sprite_registry, render::spawn_background).chain(),
            )
            .add_systems(OnEnter(AppState::Match), render::spawn_arena_sprites)
            .add_systems(
                Update,
                (render::sync_fighter_sprites, render::sync_projectile_sprites)
                    .run_if(in_state(AppState::Match)),
            );
    }
}
