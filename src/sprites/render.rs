//! Sprite spawning and per-frame sync from the duel simulation.
//!
//! The simulation works in arena pixels with y pointing down; sprites live in
//! bevy world space centred on the window.

use bevy::prelude::*;

use super::SpriteRegistry;
use crate::combat::PlayerId;
use crate::content::{ArenaDef, DuelTuning, LevelLayout};
use crate::core::AppState;
use crate::duel::Duel;
use crate::movement::{Aabb, Facing};

const BACKGROUND_Z: f32 = -10.0;
const PLATFORM_Z: f32 = 0.0;
const FIGHTER_Z: f32 = 1.0;
const PROJECTILE_Z: f32 = 2.0;

#[derive(Component)]
pub struct BackgroundSprite;

#[derive(Component)]
pub struct PlatformSprite;

#[derive(Component)]
pub struct FighterSprite(pub PlayerId);

#[derive(Component)]
pub struct ProjectileSprite(pub PlayerId);

/// Convert an arena-pixel point to world space.
pub fn arena_to_world(x: f32, y: f32, arena: &ArenaDef) -> Vec2 {
    Vec2::new(x - arena.width / 2.0, arena.height / 2.0 - y)
}

/// World-space centre of an arena rectangle at depth `z`.
pub fn rect_translation(rect: &Aabb, arena: &ArenaDef, z: f32) -> Vec3 {
    arena_to_world(rect.center_x(), rect.center_y(), arena).extend(z)
}

fn sized_sprite(image: Option<Handle<Image>>, fallback: Color, size: Vec2) -> Sprite {
    match image {
        Some(image) => Sprite {
            image,
            custom_size: Some(size),
            ..default()
        },
        None => Sprite::from_color(fallback, size),
    }
}

/// Point `sprite` at `image`, or paint it `fallback` when there is none.
fn apply_image(sprite: &mut Sprite, image: Option<Handle<Image>>, fallback: Color) {
    match image {
        Some(image) => {
            sprite.image = image;
            sprite.color = Color::WHITE;
        }
        None => {
            sprite.image = Handle::default();
            sprite.color = fallback;
        }
    }
}

pub(crate) fn spawn_background(
    mut commands: Commands,
    registry: Res<SpriteRegistry>,
    tuning: Res<DuelTuning>,
) {
    let size = Vec2::new(tuning.arena.width, tuning.arena.height);
    commands.spawn((
        BackgroundSprite,
        sized_sprite(
            registry.background.clone(),
            Color::srgb(0.08, 0.05, 0.07),
            size,
        ),
        Transform::from_xyz(0.0, 0.0, BACKGROUND_Z),
    ));
}

pub(crate) fn spawn_arena_sprites(
    mut commands: Commands,
    registry: Res<SpriteRegistry>,
    layout: Res<LevelLayout>,
    tuning: Res<DuelTuning>,
) {
    for platform in &layout.platforms {
        // Drawn as a full grid cell; the collision box is only the top edge.
        let tile = Aabb::new(
            platform.left,
            platform.top,
            platform.width,
            tuning.arena.cell_size,
        );
        commands.spawn((
            PlatformSprite,
            sized_sprite(
                registry.platform.clone(),
                registry.platform_color,
                Vec2::new(tile.width, tile.height),
            ),
            Transform::from_translation(rect_translation(&tile, &tuning.arena, PLATFORM_Z)),
            DespawnOnExit(AppState::Match),
        ));
    }

    let size = Vec2::new(tuning.fighter.width, tuning.fighter.height);
    for player in PlayerId::BOTH {
        commands.spawn((
            FighterSprite(player),
            sized_sprite(None, registry.fighter_color(player), size),
            Transform::from_xyz(0.0, 0.0, FIGHTER_Z),
            DespawnOnExit(AppState::Match),
        ));
    }

    debug!("Spawned {} platform sprites", layout.platforms.len());
}

pub(crate) fn sync_fighter_sprites(
    duel: Option<Res<Duel>>,
    registry: Res<SpriteRegistry>,
    tuning: Res<DuelTuning>,
    mut query: Query<(&FighterSprite, &mut Sprite, &mut Transform)>,
) {
    let Some(duel) = duel else {
        return;
    };

    for (marker, mut sprite, mut transform) in &mut query {
        let fighter = &duel.fighters()[marker.0.index()];
        let frame = fighter.frame();

        transform.translation = rect_translation(&fighter.rect(), &tuning.arena, FIGHTER_Z);
        sprite.flip_x = frame.facing == Facing::Left;
        apply_image(
            &mut sprite,
            registry.fighter_image(fighter.id, frame.kind, frame.index),
            registry.fighter_color(fighter.id),
        );
    }
}

/// Keep one sprite per live fireball: spawn on launch, despawn on expiry.
pub(crate) fn sync_projectile_sprites(
    mut commands: Commands,
    duel: Option<Res<Duel>>,
    registry: Res<SpriteRegistry>,
    tuning: Res<DuelTuning>,
    mut query: Query<(Entity, &ProjectileSprite, &mut Sprite, &mut Transform)>,
) {
    let Some(duel) = duel else {
        return;
    };

    let mut drawn = [false; 2];
    for (entity, marker, mut sprite, mut transform) in &mut query {
        let Some(projectile) = duel.projectiles().get(marker.0) else {
            commands.entity(entity).despawn();
            continue;
        };
        drawn[marker.0.index()] = true;

        transform.translation = rect_translation(&projectile.rect, &tuning.arena, PROJECTILE_Z);
        sprite.flip_x = projectile.direction == Facing::Left;
        apply_image(
            &mut sprite,
            registry.projectile_image(
                projectile.owner,
                projectile.image_index(&tuning.projectile),
            ),
            registry.projectile_color(projectile.owner),
        );
    }

    for projectile in duel.projectiles().iter() {
        if drawn[projectile.owner.index()] {
            continue;
        }
        let size = Vec2::new(projectile.rect.width, projectile.rect.height);
        let mut sprite = sized_sprite(
            registry.projectile_image(
                projectile.owner,
                projectile.image_index(&tuning.projectile),
            ),
            registry.projectile_color(projectile.owner),
            size,
        );
        sprite.flip_x = projectile.direction == Facing::Left;
        commands.spawn((
            ProjectileSprite(projectile.owner),
            sprite,
            Transform::from_translation(rect_translation(
                &projectile.rect,
                &tuning.arena,
                PROJECTILE_Z,
            )),
            DespawnOnExit(AppState::Match),
        ));
    }
}
