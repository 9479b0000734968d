//! UI domain: the two health bars at the top of the arena.

use bevy::prelude::*;

use crate::combat::{HEALTH_BAR_THICKNESS, PlayerId};
use crate::duel::Duel;

const HEALTH_FILL_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Marker for a player's health bar fill
#[derive(Component, Debug)]
pub struct HealthBarFill(pub PlayerId);

pub(crate) fn spawn_health_bars(mut commands: Commands) {
    for player in PlayerId::BOTH {
        commands.spawn((
            HealthBarFill(player),
            Node {
                position_type: PositionType::Absolute,
                height: Val::Px(HEALTH_BAR_THICKNESS),
                ..default()
            },
            BackgroundColor(HEALTH_FILL_COLOR),
            Visibility::Hidden,
        ));
    }
}

/// Bars are laid out in window pixels, which match arena pixels.
pub(crate) fn update_health_bars(
    duel: Option<Res<Duel>>,
    mut query: Query<(&HealthBarFill, &mut Node, &mut Visibility)>,
) {
    let Some(duel) = duel else {
        return;
    };

    for (fill, mut node, mut visibility) in &mut query {
        let bar = duel.health(fill.0);
        if bar.is_dead() {
            *visibility = Visibility::Hidden;
            continue;
        }

        let rect = bar.fill_rect();
        node.left = Val::Px(rect.left);
        node.top = Val::Px(rect.top);
        node.width = Val::Px(rect.width);
        *visibility = Visibility::Visible;
    }
}

pub(crate) fn cleanup_health_bars(
    mut commands: Commands,
    query: Query<Entity, With<HealthBarFill>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
