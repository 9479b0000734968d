//! UI domain: winner announcement shown during the end-of-match delay.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{FighterDefeatedEvent, PlayerId};

/// Marker for a "Player N Wins!" banner
#[derive(Component, Debug)]
pub struct WinnerBanner(pub PlayerId);

pub fn winner_text(winner: PlayerId) -> String {
    format!("Player {} Wins!", winner.number())
}

pub(crate) fn spawn_winner_banners(
    mut commands: Commands,
    mut defeats: MessageReader<FighterDefeatedEvent>,
    existing: Query<&WinnerBanner>,
) {
    let mut shown: Vec<PlayerId> = existing.iter().map(|banner| banner.0).collect();

    for event in defeats.read() {
        let winner = event.player.other();
        if shown.contains(&winner) {
            continue;
        }
        info!("{}", winner_text(winner));

        // A mutual kill stacks the second banner under the first.
        let offset = shown.len() as f32 * 70.0;
        commands.spawn((
            WinnerBanner(winner),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                top: Val::Px(200.0 + offset),
                justify_content: JustifyContent::Center,
                ..default()
            },
            ZIndex(50),
            children![(
                Text::new(winner_text(winner)),
                TextFont {
                    font_size: 60.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.85, 0.3)),
            )],
        ));
        shown.push(winner);
    }
}

pub(crate) fn cleanup_winner_banners(
    mut commands: Commands,
    query: Query<Entity, With<WinnerBanner>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
