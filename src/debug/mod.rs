//! Debug overlay for inspecting a running match.
//!
//! F3 toggles a text panel with each fighter's combat state, animation
//! counter, flags, and health.

use bevy::prelude::*;

use crate::combat::{Fighter, HealthBar, PlayerId};
use crate::core::AppState;
use crate::duel::Duel;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_info: bool,
}

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, toggle_debug_info)
            .add_systems(
                Update,
                update_debug_info_overlay.run_if(in_state(AppState::Match)),
            )
            .add_systems(OnExit(AppState::Match), cleanup_debug_info_overlay);
    }
}

fn toggle_debug_info(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
        info!("Debug overlay: {}", debug_state.show_info);
    }
}

/// One overlay line for a fighter.
pub fn describe_fighter(fighter: &Fighter, health: &HealthBar) -> String {
    format!(
        "P{} {:?} n={} dmg={} def={} dead={} pos=({:.0}, {:.0}) v=({:.1}, {:.1}) hp={}/{}",
        fighter.id.number(),
        fighter.state(),
        fighter.counter(),
        fighter.can_damage(),
        fighter.is_defending(),
        fighter.is_dead(),
        fighter.body.center_x,
        fighter.body.bottom,
        fighter.body.vx,
        fighter.body.vy,
        health.health(),
        health.max(),
    )
}

fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    duel: Option<Res<Duel>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let (Some(duel), Ok(mut text)) = (duel, overlay_query.single_mut()) else {
        return;
    };
    let mut lines: Vec<String> = PlayerId::BOTH
        .into_iter()
        .map(|player| describe_fighter(duel.fighter(player), duel.health(player)))
        .collect();
    lines.push(format!(
        "tick={} fireballs={} end={:?}",
        duel.ticks(),
        duel.projectiles().len(),
        duel.outcome().end_ticks()
    ));
    **text = lines.join("\n");
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.7, 1.0, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(8.0),
            bottom: Val::Px(8.0),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
        ZIndex(300),
    ));
}

fn cleanup_debug_info_overlay(
    mut commands: Commands,
    query: Query<Entity, With<DebugInfoOverlay>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
