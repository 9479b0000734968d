//! Core domain: help screen listing both control sets.

use bevy::prelude::*;

use super::{MenuAction, TEXT_COLOR, TITLE_COLOR, spawn_menu_button};
use crate::combat::PlayerId;
use crate::duel::{ControlBindings, ControlSet, key_label};

/// Marker for instructions screen UI root
#[derive(Component, Debug)]
pub struct InstructionsScreenUI;

/// Help lines for one player, key name padded to a column.
pub fn control_lines(controls: &ControlSet) -> Vec<String> {
    controls
        .bindings()
        .iter()
        .map(|(key, role)| format!("{:<10}{}", key_label(*key), role))
        .collect()
}

pub(crate) fn spawn_instructions_screen(mut commands: Commands, bindings: Res<ControlBindings>) {
    commands
        .spawn((
            InstructionsScreenUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                padding: UiRect::vertical(Val::Px(20.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.02, 0.02, 0.05, 0.6)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Help"),
                TextFont {
                    font_size: 40.0,
                    ..default()
                },
                TextColor(TITLE_COLOR),
            ));

            parent
                .spawn(Node {
                    width: Val::Percent(100.0),
                    flex_direction: FlexDirection::Row,
                    justify_content: JustifyContent::SpaceEvenly,
                    ..default()
                })
                .with_children(|columns| {
                    for player in PlayerId::BOTH {
                        let controls = &bindings.0[player.index()];
                        columns
                            .spawn(Node {
                                flex_direction: FlexDirection::Column,
                                row_gap: Val::Px(6.0),
                                ..default()
                            })
                            .with_children(|column| {
                                column.spawn((
                                    Text::new(format!("Player {} Controls", player.number())),
                                    TextFont {
                                        font_size: 28.0,
                                        ..default()
                                    },
                                    TextColor(TEXT_COLOR),
                                ));
                                for line in control_lines(controls) {
                                    column.spawn((
                                        Text::new(line),
                                        TextFont {
                                            font_size: 20.0,
                                            ..default()
                                        },
                                        TextColor(TEXT_COLOR),
                                    ));
                                }
                            });
                    }
                });

            spawn_menu_button(parent, MenuAction::Back);
        });
}

pub(crate) fn cleanup_instructions_screen(
    mut commands: Commands,
    query: Query<Entity, With<InstructionsScreenUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
