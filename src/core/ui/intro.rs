//! Core domain: intro screen UI.

use bevy::prelude::*;

use super::{MenuAction, TEXT_COLOR, TITLE_COLOR, spawn_menu_button};

/// Marker for intro screen UI root
#[derive(Component, Debug)]
pub struct IntroScreenUI;

pub(crate) fn spawn_intro_screen(mut commands: Commands) {
    commands
        .spawn((
            IntroScreenUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                padding: UiRect::vertical(Val::Px(40.0)),
                ..default()
            },
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("-+= DUEL ARENA =+-"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(TITLE_COLOR),
            ));

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    ..default()
                })
                .with_children(|menu| {
                    spawn_menu_button(menu, MenuAction::Play);
                    spawn_menu_button(menu, MenuAction::Instructions);
                    menu.spawn((
                        Text::new("ENTER to fight, I for help, ESC to quit"),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR.with_alpha(0.6)),
                        Node {
                            margin: UiRect::top(Val::Px(12.0)),
                            ..default()
                        },
                    ));
                });
        });
}

pub(crate) fn cleanup_intro_screen(
    mut commands: Commands,
    query: Query<Entity, With<IntroScreenUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
