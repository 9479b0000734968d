//! Core domain: menu screens shared widgets and input handling.

pub(crate) mod instructions;
pub(crate) mod intro;

use bevy::prelude::*;

use crate::core::AppState;

const BUTTON_IDLE: Color = Color::srgb(0.12, 0.12, 0.18);
const BUTTON_HOVER: Color = Color::srgb(0.18, 0.18, 0.25);
const BUTTON_BORDER: Color = Color::srgb(0.45, 0.45, 0.55);
const BUTTON_BORDER_HOVER: Color = Color::srgb(0.7, 0.7, 0.8);
pub(crate) const TEXT_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
pub(crate) const TITLE_COLOR: Color = Color::srgb(0.9, 0.35, 0.2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Instructions,
    Back,
}

impl MenuAction {
    pub fn target_state(self) -> AppState {
        match self {
            MenuAction::Play => AppState::Match,
            MenuAction::Instructions => AppState::Instructions,
            MenuAction::Back => AppState::Intro,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Play => "Play",
            MenuAction::Instructions => "Instructions",
            MenuAction::Back => "Return",
        }
    }
}

/// Clickable menu entry
#[derive(Component, Debug)]
pub struct MenuButton(pub MenuAction);

pub(crate) fn spawn_menu_button(parent: &mut ChildSpawnerCommands, action: MenuAction) {
    parent
        .spawn((
            MenuButton(action),
            Button,
            Node {
                width: Val::Px(240.0),
                height: Val::Px(48.0),
                margin: UiRect::vertical(Val::Px(6.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            BorderColor::all(BUTTON_BORDER),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(action.label()),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
        });
}

pub(crate) fn handle_menu_buttons(
    mut query: Query<
        (
            &MenuButton,
            &Interaction,
            &mut BackgroundColor,
            &mut BorderColor,
        ),
        Changed<Interaction>,
    >,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for (button, interaction, mut bg_color, mut border_color) in query.iter_mut() {
        match *interaction {
            Interaction::Pressed => {
                info!("Menu: {:?}", button.0);
                next_state.set(button.0.target_state());
            }
            Interaction::Hovered => {
                *bg_color = BackgroundColor(BUTTON_HOVER);
                *border_color = BorderColor::all(BUTTON_BORDER_HOVER);
            }
            Interaction::None => {
                *bg_color = BackgroundColor(BUTTON_IDLE);
                *border_color = BorderColor::all(BUTTON_BORDER);
            }
        }
    }
}

/// Keyboard shortcut for a menu screen, if the key maps to one.
pub fn menu_shortcut(state: AppState, key: KeyCode) -> Option<MenuAction> {
    match (state, key) {
        (AppState::Intro, KeyCode::Enter | KeyCode::NumpadEnter) => Some(MenuAction::Play),
        (AppState::Intro, KeyCode::KeyI) => Some(MenuAction::Instructions),
        (AppState::Instructions, KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::Backspace) => {
            Some(MenuAction::Back)
        }
        _ => None,
    }
}

pub(crate) fn handle_menu_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let action = keyboard
        .get_just_pressed()
        .find_map(|key| menu_shortcut(*state.get(), *key));
    if let Some(action) = action {
        info!("Menu shortcut: {:?}", action);
        next_state.set(action.target_state());
    }
}
