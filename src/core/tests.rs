//! Core domain: tests for menu navigation and help text.

use bevy::prelude::*;

use super::ui::instructions::control_lines;
use super::ui::menu_shortcut;
use super::*;
use crate::duel::ControlSet;

#[test]
fn test_menu_actions_target_screens() {
    assert_eq!(MenuAction::Play.target_state(), AppState::Match);
    assert_eq!(MenuAction::Instructions.target_state(), AppState::Instructions);
    assert_eq!(MenuAction::Back.target_state(), AppState::Intro);
}

#[test]
fn test_shortcuts_depend_on_screen() {
    assert_eq!(menu_shortcut(AppState::Intro, KeyCode::Enter), Some(MenuAction::Play));
    assert_eq!(
        menu_shortcut(AppState::Intro, KeyCode::KeyI),
        Some(MenuAction::Instructions)
    );
    assert_eq!(
        menu_shortcut(AppState::Instructions, KeyCode::Backspace),
        Some(MenuAction::Back)
    );
    assert_eq!(menu_shortcut(AppState::Instructions, KeyCode::KeyI), None);
    assert_eq!(menu_shortcut(AppState::Match, KeyCode::Enter), None);
}

#[test]
fn test_help_lists_player_two_keys() {
    let lines = control_lines(&ControlSet::player_two());

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "UP        Jump");
    assert_eq!(lines[4], "COMMA     Sword Attack");
    assert_eq!(lines[6], "SLASH     Defend");
}

#[test]
fn test_default_state_is_intro() {
    assert_eq!(AppState::default(), AppState::Intro);
    assert_eq!(screen_title(AppState::Match), "Duel Arena - Fight!");
}
