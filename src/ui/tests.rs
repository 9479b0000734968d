//! UI domain: tests for winner banners.

use bevy::prelude::*;

use super::banner::spawn_winner_banners;
use super::*;
use crate::combat::{FighterDefeatedEvent, PlayerId};

fn banner_app() -> App {
    let mut app = App::new();
    app.add_message::<FighterDefeatedEvent>()
        .add_systems(Update, spawn_winner_banners);
    app
}

fn banners(app: &mut App) -> Vec<PlayerId> {
    let mut query = app.world_mut().query::<&WinnerBanner>();
    let mut winners: Vec<PlayerId> = query.iter(app.world()).map(|b| b.0).collect();
    winners.sort_by_key(|p| p.index());
    winners
}

#[test]
fn test_winner_text_names_the_survivor() {
    assert_eq!(winner_text(PlayerId::Two), "Player 2 Wins!");
}

#[test]
fn test_defeat_shows_opponent_banner_once() {
    let mut app = banner_app();

    app.world_mut().write_message(FighterDefeatedEvent {
        player: PlayerId::One,
    });
    app.update();
    app.world_mut().write_message(FighterDefeatedEvent {
        player: PlayerId::One,
    });
    app.update();

    assert_eq!(banners(&mut app), vec![PlayerId::Two]);
}

#[test]
fn test_mutual_kill_shows_both_banners() {
    let mut app = banner_app();

    app.world_mut().write_message(FighterDefeatedEvent {
        player: PlayerId::One,
    });
    app.world_mut().write_message(FighterDefeatedEvent {
        player: PlayerId::Two,
    });
    app.update();

    assert_eq!(banners(&mut app), vec![PlayerId::One, PlayerId::Two]);
}
