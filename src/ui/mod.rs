//! UI domain: in-match HUD elements and the winner banner.

mod banner;
mod hud_health;

#[cfg(test)]
mod tests;

pub use banner::{WinnerBanner, winner_text};
pub use hud_health::HealthBarFill;

use bevy::prelude::*;

use crate::core::AppState;
use crate::ui::banner::{cleanup_winner_banners, spawn_winner_banners};
use crate::ui::hud_health::{cleanup_health_bars, spawn_health_bars, update_health_bars};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Match), spawn_health_bars)
            .add_systems(
                OnExit(AppState::Match),
                (cleanup_health_bars, cleanup_winner_banners),
            )
            .add_systems(
                Update,
                (update_health_bars, spawn_winner_banners).run_if(in_state(AppState::Match)),
            );
    }
}
