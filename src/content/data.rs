//! Content domain: tuning definitions deserialized from `assets/data/duel.ron`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Every gameplay constant of a duel. Missing fields fall back to defaults.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DuelTuning {
    pub arena: ArenaDef,
    pub physics: PhysicsDef,
    pub fighter: FighterDef,
    pub combat: CombatDef,
    pub projectile: ProjectileDef,
    pub rules: MatchRulesDef,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArenaDef {
    pub width: f32,
    pub height: f32,
    /// Side length of one level grid cell in pixels.
    pub cell_size: f32,
    pub platform_width: f32,
    /// Collision thickness; fighters only stand on a platform's top edge.
    pub platform_height: f32,
    /// Level grid file, relative to the working directory.
    pub level_path: String,
}

impl Default for ArenaDef {
    fn default() -> Self {
        Self {
            width: 920.0,
            height: 520.0,
            cell_size: 30.0,
            platform_width: 30.0,
            platform_height: 1.0,
            level_path: "assets/levels/arena.txt".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsDef {
    /// Added to vertical velocity every tick (y grows downward).
    pub gravity: f32,
    pub jump_impulse: f32,
}

impl Default for PhysicsDef {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_impulse: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FighterDef {
    pub width: f32,
    pub height: f32,
    pub walk_speed: f32,
    pub lunge_speed: f32,
    /// Spawn centre X as a fraction of arena width, per player.
    pub spawn_fractions: [f32; 2],
}

impl Default for FighterDef {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 64.0,
            walk_speed: 6.0,
            lunge_speed: 25.0,
            spawn_fractions: [0.2, 0.8],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CombatDef {
    pub strike_damage: i32,
    pub blocked_strike_damage: i32,
    pub fireball_damage: i32,
    /// First attack counter value that may open the hit window.
    pub hit_window_start: u32,
    pub hit_window_period: u32,
    /// Counter phase within each period from which the window is open.
    pub hit_window_phase: u32,
}

impl Default for CombatDef {
    fn default() -> Self {
        Self {
            strike_damage: 10,
            blocked_strike_damage: 2,
            fireball_damage: 2,
            hit_window_start: 12,
            hit_window_period: 4,
            hit_window_phase: 3,
        }
    }
}

impl CombatDef {
    pub fn hit_window_open(&self, counter: u32) -> bool {
        counter >= self.hit_window_start
            && counter % self.hit_window_period.max(1) >= self.hit_window_phase
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectileDef {
    pub width: f32,
    pub height: f32,
    pub initial_speed: f32,
    pub acceleration: f32,
    /// Frame counter value that triggers the wrap.
    pub wrap_at: u32,
    pub wrap_to: u32,
    pub ticks_per_image: u32,
}

impl Default for ProjectileDef {
    fn default() -> Self {
        Self {
            width: 30.0,
            height: 20.0,
            initial_speed: 0.35,
            acceleration: 0.35,
            wrap_at: 50,
            wrap_to: 30,
            ticks_per_image: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchRulesDef {
    pub tick_hz: f64,
    pub max_health: i32,
    /// Ticks between the first defeat and the return to the intro screen.
    pub end_delay_ticks: u32,
    /// Health bar anchors as fractions of arena width, per player.
    pub health_bar_anchors: [f32; 2],
    pub health_bar_top: f32,
}

impl Default for MatchRulesDef {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            max_health: 200,
            end_delay_ticks: 300,
            health_bar_anchors: [0.4, 0.6],
            health_bar_top: 30.0,
        }
    }
}
