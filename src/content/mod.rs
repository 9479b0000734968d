//! Content domain: duel tuning and the level grid, loaded once at startup.

mod data;
mod level;
mod loader;


pub use data::{
    ArenaDef, CombatDef, DuelTuning, FighterDef, MatchRulesDef, PhysicsDef, ProjectileDef,
};
pub use level::{LevelLayout, PLATFORM_CELL};
pub use loader::{
    ContentLoadError, TUNING_PATH, load_level, load_tuning, load_tuning_or_default, parse_tuning,
};

use bevy::prelude::*;

/// Installs the tuning resource, the fixed tick rate, and the level grid.
pub struct ContentPlugin {
    pub tuning: DuelTuning,
}

impl ContentPlugin {
    pub fn new(tuning: DuelTuning) -> Self {
        Self { tuning }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.tuning.clone())
            .insert_resource(Time::<Fixed>::from_hz(self.tuning.rules.tick_hz))
            .init_resource::<LevelLayout>()
            .add_systems(Startup, load_level_layout);
    }
}

fn load_level_layout(
    tuning: Res<DuelTuning>,
    mut layout: ResMut<LevelLayout>,
    mut exit: MessageWriter<AppExit>,
) {
    match load_level(&tuning) {
        Ok(loaded) => {
            info!(
                "Loaded level {}: {} platforms on a {}x{} grid",
                tuning.arena.level_path,
                loaded.platforms.len(),
                loaded.columns,
                loaded.rows
            );
            *layout = loaded;
        }
        Err(e) => {
            error!("{}", e);
            exit.write(AppExit::error());
        }
    }
}
