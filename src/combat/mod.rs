//! Combat domain: fighter state machine, projectiles, health, and hit arbitration.

mod arbitration;
mod events;
mod fighter;
mod health;
mod intent;
mod projectile;
mod resolver;


pub use arbitration::{Hit, HitKind, arbitrate};
pub use events::{FighterDefeatedEvent, SoundCue, SoundCueEvent};
pub use fighter::{CombatState, Fighter, PlayerId};
pub use health::{BarAnchor, HEALTH_BAR_THICKNESS, HealthBar};
pub use intent::{Action, FighterIntent};
pub use projectile::{Projectile, ProjectileSlots};

use bevy::prelude::*;

/// Registers the messages the duel simulation emits.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SoundCueEvent>()
            .add_message::<FighterDefeatedEvent>();
    }
}
