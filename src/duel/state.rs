//! Duel domain: the match simulation advanced one fixed tick at a time.

use bevy::prelude::*;

use super::outcome::{MatchOutcome, MatchSignal};
use crate::combat::{
    Fighter, FighterIntent, HealthBar, Hit, PlayerId, ProjectileSlots, SoundCue, arbitrate,
};
use crate::content::{DuelTuning, LevelLayout};
use crate::movement::{Aabb, ArenaBounds};

/// Everything that happened during one tick, for the app layer to react to.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub cues: Vec<(PlayerId, SoundCue)>,
    pub hits: Vec<Hit>,
    pub defeated: Vec<PlayerId>,
    pub signal: MatchSignal,
}

/// One match: both fighters, their fireballs, their health, and the level.
#[derive(Resource, Debug, Clone)]
pub struct Duel {
    fighters: [Fighter; 2],
    projectiles: ProjectileSlots,
    health: [HealthBar; 2],
    platforms: Vec<Aabb>,
    arena: ArenaBounds,
    tuning: DuelTuning,
    outcome: MatchOutcome,
    ticks: u64,
}

impl Duel {
    pub fn new(layout: &LevelLayout, tuning: &DuelTuning) -> Self {
        Self {
            fighters: PlayerId::BOTH.map(|id| Fighter::spawn(id, tuning)),
            projectiles: ProjectileSlots::default(),
            health: PlayerId::BOTH.map(|id| HealthBar::for_player(id, tuning)),
            platforms: layout.platforms.clone(),
            arena: ArenaBounds::new(tuning.arena.width, tuning.arena.height),
            tuning: tuning.clone(),
            outcome: MatchOutcome::default(),
            ticks: 0,
        }
    }

    /// Run one tick.
    ///
    /// Every fighter is fully resolved before any damage is arbitrated, so
    /// neither player's update can see the other's damage from the same tick.
    pub fn tick(&mut self, intents: [FighterIntent; 2]) -> TickReport {
        self.ticks += 1;
        let mut cues = Vec::new();

        for (fighter, intent) in self.fighters.iter_mut().zip(intents) {
            if self.health[fighter.id.index()].is_dead() {
                fighter.mark_dead();
                continue;
            }
            let live = self.projectiles.is_live(fighter.id);
            if let Some(projectile) = fighter.apply_intent(intent, live, &self.tuning) {
                if self.projectiles.launch(projectile) {
                    cues.push((fighter.id, SoundCue::Fireball));
                }
            }
        }

        for fighter in &mut self.fighters {
            fighter.advance(&self.platforms, &self.arena, &self.tuning);
            if let Some(cue) = fighter.take_sound_trigger() {
                cues.push((fighter.id, cue));
            }
        }

        self.projectiles.advance(&self.tuning.projectile, &self.arena);

        let hits = arbitrate(&self.fighters, &self.projectiles, &self.tuning.combat);
        let defeated = self.resolve_hits(&hits);
        let signal = self
            .outcome
            .update(&self.health, self.tuning.rules.end_delay_ticks);

        TickReport {
            cues,
            hits,
            defeated,
            signal,
        }
    }

    /// Apply hits to health bars. Returns players whose bar emptied.
    pub fn resolve_hits(&mut self, hits: &[Hit]) -> Vec<PlayerId> {
        let mut defeated = Vec::new();
        for hit in hits {
            let bar = &mut self.health[hit.victim.index()];
            if bar.is_dead() {
                continue;
            }
            debug!(
                "Player {} hit player {} ({:?}) for {}",
                hit.attacker.number(),
                hit.victim.number(),
                hit.kind,
                hit.amount
            );
            if bar.take_damage(hit.amount) {
                info!(
                    "Player {} defeated; player {} wins",
                    hit.victim.number(),
                    hit.attacker.number()
                );
                defeated.push(hit.victim);
            }
        }
        defeated
    }

    pub fn fighters(&self) -> &[Fighter; 2] {
        &self.fighters
    }

    pub fn fighter(&self, player: PlayerId) -> &Fighter {
        &self.fighters[player.index()]
    }

    pub fn projectiles(&self) -> &ProjectileSlots {
        &self.projectiles
    }

    pub fn health(&self, player: PlayerId) -> &HealthBar {
        &self.health[player.index()]
    }

    pub fn outcome(&self) -> &MatchOutcome {
        &self.outcome
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[cfg(test)]
    pub(crate) fn fighter_mut(&mut self, player: PlayerId) -> &mut Fighter {
        &mut self.fighters[player.index()]
    }
}
