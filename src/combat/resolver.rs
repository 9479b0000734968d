//! Combat domain: the per-tick fighter state machine.
//!
//! A tick runs in two halves. `apply_intent` records what the player asked
//! for (state request, walk velocity, jump, fireball). `advance` then steps
//! physics and resolves the requested state against the fighter's physical
//! situation, falling back to Movement when the request is not valid.

use bevy::prelude::*;

use crate::combat::{Action, CombatState, Fighter, FighterIntent, Projectile, SoundCue};
use crate::content::{CombatDef, DuelTuning, FighterDef};
use crate::movement::{self, Aabb, ArenaBounds};
use crate::sprites::{AnimationKind, SpriteFrame};

impl Fighter {
    /// Apply this tick's intent. Returns a projectile when a fireball is
    /// launched; `projectile_live` blocks a second one for the same owner.
    pub fn apply_intent(
        &mut self,
        intent: FighterIntent,
        projectile_live: bool,
        tuning: &DuelTuning,
    ) -> Option<Projectile> {
        if self.dead {
            return None;
        }

        let mut launched = None;
        match intent.action {
            Action::Walk(facing) => {
                self.body.vx = facing.sign() * tuning.fighter.walk_speed;
                self.facing = facing;
                self.state = CombatState::Movement;
            }
            Action::Crouch => self.state = CombatState::Crouch,
            Action::Attack => self.state = CombatState::Attack,
            Action::Defend => self.state = CombatState::Defend,
            Action::Fireball => {
                if projectile_live {
                    self.stop();
                } else {
                    launched = Some(Projectile::launch(
                        self.id,
                        self.facing,
                        self.body.leading_edge(self.facing),
                        self.body.center_y(),
                        &tuning.projectile,
                    ));
                }
            }
            Action::Idle => self.stop(),
        }

        if intent.jump {
            movement::jump(&mut self.body, &tuning.physics);
        }

        launched
    }

    /// Step physics, then settle the combat state and pick this tick's frame.
    pub fn advance(&mut self, platforms: &[Aabb], arena: &ArenaBounds, tuning: &DuelTuning) {
        let clamped = movement::step_body(&mut self.body, platforms, arena, &tuning.physics);
        if clamped.is_some() && !self.dead {
            self.state = CombatState::Movement;
        }

        if self.dead {
            self.body.vx = 0.0;
            self.play_dying();
            return;
        }

        self.sound_trigger = None;
        let settled = match self.state {
            CombatState::Attack => self.resolve_attack(&tuning.combat, &tuning.fighter),
            CombatState::Defend => self.resolve_defend(),
            CombatState::Crouch => self.resolve_crouch(),
            CombatState::Movement | CombatState::Dying => None,
        };
        let frame = settled.unwrap_or_else(|| self.locomote());
        self.frame = frame;
    }

    /// Switch to the terminal dying state. Idempotent.
    pub fn mark_dead(&mut self) {
        if self.dead {
            return;
        }
        info!("Player {} is down", self.id.number());
        self.dead = true;
        self.state = CombatState::Dying;
        self.can_damage = false;
        self.defending = false;
        self.sound_trigger = None;
    }

    /// Consume the one-shot sound request raised by the last `advance`.
    pub fn take_sound_trigger(&mut self) -> Option<SoundCue> {
        self.sound_trigger.take()
    }

    fn stop(&mut self) {
        self.body.vx = 0.0;
        self.state = CombatState::Movement;
    }

    fn resolve_attack(&mut self, combat: &CombatDef, fighter: &FighterDef) -> Option<SpriteFrame> {
        self.defending = false;

        // No air attacks.
        if !self.body.grounded {
            self.can_damage = false;
            self.stop();
            return None;
        }

        let frame = self.anim.play(AnimationKind::Attack, self.facing);
        self.body.vx = 0.0;

        if combat.hit_window_open(self.anim.counter()) {
            self.can_damage = true;
            self.sound_trigger = Some(SoundCue::Slash);
            self.body.vx = self.facing.sign() * fighter.lunge_speed;
        } else {
            self.can_damage = false;
        }
        Some(frame)
    }

    fn resolve_defend(&mut self) -> Option<SpriteFrame> {
        self.can_damage = false;

        if !self.body.grounded || !self.body.is_stationary() {
            self.defending = false;
            self.stop();
            return None;
        }

        self.defending = true;
        let frame = self.anim.play(AnimationKind::Defend, self.facing);
        self.body.vx = 0.0;
        if self.anim.counter() % 2 == 0 {
            self.sound_trigger = Some(SoundCue::Block);
        }
        Some(frame)
    }

    fn resolve_crouch(&mut self) -> Option<SpriteFrame> {
        self.can_damage = false;
        self.defending = false;

        if !self.body.grounded || !self.body.is_stationary() {
            self.stop();
            return None;
        }
        Some(self.anim.play(AnimationKind::Crouch, self.facing))
    }

    fn locomote(&mut self) -> SpriteFrame {
        self.can_damage = false;
        self.defending = false;
        self.state = CombatState::Movement;

        let kind = match (self.body.grounded, self.body.is_stationary()) {
            (true, true) => AnimationKind::Idle,
            (true, false) => AnimationKind::Sprint,
            (false, _) => AnimationKind::Jump,
        };
        self.anim.play(kind, self.facing)
    }

    /// Dying plays once from the start and then holds its last pose.
    fn play_dying(&mut self) {
        if self.anim.reached_end(AnimationKind::Dying) {
            return;
        }
        self.frame = self.anim.play(AnimationKind::Dying, self.facing);
        if self.anim.reached_end(AnimationKind::Dying) {
            debug!("Player {} dying animation finished", self.id.number());
        }
    }
}
