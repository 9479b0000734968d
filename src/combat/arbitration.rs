//! Combat domain: damage arbitration between fully resolved fighters.

use crate::combat::{Fighter, PlayerId, ProjectileSlots};
use crate::content::CombatDef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Strike,
    BlockedStrike,
    Fireball,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub attacker: PlayerId,
    pub victim: PlayerId,
    pub kind: HitKind,
    pub amount: i32,
}

/// Collect every hit landed this tick.
///
/// Reads only finalized flags and never mutates, so the result does not
/// depend on which fighter was resolved first. Strikes are checked in both
/// directions; fireballs only hurt the non-owner and pass through blocks
/// without being consumed.
pub fn arbitrate(fighters: &[Fighter; 2], projectiles: &ProjectileSlots, combat: &CombatDef) -> Vec<Hit> {
    let mut hits = Vec::new();

    if fighters[0].rect().overlaps(&fighters[1].rect()) {
        for (attacker, victim) in [(&fighters[0], &fighters[1]), (&fighters[1], &fighters[0])] {
            if !attacker.can_damage() {
                continue;
            }
            let (kind, amount) = if victim.is_defending() {
                (HitKind::BlockedStrike, combat.blocked_strike_damage)
            } else {
                (HitKind::Strike, combat.strike_damage)
            };
            hits.push(Hit {
                attacker: attacker.id,
                victim: victim.id,
                kind,
                amount,
            });
        }
    }

    for projectile in projectiles.iter() {
        let victim = &fighters[projectile.owner.other().index()];
        if victim.is_defending() || !projectile.rect.overlaps(&victim.rect()) {
            continue;
        }
        hits.push(Hit {
            attacker: projectile.owner,
            victim: victim.id,
            kind: HitKind::Fireball,
            amount: combat.fireball_damage,
        });
    }

    hits
}
