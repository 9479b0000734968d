//! Duel domain: tests for the tick loop, match outcome, and controls.

use bevy::prelude::*;

use super::*;
use crate::combat::{Action, CombatState, FighterIntent, Hit, HitKind, PlayerId, SoundCue};
use crate::content::{ArenaDef, DuelTuning, LevelLayout};
use crate::core::AppState;
use crate::movement::{Aabb, Facing};

fn floor_layout() -> LevelLayout {
    LevelLayout {
        platforms: (0..31)
            .map(|col| Aabb::new(col as f32 * 30.0, 480.0, 30.0, 1.0))
            .collect(),
        rows: 17,
        columns: 31,
        skipped_cells: 0,
    }
}

fn idle() -> [FighterIntent; 2] {
    [FighterIntent::default(); 2]
}

fn both(action: Action) -> [FighterIntent; 2] {
    [FighterIntent::new(action); 2]
}

/// Duel on a flat floor with both fighters landed.
fn settled_duel() -> Duel {
    let mut duel = Duel::new(&floor_layout(), &DuelTuning::default());
    for _ in 0..60 {
        duel.tick(idle());
    }
    for player in PlayerId::BOTH {
        assert!(duel.fighter(player).is_grounded());
        assert_eq!(duel.fighter(player).body.bottom, 480.0);
    }
    duel
}

fn full_hit(attacker: PlayerId) -> Hit {
    Hit {
        attacker,
        victim: attacker.other(),
        kind: HitKind::Strike,
        amount: 10,
    }
}

#[test]
fn test_fighters_spawn_facing_each_other() {
    let duel = Duel::new(&floor_layout(), &DuelTuning::default());
    let one = duel.fighter(PlayerId::One);
    let two = duel.fighter(PlayerId::Two);

    assert_eq!(one.body.center_x, 184.0);
    assert_eq!(one.facing, Facing::Right);
    assert_eq!(one.body.top(), 0.0);
    assert_eq!(two.body.center_x, 736.0);
    assert_eq!(two.facing, Facing::Left);
    assert!(!one.is_grounded());
    assert_eq!(duel.health(PlayerId::One).health(), 200);
}

#[test]
fn test_fighters_land_on_shipped_ledges() {
    let text = include_str!("../../assets/levels/arena.txt");
    let tuning = DuelTuning::default();
    let layout = LevelLayout::parse(text, &ArenaDef::default());
    let mut duel = Duel::new(&layout, &tuning);

    for _ in 0..60 {
        duel.tick(idle());
    }

    for player in PlayerId::BOTH {
        assert!(duel.fighter(player).is_grounded());
        assert_eq!(duel.fighter(player).body.bottom, 390.0);
    }
}

#[test]
fn test_fighter_walks_under_shipped_ledge_on_the_floor() {
    let text = include_str!("../../assets/levels/arena.txt");
    let layout = LevelLayout::parse(text, &ArenaDef::default());
    let mut duel = Duel::new(&layout, &DuelTuning::default());
    {
        let fighter = duel.fighter_mut(PlayerId::One);
        fighter.body.center_x = 60.0;
        fighter.body.bottom = 480.0;
        fighter.body.grounded = true;
    }
    let walk = [
        FighterIntent::new(Action::Walk(Facing::Right)),
        FighterIntent::default(),
    ];

    // From x=60 to x=300, passing under the row-13 ledge at x 120..270.
    for _ in 0..40 {
        duel.tick(walk);
        let fighter = duel.fighter(PlayerId::One);
        assert!(fighter.is_grounded());
        assert_eq!(fighter.body.bottom, 480.0);
    }
    assert_eq!(duel.fighter(PlayerId::One).body.center_x, 300.0);
}

#[test]
fn test_twenty_hits_then_return_to_intro_after_delay() {
    let mut duel = settled_duel();
    for _ in 0..19 {
        let defeated = duel.resolve_hits(&[full_hit(PlayerId::Two)]);
        assert!(defeated.is_empty());
    }
    assert_eq!(duel.health(PlayerId::One).health(), 10);

    // The twentieth hit is a real strike: player two attacks into player one.
    duel.fighter_mut(PlayerId::One).body.center_x = 400.0;
    duel.fighter_mut(PlayerId::Two).body.center_x = 420.0;
    let strike = [FighterIntent::default(), FighterIntent::new(Action::Attack)];
    for _ in 0..14 {
        let report = duel.tick(strike);
        assert!(report.hits.is_empty());
        assert_eq!(report.signal, MatchSignal::Continue);
    }

    let report = duel.tick(strike);
    assert_eq!(report.hits, vec![full_hit(PlayerId::Two)]);
    assert_eq!(report.defeated, vec![PlayerId::One]);
    assert_eq!(report.signal, MatchSignal::Continue);
    assert_eq!(duel.health(PlayerId::One).health(), 0);
    assert!(duel.health(PlayerId::One).is_dead());
    assert_eq!(duel.health(PlayerId::Two).health(), 200);
    assert_eq!(duel.outcome().end_ticks(), Some(1));

    for tick in 2..300 {
        let report = duel.tick(idle());
        assert_eq!(report.signal, MatchSignal::Continue, "tick {}", tick);
    }
    assert_eq!(duel.outcome().winners(), vec![PlayerId::Two]);
    assert_eq!(duel.outcome().end_ticks(), Some(299));
    assert_eq!(duel.fighter(PlayerId::One).state(), CombatState::Dying);

    let report = duel.tick(idle());
    assert_eq!(report.signal, MatchSignal::ReturnToIntro);
    assert_eq!(next_app_state(report.signal), Some(AppState::Intro));
}

#[test]
fn test_damage_to_dead_bar_is_ignored() {
    let mut duel = settled_duel();
    duel.resolve_hits(&[Hit {
        attacker: PlayerId::Two,
        victim: PlayerId::One,
        kind: HitKind::Strike,
        amount: 205,
    }]);

    let defeated = duel.resolve_hits(&[full_hit(PlayerId::Two)]);
    assert!(defeated.is_empty());
    assert_eq!(duel.health(PlayerId::One).health(), 0);
}

#[test]
fn test_dead_fighter_ignores_intents() {
    let mut duel = settled_duel();
    duel.resolve_hits(&[Hit {
        attacker: PlayerId::Two,
        victim: PlayerId::One,
        kind: HitKind::Strike,
        amount: 200,
    }]);
    let x = duel.fighter(PlayerId::One).body.center_x;

    let walk = FighterIntent::new(Action::Walk(Facing::Right)).with_jump();
    for _ in 0..10 {
        duel.tick([walk, FighterIntent::default()]);
    }

    let one = duel.fighter(PlayerId::One);
    assert!(one.is_dead());
    assert_eq!(one.body.center_x, x);
    assert!(one.is_grounded());
    assert_eq!(one.state(), CombatState::Dying);
}

#[test]
fn test_mutual_kill_announces_both() {
    let mut duel = settled_duel();
    duel.resolve_hits(&[
        Hit {
            attacker: PlayerId::Two,
            victim: PlayerId::One,
            kind: HitKind::Strike,
            amount: 200,
        },
        Hit {
            attacker: PlayerId::One,
            victim: PlayerId::Two,
            kind: HitKind::Strike,
            amount: 200,
        },
    ]);

    duel.tick(idle());
    assert_eq!(duel.outcome().winners(), vec![PlayerId::One, PlayerId::Two]);
}

#[test]
fn test_second_fireball_waits_for_the_first() {
    let mut duel = settled_duel();
    let fire = [FighterIntent::new(Action::Fireball), FighterIntent::default()];

    let report = duel.tick(fire);
    assert_eq!(duel.projectiles().len(), 1);
    assert!(report.cues.contains(&(PlayerId::One, SoundCue::Fireball)));

    let report = duel.tick(fire);
    assert_eq!(duel.projectiles().len(), 1);
    assert!(!report.cues.contains(&(PlayerId::One, SoundCue::Fireball)));
    assert!(duel.projectiles().is_live(PlayerId::One));
    assert!(!duel.projectiles().is_live(PlayerId::Two));
}

#[test]
fn test_fireball_crosses_arena_and_hurts_opponent() {
    let mut duel = settled_duel();
    let fire = [FighterIntent::new(Action::Fireball), FighterIntent::default()];
    duel.tick(fire);

    let mut fireball_hits = 0;
    for _ in 0..200 {
        let report = duel.tick(idle());
        fireball_hits += report
            .hits
            .iter()
            .filter(|h| h.kind == HitKind::Fireball && h.victim == PlayerId::Two)
            .count();
        if duel.projectiles().is_empty() {
            break;
        }
    }

    assert!(duel.projectiles().is_empty());
    assert!(fireball_hits > 0);
    assert_eq!(
        duel.health(PlayerId::Two).health(),
        200 - 2 * fireball_hits as i32
    );
    assert_eq!(duel.health(PlayerId::One).health(), 200);
}

#[test]
fn test_overlapping_attacks_damage_both() {
    let mut duel = settled_duel();
    duel.fighter_mut(PlayerId::One).body.center_x = 400.0;
    duel.fighter_mut(PlayerId::Two).body.center_x = 420.0;

    for _ in 0..14 {
        let report = duel.tick(both(Action::Attack));
        assert!(report.hits.is_empty());
    }

    let report = duel.tick(both(Action::Attack));
    assert_eq!(report.hits.len(), 2);
    assert_eq!(duel.health(PlayerId::One).health(), 190);
    assert_eq!(duel.health(PlayerId::Two).health(), 190);
    assert!(report.cues.contains(&(PlayerId::One, SoundCue::Slash)));
    assert!(report.cues.contains(&(PlayerId::Two, SoundCue::Slash)));
}

#[test]
fn test_blocked_strike_costs_two() {
    let mut duel = settled_duel();
    duel.fighter_mut(PlayerId::One).body.center_x = 400.0;
    duel.fighter_mut(PlayerId::Two).body.center_x = 420.0;
    let intents = [
        FighterIntent::new(Action::Attack),
        FighterIntent::new(Action::Defend),
    ];

    for _ in 0..15 {
        duel.tick(intents);
    }

    assert!(duel.fighter(PlayerId::Two).is_defending());
    assert_eq!(duel.health(PlayerId::Two).health(), 198);
    assert_eq!(duel.health(PlayerId::One).health(), 200);
}

#[test]
fn test_defend_never_holds_in_the_air() {
    let mut duel = settled_duel();
    let jump_defend = [
        FighterIntent::new(Action::Defend).with_jump(),
        FighterIntent::default(),
    ];

    let mut airborne_ticks = 0;
    for _ in 0..60 {
        duel.tick(jump_defend);
        let one = duel.fighter(PlayerId::One);
        if !one.is_grounded() {
            airborne_ticks += 1;
            assert!(!one.is_defending());
        }
    }
    assert!(airborne_ticks > 0);
}

#[test]
fn test_flags_exclusive_under_scripted_play() {
    let mut duel = settled_duel();
    let actions = [
        Action::Walk(Facing::Left),
        Action::Walk(Facing::Right),
        Action::Crouch,
        Action::Attack,
        Action::Fireball,
        Action::Defend,
        Action::Idle,
    ];
    let mut seed: u32 = 0x2545_f491;
    let mut next = || {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        seed
    };

    for _ in 0..1200 {
        let mut intents = idle();
        for intent in &mut intents {
            let roll = next();
            intent.action = actions[(roll % actions.len() as u32) as usize];
            intent.jump = roll % 11 == 0;
        }
        duel.tick(intents);

        for player in PlayerId::BOTH {
            let fighter = duel.fighter(player);
            assert!(!(fighter.can_damage() && fighter.is_defending()));
            if fighter.can_damage() {
                assert_eq!(fighter.state(), CombatState::Attack);
            }
            if fighter.is_defending() {
                assert_eq!(fighter.state(), CombatState::Defend);
            }
            let health = duel.health(player).health();
            assert!((0..=200).contains(&health));
            let rect = fighter.rect();
            assert!(rect.left >= 0.0 && rect.right() <= 920.0);
        }
        assert!(duel.projectiles().len() <= 2);
    }
}

fn held(keys: &[KeyCode]) -> ButtonInput<KeyCode> {
    let mut input = ButtonInput::<KeyCode>::default();
    for key in keys {
        input.press(*key);
    }
    input
}

#[test]
fn test_control_precedence() {
    let controls = ControlSet::player_one();
    let action = |keys: &[KeyCode]| controls.intent(&held(keys)).action;

    assert_eq!(action(&[KeyCode::KeyA, KeyCode::KeyD]), Action::Walk(Facing::Left));
    assert_eq!(action(&[KeyCode::KeyS, KeyCode::KeyD]), Action::Crouch);
    assert_eq!(action(&[KeyCode::KeyD, KeyCode::KeyG]), Action::Walk(Facing::Right));
    assert_eq!(action(&[KeyCode::KeyG, KeyCode::KeyH]), Action::Attack);
    assert_eq!(action(&[KeyCode::KeyH, KeyCode::KeyJ]), Action::Fireball);
    assert_eq!(action(&[KeyCode::KeyJ]), Action::Defend);
    assert_eq!(action(&[]), Action::Idle);
    assert_eq!(action(&[KeyCode::ArrowLeft]), Action::Idle);
}

#[test]
fn test_jump_is_independent_of_action() {
    let controls = ControlSet::player_two();
    let intent = controls.intent(&held(&[KeyCode::ArrowUp, KeyCode::Comma]));

    assert_eq!(intent.action, Action::Attack);
    assert!(intent.jump);
    assert!(!controls.intent(&held(&[KeyCode::KeyW])).jump);
}

#[test]
fn test_control_sets_do_not_share_keys() {
    let one = ControlSet::player_one().bindings();
    let two = ControlSet::player_two().bindings();

    for (key, _) in one {
        assert!(two.iter().all(|(other, _)| *other != key));
    }
    let labels: Vec<&str> = one.iter().map(|(key, _)| key_label(*key)).collect();
    assert_eq!(labels, vec!["W", "A", "S", "D", "G", "H", "J"]);
}
