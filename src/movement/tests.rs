//! Movement domain: tests for gravity, landing, and arena clamping.

use super::{Aabb, ArenaBounds, ArenaEdge, Body, Facing, jump, resting_platform, step_body};
use crate::content::PhysicsDef;

fn arena() -> ArenaBounds {
    ArenaBounds::new(920.0, 520.0)
}

fn floor() -> Vec<Aabb> {
    (0..31)
        .map(|col| Aabb::new(col as f32 * 30.0, 480.0, 30.0, 1.0))
        .collect()
}

fn standing_body(center_x: f32) -> Body {
    let mut body = Body::new(center_x, 480.0, 40.0, 64.0);
    step_body(&mut body, &floor(), &arena(), &PhysicsDef::default());
    body
}

#[test]
fn test_gravity_accumulates_without_terminal_velocity() {
    let physics = PhysicsDef::default();
    let mut body = Body::new(100.0, 64.0, 40.0, 64.0);

    for _ in 0..200 {
        step_body(&mut body, &[], &arena(), &physics);
    }

    assert_eq!(body.vy, 100.0);
    assert!(!body.grounded);
}

#[test]
fn test_falling_body_lands_on_platform_top() {
    let physics = PhysicsDef::default();
    let platforms = floor();
    let mut body = Body::new(100.0, 64.0, 40.0, 64.0);

    let mut ticks = 0;
    while !body.grounded {
        step_body(&mut body, &platforms, &arena(), &physics);
        ticks += 1;
        assert!(ticks < 200, "body never landed");
    }

    assert_eq!(body.bottom, 480.0);
    assert_eq!(body.vy, 0.0);
}

#[test]
fn test_standing_body_stays_put() {
    let physics = PhysicsDef::default();
    let platforms = floor();
    let mut body = standing_body(100.0);

    for _ in 0..10 {
        step_body(&mut body, &platforms, &arena(), &physics);
        assert!(body.grounded);
        assert_eq!(body.bottom, 480.0);
    }
}

#[test]
fn test_rising_body_passes_through_platform() {
    let physics = PhysicsDef::default();
    let ledge = vec![Aabb::new(80.0, 400.0, 60.0, 30.0)];
    let mut body = Body::new(100.0, 420.0, 40.0, 64.0);
    body.vy = -8.0;

    step_body(&mut body, &ledge, &arena(), &physics);

    assert!(!body.grounded);
    assert_eq!(body.vy, -7.5);
    assert_eq!(body.bottom, 412.5);
}

#[test]
fn test_first_platform_in_layout_order_wins() {
    let upper = Aabb::new(80.0, 440.0, 30.0, 30.0);
    let lower = Aabb::new(110.0, 450.0, 30.0, 30.0);
    let body = Body::new(110.0, 455.0, 40.0, 64.0);

    let found = resting_platform(&body, &[upper, lower]).copied();
    assert_eq!(found, Some(upper));

    let found = resting_platform(&body, &[lower, upper]).copied();
    assert_eq!(found, Some(lower));
}

#[test]
fn test_jump_requires_ground() {
    let physics = PhysicsDef::default();
    let mut body = standing_body(100.0);

    assert!(jump(&mut body, &physics));
    assert!(!body.grounded);
    assert_eq!(body.vy, -10.0);

    assert!(!jump(&mut body, &physics));
    assert_eq!(body.vy, -10.0);
}

#[test]
fn test_jump_leaves_the_ground_next_step() {
    let physics = PhysicsDef::default();
    let platforms = floor();
    let mut body = standing_body(100.0);

    jump(&mut body, &physics);
    step_body(&mut body, &platforms, &arena(), &physics);

    assert_eq!(body.vy, -9.5);
    assert_eq!(body.bottom, 470.5);
    assert!(!body.grounded);
}

#[test]
fn test_left_wall_clamps_and_stops() {
    let physics = PhysicsDef::default();
    let mut body = standing_body(22.0);
    body.vx = -6.0;

    let edge = step_body(&mut body, &floor(), &arena(), &physics);

    assert_eq!(edge, Some(ArenaEdge::Left));
    assert_eq!(body.left(), 0.0);
    assert_eq!(body.vx, 0.0);
}

#[test]
fn test_right_wall_clamps_and_stops() {
    let physics = PhysicsDef::default();
    let mut body = standing_body(900.0);
    body.vx = 25.0;

    let edge = step_body(&mut body, &floor(), &arena(), &physics);

    assert_eq!(edge, Some(ArenaEdge::Right));
    assert_eq!(body.right(), 920.0);
    assert_eq!(body.vx, 0.0);
}

#[test]
fn test_moving_away_from_wall_is_not_clamped() {
    let physics = PhysicsDef::default();
    let mut body = standing_body(20.0);
    body.vx = 6.0;

    let edge = step_body(&mut body, &floor(), &arena(), &physics);

    assert_eq!(edge, None);
    assert_eq!(body.center_x, 26.0);
}

#[test]
fn test_leading_edge_follows_facing() {
    let body = Body::new(100.0, 480.0, 40.0, 64.0);
    assert_eq!(body.leading_edge(Facing::Right), 120.0);
    assert_eq!(body.leading_edge(Facing::Left), 80.0);
}

#[test]
fn test_aabb_touching_edges_do_not_overlap() {
    let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
    let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
    let c = Aabb::new(9.5, 9.5, 10.0, 10.0);

    assert!(!a.overlaps(&b));
    assert!(a.overlaps(&c));
}

#[test]
fn test_fully_outside_arena() {
    let arena = arena();
    assert!(arena.fully_outside_horizontally(&Aabb::new(-30.0, 0.0, 30.0, 20.0)));
    assert!(!arena.fully_outside_horizontally(&Aabb::new(-29.0, 0.0, 30.0, 20.0)));
    assert!(arena.fully_outside_horizontally(&Aabb::new(920.0, 0.0, 30.0, 20.0)));
    assert!(!arena.fully_outside_horizontally(&Aabb::new(919.0, 0.0, 30.0, 20.0)));
}
