// Host-side tests for pure pointer geometry and scroll math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

const EASE: f32 = 0.15;

#[test]
fn easing_step_shrinks_distance_without_overshoot() {
    let target = Vec2::new(100.0, 50.0);
    let mut current = Vec2::ZERO;

    let mut previous_distance = current.distance(target);
    for _ in 0..50 {
        current = ease_toward(current, target, EASE);
        let distance = current.distance(target);
        assert!(
            distance < previous_distance,
            "distance must strictly decrease: {} -> {}",
            previous_distance,
            distance
        );
        // Never past the target on either axis
        assert!(current.x <= target.x);
        assert!(current.y <= target.y);
        previous_distance = distance;
    }
}

#[test]
fn easing_converges_on_stationary_target() {
    let target = Vec2::new(-640.0, 360.0);
    let mut current = Vec2::ZERO;
    for _ in 0..200 {
        current = ease_toward(current, target, EASE);
    }
    assert!(current.distance(target) < 0.5);
}

#[test]
fn easing_is_stable_at_the_target() {
    let target = Vec2::new(12.0, 34.0);
    let next = ease_toward(target, target, EASE);
    assert_eq!(next, target);
}

#[test]
fn easing_first_step_is_the_fixed_fraction() {
    let current = Vec2::ZERO;
    let target = Vec2::new(100.0, 0.0);
    let next = ease_toward(current, target, EASE);
    assert!((next.x - 15.0).abs() < 1e-5);
    assert_eq!(next.y, 0.0);
}

#[test]
fn rect_center_is_the_midpoint() {
    let center = rect_center(10.0, 20.0, 30.0, 40.0);
    assert_eq!(center, Vec2::new(25.0, 40.0));
}

#[test]
fn within_radius_is_strict() {
    let center = Vec2::ZERO;
    assert!(within_radius(Vec2::new(149.9, 0.0), center, 150.0));
    assert!(!within_radius(Vec2::new(150.0, 0.0), center, 150.0));
    assert!(!within_radius(Vec2::new(150.1, 0.0), center, 150.0));

    // Same predicate at the touch radius
    assert!(within_radius(Vec2::new(60.0, 60.0), center, 100.0));
    assert!(!within_radius(Vec2::new(100.0, 0.0), center, 100.0));
}

#[test]
fn within_radius_uses_euclidean_distance() {
    let center = Vec2::new(100.0, 100.0);
    // 3-4-5 triangle scaled by 20: distance is exactly 100
    assert!(!within_radius(Vec2::new(160.0, 180.0), center, 100.0));
    assert!(within_radius(Vec2::new(160.0, 179.0), center, 100.0));
}

#[test]
fn anchor_scroll_target_subtracts_the_header() {
    // Element top 500 in the viewport, not yet scrolled
    assert_eq!(anchor_scroll_top(500.0, 0.0, 80.0), 420.0);
    // Same element after scrolling 400px: viewport top is 100
    assert_eq!(anchor_scroll_top(100.0, 400.0, 80.0), 420.0);
}

#[test]
fn anchor_scroll_target_can_be_negative_near_the_top() {
    // Targets above the header offset clamp on the browser side, not here
    assert_eq!(anchor_scroll_top(30.0, 0.0, 80.0), -50.0);
}

#[test]
fn hero_transform_scales_with_scroll_offset() {
    let (translate_y, scale) = hero_transform(100.0, 800.0, 0.3, 0.0002).unwrap();
    assert!((translate_y - 30.0).abs() < 1e-9);
    assert!((scale - 0.98).abs() < 1e-9);

    let (translate_y, scale) = hero_transform(0.0, 800.0, 0.3, 0.0002).unwrap();
    assert_eq!(translate_y, 0.0);
    assert_eq!(scale, 1.0);
}

#[test]
fn hero_transform_freezes_past_one_viewport() {
    // At or past one viewport height nothing is written; the previous
    // transform stays in place.
    assert_eq!(hero_transform(800.0, 800.0, 0.3, 0.0002), None);
    assert_eq!(hero_transform(5000.0, 800.0, 0.3, 0.0002), None);
    assert!(hero_transform(799.9, 800.0, 0.3, 0.0002).is_some());
}
