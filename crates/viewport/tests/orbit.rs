use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use viewport::{OrbitController, OrbitSettings, SurfaceSize};

fn still_settings() -> OrbitSettings {
    OrbitSettings {
        auto_rotate: false,
        ..Default::default()
    }
}

fn surface() -> SurfaceSize {
    SurfaceSize::new(800.0, 600.0)
}

#[test]
fn starts_at_oblique_view_of_origin() {
    let controller = OrbitController::new(OrbitSettings::default(), surface());
    let eye = controller.eye();
    assert!((eye - Vec3::new(0.0, 50.0, 110.0)).length() < 1e-3, "{eye:?}");
    assert_eq!(controller.target(), Vec3::ZERO);
}

#[test]
fn input_waits_for_tick() {
    let mut controller = OrbitController::new(still_settings(), surface());
    let before = controller.azimuth();

    controller.push_rotate(Vec2::new(100.0, 0.0));
    assert_eq!(controller.azimuth(), before);
    assert!(!controller.pending().is_empty());

    controller.tick(1.0 / 60.0);
    assert!(controller.pending().is_empty());
    assert!(controller.azimuth() < before);
}

#[test]
fn drag_is_damped_then_converges() {
    let mut controller = OrbitController::new(still_settings(), surface());
    let start = controller.azimuth();
    let full = -TAU * 100.0 / 600.0;

    controller.push_rotate(Vec2::new(100.0, 0.0));
    controller.tick(1.0 / 60.0);
    let first = controller.azimuth() - start;
    assert!((first - full * 0.05).abs() < 1e-4, "first step {first}");

    for _ in 0..900 {
        controller.tick(1.0 / 60.0);
    }
    let total = controller.azimuth() - start;
    assert!((total - full).abs() < 1e-3, "total {total}");
}

#[test]
fn auto_rotates_only_when_idle() {
    let mut controller = OrbitController::new(OrbitSettings::default(), surface());
    let start = controller.azimuth();
    for _ in 0..120 {
        controller.tick(1.0 / 60.0);
    }
    assert!(controller.azimuth() < start);

    let mut held = OrbitController::new(OrbitSettings::default(), surface());
    held.set_interacting(true);
    let start = held.azimuth();
    for _ in 0..120 {
        held.tick(1.0 / 60.0);
    }
    assert_eq!(held.azimuth(), start);
}

#[test]
fn auto_rotation_settles_at_configured_rate() {
    let settings = OrbitSettings::default();
    let rate = settings.auto_rotate_rate();
    assert!((rate - TAU / 120.0).abs() < 1e-6);

    let mut controller = OrbitController::new(settings, surface());
    for _ in 0..1200 {
        controller.tick(1.0 / 60.0);
    }
    let before = controller.azimuth();
    for _ in 0..60 {
        controller.tick(1.0 / 60.0);
    }
    let per_second = before - controller.azimuth();
    assert!((per_second - rate).abs() < rate * 0.02, "{per_second} vs {rate}");
}

#[test]
fn polar_angle_stays_above_ground() {
    let mut controller = OrbitController::new(still_settings(), surface());
    controller.push_rotate(Vec2::new(0.0, -5000.0));
    for _ in 0..600 {
        controller.tick(1.0 / 60.0);
    }
    assert!(controller.polar() <= PI / 2.1 + 1e-5);
    assert!(controller.eye().y > 0.0);

    controller.push_rotate(Vec2::new(0.0, 5000.0));
    for _ in 0..600 {
        controller.tick(1.0 / 60.0);
    }
    assert!(controller.polar() > 0.0);
}

#[test]
fn zoom_is_clamped_to_distance_limits() {
    let mut controller = OrbitController::new(still_settings(), surface());
    let start = controller.distance();

    controller.push_zoom(1.0);
    controller.tick(1.0 / 60.0);
    assert!(controller.distance() < start);

    controller.push_zoom(200.0);
    controller.tick(1.0 / 60.0);
    assert_eq!(controller.distance(), 30.0);

    controller.push_zoom(-400.0);
    controller.tick(1.0 / 60.0);
    assert_eq!(controller.distance(), 250.0);
}

#[test]
fn pan_moves_target_with_drag() {
    let mut controller = OrbitController::new(still_settings(), surface());
    controller.push_pan(Vec2::new(50.0, 0.0));
    for _ in 0..600 {
        controller.tick(1.0 / 60.0);
    }
    let target = controller.target();
    // Camera looks down -Z, so dragging right slides the target toward -X.
    assert!(target.x < -1.0, "{target:?}");
    assert!(target.y.abs() < 1e-3);
}

#[test]
fn zero_dt_changes_nothing() {
    let mut controller = OrbitController::new(OrbitSettings::default(), surface());
    let eye = controller.eye();
    controller.tick(0.0);
    assert_eq!(controller.eye(), eye);
}
