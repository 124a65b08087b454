use glam::{UVec2, Vec2};
use viewport::{
    LifecycleEvent, OrbitController, OrbitSettings, SurfaceRect, SurfaceSize, ViewToggles,
    ViewportPhase, ViewportSurface,
};

#[test]
fn resize_updates_aspect_and_output_together() {
    let mut surface = ViewportSurface::new(SurfaceSize::new(800.0, 600.0));
    assert_eq!(surface.output_size, UVec2::new(800, 600));

    assert!(surface.resize(SurfaceSize::new(400.0, 300.0)));
    assert!((surface.camera_aspect - 400.0 / 300.0).abs() < 1e-6);
    assert_eq!(surface.output_size, UVec2::new(400, 300));
}

#[test]
fn resize_ignores_unchanged_and_degenerate_sizes() {
    let mut surface = ViewportSurface::new(SurfaceSize::new(800.0, 600.0));
    assert!(!surface.resize(SurfaceSize::new(800.0, 600.0)));
    assert!(!surface.resize(SurfaceSize::new(0.0, 600.0)));
    assert!(!surface.resize(SurfaceSize::new(f32::NAN, 600.0)));
    assert_eq!(surface.size, SurfaceSize::new(800.0, 600.0));
}

#[test]
fn controller_follows_surface_aspect() {
    let mut controller = OrbitController::new(OrbitSettings::default(), SurfaceSize::new(800.0, 600.0));
    controller.set_surface(SurfaceSize::new(400.0, 300.0));
    assert!((controller.aspect() - 4.0 / 3.0).abs() < 1e-6);

    controller.set_surface(SurfaceSize::new(1000.0, 250.0));
    assert!((controller.aspect() - 4.0).abs() < 1e-6);

    controller.set_surface(SurfaceSize::default());
    assert!((controller.aspect() - 4.0).abs() < 1e-6);
}

#[test]
fn surface_rect_contains_is_strict() {
    let rect = SurfaceRect {
        origin: Vec2::new(100.0, 40.0),
        size: SurfaceSize::new(200.0, 100.0),
    };
    assert!(rect.contains(Vec2::new(150.0, 60.0)));
    assert!(!rect.contains(Vec2::new(100.0, 60.0)));
    assert!(!rect.contains(Vec2::new(50.0, 60.0)));
    assert!(!rect.contains(Vec2::new(150.0, 140.0)));
}

#[test]
fn toggling_twice_restores_state() {
    let original = ViewToggles::default();
    assert!(original.show_water);
    assert!(!original.show_wireframe);

    let mut toggles = original;
    toggles.toggle_wireframe();
    assert!(toggles.show_wireframe);
    toggles.toggle_wireframe();
    assert_eq!(toggles, original);

    toggles.toggle_water();
    assert!(!toggles.show_water);
    toggles.toggle_water();
    assert_eq!(toggles, original);

    toggles.set_show_water(false);
    toggles.set_show_wireframe(true);
    assert_eq!(
        toggles,
        ViewToggles {
            show_water: false,
            show_wireframe: true
        }
    );
}

#[test]
fn lifecycle_starts_only_on_a_real_surface() {
    let phase = ViewportPhase::default();
    assert_eq!(phase, ViewportPhase::Uninitialized);

    assert_eq!(
        phase.advance(LifecycleEvent::SurfaceMissing),
        ViewportPhase::Uninitialized
    );
    assert_eq!(
        phase.advance(LifecycleEvent::SurfaceReady(SurfaceSize::new(0.0, 0.0))),
        ViewportPhase::Uninitialized
    );
    assert_eq!(
        phase.advance(LifecycleEvent::SurfaceReady(SurfaceSize::new(800.0, 600.0))),
        ViewportPhase::Running
    );
}

#[test]
fn disposed_is_terminal() {
    let running = ViewportPhase::Running;
    assert_eq!(
        running.advance(LifecycleEvent::SurfaceReady(SurfaceSize::new(800.0, 600.0))),
        ViewportPhase::Running
    );

    let disposed = running.advance(LifecycleEvent::Teardown);
    assert_eq!(disposed, ViewportPhase::Disposed);
    assert_eq!(
        disposed.advance(LifecycleEvent::SurfaceReady(SurfaceSize::new(800.0, 600.0))),
        ViewportPhase::Disposed
    );
    assert_eq!(
        ViewportPhase::Uninitialized.advance(LifecycleEvent::Teardown),
        ViewportPhase::Disposed
    );
}
