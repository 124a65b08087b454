//! Drives `ViewportPhase`: start the viewer once the host surface exists,
//! dispose of it when the window asks to close.

use bevy::prelude::*;
use bevy::window::WindowCloseRequested;
use terrain::{CraterConfig, CraterEntities};
use viewport::{
    HostSurface, LifecycleEvent, OrbitController, OrbitSettings, ViewportOwned, ViewportPhase,
    ViewportSurface,
};

use super::camera::spawn_crater_camera;

pub struct LifecyclePlugin;

impl Plugin for LifecyclePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ViewportPhase>()
            .add_systems(
                Update,
                (
                    detect_surface.run_if(in_state(ViewportPhase::Uninitialized)),
                    detect_teardown,
                ),
            )
            .add_systems(OnEnter(ViewportPhase::Running), start_viewport)
            .add_systems(OnEnter(ViewportPhase::Disposed), teardown_viewport);
    }
}

fn request_transition(
    phase: &State<ViewportPhase>,
    next: &mut NextState<ViewportPhase>,
    event: LifecycleEvent,
) {
    let current = *phase.get();
    let target = current.advance(event);
    if target != current {
        info!("viewport {current:?} -> {target:?}");
        next.set(target);
    }
}

pub fn detect_surface(
    host: Res<HostSurface>,
    phase: Res<State<ViewportPhase>>,
    mut next: ResMut<NextState<ViewportPhase>>,
) {
    let event = match host.rect {
        Some(rect) => LifecycleEvent::SurfaceReady(rect.size),
        None => {
            debug!("crater view has no host surface yet");
            LifecycleEvent::SurfaceMissing
        }
    };
    request_transition(&phase, &mut next, event);
}

pub fn detect_teardown(
    mut close_requests: MessageReader<WindowCloseRequested>,
    phase: Res<State<ViewportPhase>>,
    mut next: ResMut<NextState<ViewportPhase>>,
) {
    if close_requests.read().count() == 0 {
        return;
    }
    request_transition(&phase, &mut next, LifecycleEvent::Teardown);
}

pub fn start_viewport(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    crater_config: Res<CraterConfig>,
    orbit_settings: Res<OrbitSettings>,
    host: Res<HostSurface>,
) {
    let Some(rect) = host.rect else {
        warn!("crater view entered Running without a host surface");
        return;
    };

    let entities =
        terrain::render::spawn_crater(&mut commands, &mut meshes, &mut materials, &crater_config);
    commands.entity(entities.terrain).insert(ViewportOwned);
    commands.entity(entities.water).insert(ViewportOwned);

    let controller = OrbitController::new(orbit_settings.clone(), rect.size);
    spawn_crater_camera(&mut commands, &controller, &orbit_settings);

    commands.insert_resource(ViewportSurface::new(rect.size));
    commands.insert_resource(controller);
    commands.insert_resource(entities);

    info!(
        "crater view started at {}x{}",
        rect.size.width, rect.size.height
    );
}

/// Releases everything the running viewer owns, then closes the windows so
/// the app can exit.
pub fn teardown_viewport(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    entities: Option<Res<CraterEntities>>,
    owned: Query<Entity, With<ViewportOwned>>,
    windows: Query<Entity, With<Window>>,
) {
    if let Some(entities) = entities {
        terrain::render::despawn_crater(&mut commands, &mut meshes, &mut materials, &entities);
    }
    for entity in &owned {
        commands.entity(entity).try_despawn();
    }

    commands.remove_resource::<CraterEntities>();
    commands.remove_resource::<OrbitController>();
    commands.remove_resource::<ViewportSurface>();

    for window in &windows {
        commands.entity(window).despawn();
    }

    info!("crater view disposed");
}

#[cfg(test)]
mod tests {
    use bevy::state::app::StatesPlugin;
    use viewport::{SurfaceRect, SurfaceSize};

    use super::*;

    fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .add_message::<WindowCloseRequested>()
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<HostSurface>()
            .insert_resource(CraterConfig {
                segments: 16,
                ..CraterConfig::default()
            })
            .insert_resource(OrbitSettings::default())
            .add_plugins(LifecyclePlugin);
        app
    }

    fn phase(app: &App) -> ViewportPhase {
        *app.world().resource::<State<ViewportPhase>>().get()
    }

    fn owned_count(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<Entity, With<ViewportOwned>>()
            .iter(app.world())
            .count()
    }

    fn provide_surface(app: &mut App) {
        app.world_mut().resource_mut::<HostSurface>().rect = Some(SurfaceRect {
            origin: Vec2::new(480.0, 48.0),
            size: SurfaceSize::new(800.0, 600.0),
        });
    }

    #[test]
    fn stays_uninitialized_without_surface() {
        let mut app = headless_app();
        for _ in 0..3 {
            app.update();
        }
        assert_eq!(phase(&app), ViewportPhase::Uninitialized);
        assert_eq!(owned_count(&mut app), 0);
        assert!(app.world().get_resource::<OrbitController>().is_none());
    }

    #[test]
    fn starts_once_surface_appears() {
        let mut app = headless_app();
        app.update();
        provide_surface(&mut app);
        app.update();
        app.update();

        assert_eq!(phase(&app), ViewportPhase::Running);
        // Terrain, water and camera.
        assert_eq!(owned_count(&mut app), 3);
        assert!(app.world().contains_resource::<CraterEntities>());
        let surface = app.world().resource::<ViewportSurface>();
        assert!((surface.camera_aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn teardown_releases_everything_and_is_final() {
        let mut app = headless_app();
        provide_surface(&mut app);
        app.update();
        app.update();
        assert_eq!(phase(&app), ViewportPhase::Running);

        app.world_mut().write_message(WindowCloseRequested {
            window: Entity::PLACEHOLDER,
        });
        app.update();
        app.update();

        assert_eq!(phase(&app), ViewportPhase::Disposed);
        assert_eq!(owned_count(&mut app), 0);
        assert!(app.world().get_resource::<OrbitController>().is_none());
        assert!(app.world().get_resource::<CraterEntities>().is_none());
        assert!(app.world().resource::<Assets<Mesh>>().is_empty());

        provide_surface(&mut app);
        app.update();
        assert_eq!(phase(&app), ViewportPhase::Disposed);
    }
}
