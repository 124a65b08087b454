use bevy::camera::Viewport;
use bevy::pbr::wireframe::Wireframe;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use content::{ImpactIntro, ScenarioLab, SiteContent};
use terrain::{CraterEntities, WaterPlane};
use viewport::{AnnotationScreens, HostSurface, OrbitController, ViewToggles, ViewportSurface};

use super::camera::CraterCamera;

/// Follows the host rectangle: resizes the controller when the size changes
/// and keeps the camera viewport on the rectangle in physical pixels.
pub fn sync_surface(
    host: Res<HostSurface>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut surface: ResMut<ViewportSurface>,
    mut controller: ResMut<OrbitController>,
    mut q_cam: Query<(&mut Camera, &mut Projection), With<CraterCamera>>,
) {
    let Some(rect) = host.rect else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((mut camera, mut projection)) = q_cam.single_mut() else {
        return;
    };

    if surface.resize(rect.size) {
        controller.set_surface(surface.size);
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = surface.camera_aspect;
        }
        debug!(
            "crater view resized to {}x{}",
            surface.output_size.x, surface.output_size.y
        );
    }

    let window_size = window.physical_size();
    if window_size.x == 0 || window_size.y == 0 {
        return;
    }
    let scale = window.scale_factor();
    let physical_position = (rect.origin * scale)
        .round()
        .max(Vec2::ZERO)
        .as_uvec2()
        .min(window_size - UVec2::ONE);
    let physical_size = (Vec2::new(rect.size.width, rect.size.height) * scale)
        .round()
        .as_uvec2()
        .min(window_size - physical_position)
        .max(UVec2::ONE);

    let unchanged = camera.viewport.as_ref().is_some_and(|v| {
        v.physical_position == physical_position && v.physical_size == physical_size
    });
    if !unchanged {
        camera.viewport = Some(Viewport {
            physical_position,
            physical_size,
            ..default()
        });
    }
}

pub fn apply_view_toggles(
    mut commands: Commands,
    toggles: Res<ViewToggles>,
    entities: Res<CraterEntities>,
    mut q_water: Query<&mut Visibility, With<WaterPlane>>,
) {
    if !toggles.is_changed() && !entities.is_added() {
        return;
    }

    if let Ok(mut visibility) = q_water.single_mut() {
        *visibility = if toggles.show_water {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }

    if toggles.show_wireframe {
        commands.entity(entities.terrain).insert(Wireframe);
    } else {
        commands.entity(entities.terrain).remove::<Wireframe>();
    }
}

/// Projects the labels through the camera as rendered, shake included.
pub fn refresh_annotations(
    controller: Res<OrbitController>,
    surface: Res<ViewportSurface>,
    q_cam: Query<&Transform, With<CraterCamera>>,
    mut screens: ResMut<AnnotationScreens>,
) {
    let view_proj = match q_cam.single() {
        Ok(camera) => controller.view_projection_from(camera),
        Err(_) => controller.view_projection(),
    };
    screens.refresh(view_proj, surface.size);
}

pub fn tick_story_timers(
    time: Res<Time>,
    content: Option<Res<SiteContent>>,
    mut lab: ResMut<ScenarioLab>,
    mut intro: ResMut<ImpactIntro>,
) {
    let dt = time.delta_secs();
    intro.tick(dt);
    if let Some(content) = content {
        lab.tick(dt, &content.scenarios);
    }
}
