use bevy::camera::visibility::RenderLayers;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::PrimaryEguiContext;
use content::ImpactIntro;
use ui::UiInputCaptureRes;
use viewport::{HostSurface, OrbitController, OrbitSettings, ViewportOwned};

/// Pixel-unit wheel deltas (touchpads) per zoom step.
const PIXELS_PER_WHEEL_STEP: f32 = 100.0;
/// World units of camera shake per point of intro shake.
const SHAKE_WORLD_PER_POINT: f32 = 0.05;

const FOG_COLOR: Color = Color::srgb(0x0f as f32 / 255.0, 0x17 as f32 / 255.0, 0x2a as f32 / 255.0);
const FOG_DENSITY: f32 = 0.005;

#[derive(Component)]
pub struct CraterCamera;

/// The overlay camera egui draws with. It renders no world geometry and
/// never clears, so the crater view underneath survives.
pub fn setup_ui_camera(mut commands: Commands) {
    commands.spawn((
        PrimaryEguiContext,
        Camera2d,
        RenderLayers::none(),
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
    ));
}

pub fn spawn_crater_camera(
    commands: &mut Commands,
    controller: &OrbitController,
    settings: &OrbitSettings,
) -> Entity {
    commands
        .spawn((
            CraterCamera,
            ViewportOwned,
            Camera3d::default(),
            Camera {
                order: 0,
                ..default()
            },
            Projection::Perspective(PerspectiveProjection {
                fov: settings.fov_y_degrees.to_radians(),
                near: settings.near,
                far: settings.far,
                aspect_ratio: controller.aspect(),
                ..default()
            }),
            DistanceFog {
                color: FOG_COLOR,
                falloff: FogFalloff::ExponentialSquared {
                    density: FOG_DENSITY,
                },
                ..default()
            },
            controller.transform(),
        ))
        .id()
}

/// Left drag orbits, right drag pans, the wheel zooms. Drags must start
/// inside the crater view but keep going if the cursor leaves it.
pub fn gather_orbit_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    host: Res<HostSurface>,
    ui_capture: Res<UiInputCaptureRes>,
    mut controller: ResMut<OrbitController>,
    mut drag: Local<Option<MouseButton>>,
) {
    let motion: Vec2 = mouse_motion.read().map(|ev| ev.delta).sum();
    let wheel: f32 = mouse_wheel
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / PIXELS_PER_WHEEL_STEP,
        })
        .sum();

    let cursor_in_view = windows
        .single()
        .ok()
        .and_then(|w| w.cursor_position())
        .zip(host.rect)
        .is_some_and(|(cursor, rect)| rect.contains(cursor));
    let pointer_free = cursor_in_view && !ui_capture.pointer;

    if let Some(button) = *drag {
        if !mouse_buttons.pressed(button) {
            *drag = None;
        }
    }
    if drag.is_none() && pointer_free {
        *drag = [MouseButton::Left, MouseButton::Right]
            .into_iter()
            .find(|b| mouse_buttons.just_pressed(*b));
    }
    controller.set_interacting(drag.is_some());

    match *drag {
        Some(MouseButton::Left) => controller.push_rotate(motion),
        Some(_) => controller.push_pan(motion),
        None => {}
    }

    if pointer_free && wheel != 0.0 {
        controller.push_zoom(wheel);
    }
}

pub fn tick_orbit(time: Res<Time>, mut controller: ResMut<OrbitController>) {
    controller.tick(time.delta_secs());
}

pub fn apply_orbit_camera(
    controller: Res<OrbitController>,
    intro: Res<ImpactIntro>,
    mut q_cam: Query<&mut Transform, With<CraterCamera>>,
) {
    let Ok(mut transform) = q_cam.single_mut() else {
        return;
    };

    let mut next = controller.transform();
    let shake = intro.shake_offset();
    if shake != Vec2::ZERO {
        // Screen y grows downwards.
        next.translation += (next.right() * shake.x - next.up() * shake.y) * SHAKE_WORLD_PER_POINT;
    }
    *transform = next;
}
