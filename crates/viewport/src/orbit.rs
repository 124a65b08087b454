//! Orbit camera with queued input, damping and idle auto-rotation.
//!
//! Input callbacks only append to [`PendingOrbitInput`]. Once per frame
//! [`OrbitController::tick`] folds the queue into the velocity accumulators,
//! adds auto-rotation, then applies a damped fraction of the accumulated
//! motion. The camera is described in spherical coordinates around `target`:
//! azimuth 0 puts the eye on +Z, polar 0 puts it straight above.

use std::f32::consts::{PI, TAU};

use bevy::prelude::*;
use glam::{Mat4, Vec2, Vec3};

use crate::surface::SurfaceSize;

/// Keeps the eye off the pole so `look_at` stays well defined.
const POLAR_EPSILON: f32 = 1e-6;

/// Reference frame rate the damping factor is expressed in.
const REFERENCE_FPS: f32 = 60.0;

/// Wheel zoom factor per step at `zoom_speed = 1`.
const ZOOM_STEP_SCALE: f32 = 0.95;

#[derive(Resource, Clone, Debug)]
pub struct OrbitSettings {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub initial_eye: Vec3,
    pub target: Vec3,
    /// Fraction of the remaining motion applied per 60 Hz frame.
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    pub auto_rotate: bool,
    /// 2.0 is one revolution every 30 seconds.
    pub auto_rotate_speed: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            fov_y_degrees: 55.0,
            near: 0.1,
            far: 1000.0,
            initial_eye: Vec3::new(0.0, 50.0, 110.0),
            target: Vec3::ZERO,
            damping_factor: 0.05,
            min_distance: 30.0,
            max_distance: 250.0,
            min_polar: 0.0,
            // Don't go below the sea floor.
            max_polar: PI / 2.1,
            auto_rotate: true,
            auto_rotate_speed: 0.5,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
        }
    }
}

impl OrbitSettings {
    /// Auto-rotation in radians per second.
    pub fn auto_rotate_rate(&self) -> f32 {
        TAU / REFERENCE_FPS * self.auto_rotate_speed
    }
}

/// Input collected since the last tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PendingOrbitInput {
    pub rotate_px: Vec2,
    pub pan_px: Vec2,
    /// Positive steps zoom in.
    pub zoom_steps: f32,
}

impl PendingOrbitInput {
    pub fn is_empty(&self) -> bool {
        self.rotate_px == Vec2::ZERO && self.pan_px == Vec2::ZERO && self.zoom_steps == 0.0
    }
}

#[derive(Resource, Clone, Debug)]
pub struct OrbitController {
    settings: OrbitSettings,
    target: Vec3,
    azimuth: f32,
    polar: f32,
    distance: f32,
    surface: SurfaceSize,
    pending: PendingOrbitInput,
    interacting: bool,
    delta_azimuth: f32,
    delta_polar: f32,
    pan_offset: Vec3,
}

impl OrbitController {
    pub fn new(settings: OrbitSettings, surface: SurfaceSize) -> Self {
        let offset = settings.initial_eye - settings.target;
        let distance = offset
            .length()
            .clamp(settings.min_distance, settings.max_distance);
        let azimuth = offset.x.atan2(offset.z);
        let polar = if offset.length() > 0.0 {
            (offset.y / offset.length()).clamp(-1.0, 1.0).acos()
        } else {
            settings.max_polar
        };

        let mut controller = Self {
            target: settings.target,
            azimuth,
            polar,
            distance,
            surface,
            pending: PendingOrbitInput::default(),
            interacting: false,
            delta_azimuth: 0.0,
            delta_polar: 0.0,
            pan_offset: Vec3::ZERO,
            settings,
        };
        controller.polar = controller.clamp_polar(controller.polar);
        controller
    }

    pub fn settings(&self) -> &OrbitSettings {
        &self.settings
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn aspect(&self) -> f32 {
        self.surface.aspect()
    }

    pub fn pending(&self) -> PendingOrbitInput {
        self.pending
    }

    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    pub fn set_surface(&mut self, surface: SurfaceSize) {
        if surface.is_renderable() {
            self.surface = surface;
        }
    }

    pub fn set_interacting(&mut self, interacting: bool) {
        self.interacting = interacting;
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.settings.auto_rotate = enabled;
    }

    /// Screen-space drag in pixels; +x right, +y down.
    pub fn push_rotate(&mut self, delta_px: Vec2) {
        self.pending.rotate_px += delta_px;
    }

    pub fn push_pan(&mut self, delta_px: Vec2) {
        self.pending.pan_px += delta_px;
    }

    pub fn push_zoom(&mut self, steps: f32) {
        self.pending.zoom_steps += steps;
    }

    pub fn tick(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        let pending = std::mem::take(&mut self.pending);
        let height = self.surface.height.max(1.0);

        if pending.rotate_px != Vec2::ZERO {
            let k = TAU / height * self.settings.rotate_speed;
            self.delta_azimuth -= pending.rotate_px.x * k;
            self.delta_polar -= pending.rotate_px.y * k;
        }

        if pending.pan_px != Vec2::ZERO {
            self.pan_offset += self.pan_vector(pending.pan_px, height);
        }

        if pending.zoom_steps != 0.0 {
            let scale = ZOOM_STEP_SCALE.powf(self.settings.zoom_speed * pending.zoom_steps.abs());
            if pending.zoom_steps > 0.0 {
                self.distance *= scale;
            } else {
                self.distance /= scale;
            }
        }

        if self.settings.auto_rotate && !self.interacting {
            self.delta_azimuth -= self.settings.auto_rotate_rate() * dt;
        }

        let keep = (1.0 - self.settings.damping_factor.clamp(0.0, 1.0)).powf(dt * REFERENCE_FPS);
        let apply = 1.0 - keep;

        self.azimuth += self.delta_azimuth * apply;
        self.polar = self.clamp_polar(self.polar + self.delta_polar * apply);
        self.target += self.pan_offset * apply;

        self.delta_azimuth *= keep;
        self.delta_polar *= keep;
        self.pan_offset *= keep;

        self.distance = self
            .distance
            .clamp(self.settings.min_distance, self.settings.max_distance);
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target + self.distance * Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// OpenGL-style clip space: visible depth maps to NDC z in [-1, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.settings.fov_y_degrees.to_radians(),
            self.aspect(),
            self.settings.near,
            self.settings.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Like [`Self::view_projection`], but seen from `camera`, which may be
    /// displaced from the orbit eye (screen shake).
    pub fn view_projection_from(&self, camera: &Transform) -> Mat4 {
        let view = Mat4::look_to_rh(camera.translation, *camera.forward(), *camera.up());
        self.projection_matrix() * view
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }

    fn clamp_polar(&self, polar: f32) -> f32 {
        let lo = self.settings.min_polar.max(POLAR_EPSILON);
        let hi = self.settings.max_polar.min(PI - POLAR_EPSILON).max(lo);
        polar.clamp(lo, hi)
    }

    /// Moves the target with the cursor in the camera's screen plane.
    fn pan_vector(&self, delta_px: Vec2, height: f32) -> Vec3 {
        let world = self.view_matrix().inverse();
        let right = world.x_axis.truncate();
        let up = world.y_axis.truncate();

        let half_fov = (self.settings.fov_y_degrees.to_radians() * 0.5).tan();
        let units_per_px = 2.0 * self.distance * half_fov / height * self.settings.pan_speed;

        -right * delta_px.x * units_per_px + up * delta_px.y * units_per_px
    }
}
