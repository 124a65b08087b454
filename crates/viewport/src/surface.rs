use bevy::prelude::*;
use glam::{UVec2, Vec2};

/// Size of the drawing surface in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_renderable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 1.0 && self.height >= 1.0
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Strict containment; points on the border count as outside.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > 0.0 && p.x < self.width && p.y > 0.0 && p.y < self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRect {
    /// Top-left corner inside the window, logical pixels.
    pub origin: Vec2,
    pub size: SurfaceSize,
}

impl SurfaceRect {
    pub fn contains(&self, window_pos: Vec2) -> bool {
        self.size.contains(window_pos - self.origin)
    }
}

/// Window area left free by the UI panels. Written by the UI every frame.
#[derive(Resource, Default, Clone, Copy, Debug)]
pub struct HostSurface {
    pub rect: Option<SurfaceRect>,
}

/// Aspect ratio and output size the renderer is currently configured for.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ViewportSurface {
    pub size: SurfaceSize,
    pub camera_aspect: f32,
    pub output_size: UVec2,
}

impl ViewportSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            camera_aspect: size.aspect(),
            output_size: output_size_for(size),
        }
    }

    /// Returns true when the camera and output need reconfiguring.
    pub fn resize(&mut self, size: SurfaceSize) -> bool {
        if !size.is_renderable() || size == self.size {
            return false;
        }
        self.size = size;
        self.camera_aspect = size.aspect();
        self.output_size = output_size_for(size);
        true
    }
}

fn output_size_for(size: SurfaceSize) -> UVec2 {
    UVec2::new(
        size.width.round().max(1.0) as u32,
        size.height.round().max(1.0) as u32,
    )
}
