use bevy::prelude::*;
use glam::{Mat4, Vec2, Vec3};

use crate::annotations::{ANNOTATIONS, AnnotationId};
use crate::surface::SurfaceSize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    /// Pixels from the surface's top-left corner.
    pub pos: Vec2,
    /// NDC depth in [-1, 1).
    pub depth: f32,
    /// Larger draws on top; nearer points get larger values.
    pub draw_order: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScreenProjection {
    Visible(ScreenPoint),
    Hidden,
}

impl ScreenProjection {
    pub fn visible(&self) -> Option<&ScreenPoint> {
        match self {
            ScreenProjection::Visible(p) => Some(p),
            ScreenProjection::Hidden => None,
        }
    }
}

/// Projects a world point through `view_proj` (OpenGL clip space) onto a
/// surface of `surface` pixels.
pub fn project_to_surface(view_proj: Mat4, world: Vec3, surface: SurfaceSize) -> ScreenProjection {
    let clip = view_proj * world.extend(1.0);
    if !clip.is_finite() || clip.w <= f32::EPSILON {
        return ScreenProjection::Hidden;
    }

    let ndc = clip.truncate() / clip.w;
    if ndc.z >= 1.0 {
        return ScreenProjection::Hidden;
    }

    let pos = Vec2::new(
        (ndc.x * 0.5 + 0.5) * surface.width,
        (-ndc.y * 0.5 + 0.5) * surface.height,
    );
    if !surface.contains(pos) {
        return ScreenProjection::Hidden;
    }

    ScreenProjection::Visible(ScreenPoint {
        pos,
        depth: ndc.z,
        draw_order: 1000 - (ndc.z * 100.0).round() as i32,
    })
}

/// Per-frame screen placement of every annotation.
#[derive(Resource, Clone, Debug, Default)]
pub struct AnnotationScreens {
    pub entries: Vec<(AnnotationId, ScreenProjection)>,
}

impl AnnotationScreens {
    pub fn refresh(&mut self, view_proj: Mat4, surface: SurfaceSize) {
        self.entries.clear();
        for point in &ANNOTATIONS {
            self.entries
                .push((point.id, project_to_surface(view_proj, point.world, surface)));
        }
    }

    pub fn get(&self, id: AnnotationId) -> ScreenProjection {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, p)| *p)
            .unwrap_or(ScreenProjection::Hidden)
    }
}
