use bevy::prelude::*;

use crate::surface::SurfaceSize;

/// Viewport lifecycle. `Disposed` is terminal.
#[derive(States, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportPhase {
    #[default]
    Uninitialized,
    Running,
    Disposed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LifecycleEvent {
    SurfaceReady(SurfaceSize),
    SurfaceMissing,
    Teardown,
}

impl ViewportPhase {
    pub fn advance(self, event: LifecycleEvent) -> ViewportPhase {
        match (self, event) {
            (ViewportPhase::Disposed, _) => ViewportPhase::Disposed,
            (_, LifecycleEvent::Teardown) => ViewportPhase::Disposed,
            (ViewportPhase::Uninitialized, LifecycleEvent::SurfaceReady(size))
                if size.is_renderable() =>
            {
                ViewportPhase::Running
            }
            (phase, _) => phase,
        }
    }
}

/// Marks entities spawned on entering `Running`; they are despawned on `Disposed`.
#[derive(Component, Default, Clone, Copy, Debug)]
pub struct ViewportOwned;
