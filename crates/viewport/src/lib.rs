pub mod annotations;
pub mod lifecycle;
pub mod orbit;
pub mod projection;
pub mod surface;
pub mod toggles;

pub use annotations::{ANNOTATIONS, AnnotationId, AnnotationPoint};
pub use lifecycle::{LifecycleEvent, ViewportOwned, ViewportPhase};
pub use orbit::{OrbitController, OrbitSettings, PendingOrbitInput};
pub use projection::{AnnotationScreens, ScreenPoint, ScreenProjection, project_to_surface};
pub use surface::{HostSurface, SurfaceRect, SurfaceSize, ViewportSurface};
pub use toggles::ViewToggles;
