pub mod camera;
pub mod lifecycle;
pub mod lighting;
pub mod scene;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;
use content::{ImpactIntro, ScenarioLab, SiteContent};
use terrain::CraterConfig;
use viewport::{AnnotationScreens, HostSurface, OrbitController, OrbitSettings, ViewToggles, ViewportPhase};

pub struct GamePlugin {
    pub crater_config: CraterConfig,
    pub orbit_settings: OrbitSettings,
}

/// Per-frame order of the crater viewer while it is running.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerSet {
    Input,
    Simulate,
    Present,
}

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        let crater_config = match self.crater_config.validate() {
            Ok(()) => self.crater_config.clone(),
            Err(e) => {
                error!("invalid crater config, using defaults: {e}");
                CraterConfig::default()
            }
        };

        match SiteContent::load_embedded() {
            Ok(content) => {
                app.insert_resource(content);
            }
            Err(e) => error!("site content failed to load: {e}"),
        }

        app.insert_resource(crater_config)
            .insert_resource(self.orbit_settings.clone())
            .insert_resource(ui::UiInputCaptureRes::default())
            .init_resource::<ui::StoryState>()
            .init_resource::<HostSurface>()
            .init_resource::<ViewToggles>()
            .init_resource::<AnnotationScreens>()
            .init_resource::<ScenarioLab>()
            .init_resource::<ImpactIntro>()
            .add_plugins(lifecycle::LifecyclePlugin)
            .add_plugins(lighting::LightingPlugin)
            .configure_sets(
                Update,
                (ViewerSet::Input, ViewerSet::Simulate, ViewerSet::Present)
                    .chain()
                    .run_if(in_state(ViewportPhase::Running))
                    .run_if(resource_exists::<OrbitController>),
            )
            .add_systems(Startup, camera::setup_ui_camera)
            .add_systems(Update, scene::tick_story_timers)
            .add_systems(
                Update,
                (ui::update_ui_input_capture, camera::gather_orbit_input)
                    .chain()
                    .in_set(ViewerSet::Input),
            )
            .add_systems(
                Update,
                (camera::tick_orbit, camera::apply_orbit_camera)
                    .chain()
                    .in_set(ViewerSet::Simulate),
            )
            .add_systems(
                Update,
                (scene::apply_view_toggles, terrain::render::bob_water).in_set(ViewerSet::Present),
            )
            // The host rectangle is only known once the panels are laid out,
            // so the camera and labels follow it in the same pass, before the
            // frame renders.
            .add_systems(
                EguiPrimaryContextPass,
                (
                    ui::nav_bar_system,
                    ui::story_panel_system,
                    ui::publish_host_surface,
                    (scene::sync_surface, scene::refresh_annotations)
                        .chain()
                        .run_if(in_state(ViewportPhase::Running))
                        .run_if(resource_exists::<OrbitController>),
                    ui::viewer_controls_system,
                    ui::annotation_labels_system,
                    ui::impact_intro_overlay_system,
                )
                    .chain(),
            );
    }
}
