use bevy::pbr::wireframe::WireframePlugin;
use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{RenderCreation, WgpuFeatures, WgpuSettings};
use bevy_egui::{EguiGlobalSettings, EguiPlugin};

mod game;

use game::GamePlugin;

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::srgb(0.059, 0.090, 0.165)))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 120.0,
            affects_lightmapped_meshes: false,
        })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Chicxulub Explorer".into(),
                        ..default()
                    }),
                    // Closing goes through the viewer teardown first.
                    close_when_requested: false,
                    ..default()
                })
                .set(RenderPlugin {
                    // Line polygon mode is needed for the wireframe view.
                    render_creation: RenderCreation::Automatic(WgpuSettings {
                        features: WgpuFeatures::POLYGON_MODE_LINE,
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(WireframePlugin::default())
        .add_plugins(EguiPlugin::default())
        .insert_resource(EguiGlobalSettings {
            auto_create_primary_context: false,
            ..default()
        })
        .add_plugins(GamePlugin {
            crater_config: terrain::CraterConfig {
                extent: 240.0,
                segments: 256,
                water_level: 0.0,
                water_bob_amplitude: 0.5,
                water_bob_rate: 1.0,
                water_opacity: 0.4,
            },
            orbit_settings: viewport::OrbitSettings::default(),
        })
        .run();
}
