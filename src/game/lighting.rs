use bevy::prelude::*;
use viewport::{ViewportOwned, ViewportPhase};

const IMPACT_GLOW: Color = Color::srgb(0xf9 as f32 / 255.0, 0x73 as f32 / 255.0, 0x16 as f32 / 255.0);

pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ViewportPhase::Running), spawn_light_rig);
    }
}

/// Sun with shadows plus an orange glow sitting in the impact basin.
pub fn spawn_light_rig(mut commands: Commands) {
    commands.spawn((
        ViewportOwned,
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(80.0, 100.0, 50.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        ViewportOwned,
        PointLight {
            color: IMPACT_GLOW,
            intensity: 200_000.0,
            range: 60.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 5.0, 0.0),
    ));
}
