use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::mesh::{CraterMeshData, HeightField, build_crater_mesh_data};
use crate::types::{CraterConfig, CraterEntities, CraterSurface, WaterPlane};

/// Builds the crater mesh and the water plane, and spawns both.
pub fn spawn_crater(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &CraterConfig,
) -> CraterEntities {
    let field = HeightField::from_config(config);
    let mesh_data = build_crater_mesh_data(field);
    debug!(
        "built crater mesh: {} vertices, {} triangles",
        mesh_data.vertex_count(),
        mesh_data.triangle_count()
    );

    let terrain_mesh = meshes.add(mesh_from_crater_mesh_data(mesh_data));
    let terrain_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 0.8,
        metallic: 0.1,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    let terrain = commands
        .spawn((
            CraterSurface,
            Mesh3d(terrain_mesh.clone()),
            MeshMaterial3d(terrain_material.clone()),
            Transform::IDENTITY,
        ))
        .id();

    let water_mesh = meshes.add(Plane3d::default().mesh().size(config.extent, config.extent));
    let water_material = materials.add(StandardMaterial {
        base_color: Color::srgba_u8(0x0e, 0xa5, 0xe9, (config.water_opacity * 255.0) as u8),
        perceptual_roughness: 0.1,
        metallic: 0.1,
        specular_transmission: 0.2,
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    let water = commands
        .spawn((
            WaterPlane,
            Mesh3d(water_mesh.clone()),
            MeshMaterial3d(water_material.clone()),
            Transform::from_xyz(0.0, config.water_level, 0.0),
            Visibility::Visible,
        ))
        .id();

    CraterEntities {
        terrain,
        water,
        terrain_mesh,
        water_mesh,
        terrain_material,
        water_material,
    }
}

/// Despawns the crater entities and drops their GPU-side assets.
pub fn despawn_crater(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    entities: &CraterEntities,
) {
    commands.entity(entities.terrain).despawn();
    commands.entity(entities.water).despawn();

    meshes.remove(&entities.terrain_mesh);
    meshes.remove(&entities.water_mesh);
    materials.remove(&entities.terrain_material);
    materials.remove(&entities.water_material);
}

pub fn water_bob_offset(elapsed_secs: f32, config: &CraterConfig) -> f32 {
    (elapsed_secs * config.water_bob_rate).sin() * config.water_bob_amplitude
}

pub fn bob_water(
    time: Res<Time>,
    config: Res<CraterConfig>,
    mut q_water: Query<(&mut Transform, &Visibility), With<WaterPlane>>,
) {
    let Ok((mut transform, visibility)) = q_water.single_mut() else {
        return;
    };

    // Decorative only; skip the write while hidden.
    if *visibility == Visibility::Hidden {
        return;
    }

    transform.translation.y = config.water_level + water_bob_offset(time.elapsed_secs(), &config);
}

fn mesh_from_crater_mesh_data(data: CraterMeshData) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, data.positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, data.normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, data.uvs);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, data.colors);
    mesh.insert_indices(Indices::U32(data.indices));
    mesh
}
