use bevy::color::ColorToComponents;
use glam::Vec3;

use crate::field;
use crate::types::CraterConfig;

/// Square grid of sample coordinates centred on the impact point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightField {
    pub extent: f32,
    pub segments: u32,
}

impl HeightField {
    pub fn from_config(config: &CraterConfig) -> Self {
        Self {
            extent: config.extent,
            segments: config.segments.max(1),
        }
    }

    pub fn stride(&self) -> usize {
        self.segments as usize + 1
    }

    pub fn vertex_count(&self) -> usize {
        self.stride() * self.stride()
    }

    pub fn cell_size(&self) -> f32 {
        self.extent / self.segments as f32
    }

    pub fn index(&self, ix: usize, iz: usize) -> usize {
        iz * self.stride() + ix
    }

    /// Sample-space coordinate for grid vertex `(ix, iz)`. Rows run from +y
    /// at `iz = 0` down to -y, columns from -x to +x.
    pub fn sample_xy(&self, ix: usize, iz: usize) -> (f32, f32) {
        let half = self.extent * 0.5;
        let step = self.cell_size();
        (-half + ix as f32 * step, half - iz as f32 * step)
    }
}

/// Flat vertex buffers for the crater surface. Built once, never mutated.
#[derive(Clone, Debug)]
pub struct CraterMeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
    pub uvs: Vec<[f32; 2]>,
    pub heights: Vec<f32>,
    pub indices: Vec<u32>,
}

impl CraterMeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

pub fn build_crater_mesh_data(field: HeightField) -> CraterMeshData {
    let n = field.segments as usize;
    let stride = field.stride();
    let count = field.vertex_count();
    let step = field.cell_size();

    let mut heights: Vec<f32> = Vec::with_capacity(count);
    let mut colors: Vec<[f32; 4]> = Vec::with_capacity(count);
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(count);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(count);

    for iz in 0..=n {
        for ix in 0..=n {
            let (x, y) = field.sample_xy(ix, iz);
            let s = field::sample(x, y);

            heights.push(s.height);
            colors.push(s.color.to_f32_array());
            // Sample plane is laid flat: +y in sample space becomes -z in world.
            positions.push([x, s.height, -y]);
            uvs.push([ix as f32 / n as f32, iz as f32 / n as f32]);
        }
    }

    // Smooth normals from the height grid, central differences clamped at the border.
    let mut normals: Vec<[f32; 3]> = vec![[0.0, 1.0, 0.0]; count];
    for iz in 0..=n {
        for ix in 0..=n {
            let ix_l = ix.saturating_sub(1);
            let ix_r = (ix + 1).min(n);
            let iz_d = iz.saturating_sub(1);
            let iz_u = (iz + 1).min(n);

            let h_l = heights[iz * stride + ix_l];
            let h_r = heights[iz * stride + ix_r];
            let h_d = heights[iz_d * stride + ix];
            let h_u = heights[iz_u * stride + ix];

            let dx = ((ix_r - ix_l).max(1) as f32) * step;
            let dz = ((iz_u - iz_d).max(1) as f32) * step;

            let dhdx = (h_r - h_l) / dx;
            let dhdz = (h_u - h_d) / dz;

            let normal = Vec3::new(-dhdx, 1.0, -dhdz).normalize_or_zero();
            normals[iz * stride + ix] = [normal.x, normal.y, normal.z];
        }
    }

    let mut indices: Vec<u32> = Vec::with_capacity(n * n * 6);
    for iz in 0..n {
        for ix in 0..n {
            let v0 = field.index(ix, iz) as u32;
            let v1 = v0 + 1;
            let v2 = field.index(ix, iz + 1) as u32;
            let v3 = v2 + 1;

            // Counter-clockwise when viewed from above.
            indices.extend_from_slice(&[v0, v2, v1, v1, v2, v3]);
        }
    }

    CraterMeshData {
        positions,
        normals,
        colors,
        uvs,
        heights,
        indices,
    }
}
