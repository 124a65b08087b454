use bevy::prelude::*;

// --- Config ---

#[derive(Resource, Clone, Debug)]
pub struct CraterConfig {
    /// Side length of the square sample grid, in world units.
    pub extent: f32,
    /// Cells per side. The mesh has `segments + 1` vertices per side.
    pub segments: u32,
    pub water_level: f32,
    pub water_bob_amplitude: f32,
    /// Angular rate of the water bob, in radians per second.
    pub water_bob_rate: f32,
    pub water_opacity: f32,
}

impl Default for CraterConfig {
    fn default() -> Self {
        Self {
            extent: 240.0,
            segments: 256,
            water_level: 0.0,
            water_bob_amplitude: 0.5,
            water_bob_rate: 1.0,
            water_opacity: 0.4,
        }
    }
}

impl CraterConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.extent.is_finite() || self.extent <= 0.0 {
            return Err(format!("crater extent={} (must be finite and positive)", self.extent));
        }
        if self.segments == 0 {
            return Err("crater segments must be at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.water_opacity) {
            return Err(format!(
                "water_opacity={} (must be within 0..=1)",
                self.water_opacity
            ));
        }
        if !self.water_bob_amplitude.is_finite() || !self.water_bob_rate.is_finite() {
            return Err("water bob amplitude and rate must be finite".to_string());
        }

        Ok(())
    }
}

// --- Components ---

#[derive(Component)]
pub struct CraterSurface;

#[derive(Component)]
pub struct WaterPlane;

// --- Resources ---

/// Everything `spawn_crater` allocated, so teardown can release it.
#[derive(Resource, Debug, Clone)]
pub struct CraterEntities {
    pub terrain: Entity,
    pub water: Entity,
    pub terrain_mesh: Handle<Mesh>,
    pub water_mesh: Handle<Mesh>,
    pub terrain_material: Handle<StandardMaterial>,
    pub water_material: Handle<StandardMaterial>,
}
