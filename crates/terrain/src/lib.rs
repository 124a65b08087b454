pub mod field;
pub mod mesh;
pub mod render;
pub mod types;

pub use field::{Band, CraterSample, PaletteColor};
pub use mesh::{CraterMeshData, HeightField, build_crater_mesh_data};
pub use types::*;
