use terrain::field::height_at;
use terrain::render::water_bob_offset;
use terrain::{CraterConfig, HeightField, build_crater_mesh_data};

fn small_field() -> HeightField {
    HeightField {
        extent: 240.0,
        segments: 16,
    }
}

#[test]
fn default_grid_matches_site_resolution() {
    let field = HeightField::from_config(&CraterConfig::default());
    assert_eq!(field.stride(), 257);
    assert_eq!(field.vertex_count(), 257 * 257);
    assert_eq!(field.sample_xy(0, 0), (-120.0, 120.0));
    assert_eq!(field.sample_xy(128, 128), (0.0, 0.0));
    assert_eq!(field.sample_xy(256, 256), (120.0, -120.0));
}

#[test]
fn buffers_are_flat_and_sized_to_grid() {
    let field = small_field();
    let data = build_crater_mesh_data(field);

    assert_eq!(data.vertex_count(), 17 * 17);
    assert_eq!(data.normals.len(), data.vertex_count());
    assert_eq!(data.colors.len(), data.vertex_count());
    assert_eq!(data.uvs.len(), data.vertex_count());
    assert_eq!(data.heights.len(), data.vertex_count());
    assert_eq!(data.triangle_count(), 16 * 16 * 2);
    assert!(data.indices.iter().all(|&i| (i as usize) < data.vertex_count()));
}

#[test]
fn positions_lie_flat_with_height_on_y() {
    let field = small_field();
    let data = build_crater_mesh_data(field);

    for iz in 0..field.stride() {
        for ix in 0..field.stride() {
            let i = field.index(ix, iz);
            let (x, y) = field.sample_xy(ix, iz);
            let [px, py, pz] = data.positions[i];
            assert_eq!(px, x);
            assert_eq!(pz, -y);
            assert_eq!(py.to_bits(), height_at(x, y).to_bits());
            assert_eq!(py, data.heights[i]);
        }
    }
}

#[test]
fn rebuilding_gives_identical_buffers() {
    let a = build_crater_mesh_data(small_field());
    let b = build_crater_mesh_data(small_field());
    assert_eq!(a.positions, b.positions);
    assert_eq!(a.colors, b.colors);
    assert_eq!(a.normals, b.normals);
    assert_eq!(a.indices, b.indices);
}

#[test]
fn normals_are_unit_and_point_up() {
    let data = build_crater_mesh_data(small_field());
    for n in &data.normals {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-4);
        assert!(n[1] > 0.0);
    }
}

#[test]
fn triangles_face_up() {
    let data = build_crater_mesh_data(HeightField {
        extent: 240.0,
        segments: 4,
    });
    let p = |i: u32| glam::Vec3::from_array(data.positions[i as usize]);

    for tri in data.indices.chunks_exact(3) {
        let (a, b, c) = (p(tri[0]), p(tri[1]), p(tri[2]));
        let normal = (b - a).cross(c - a);
        assert!(normal.y > 0.0);
    }
}

#[test]
fn water_bobs_half_a_unit_over_a_two_pi_period() {
    let config = CraterConfig::default();
    assert_eq!(water_bob_offset(0.0, &config), 0.0);
    let crest = water_bob_offset(std::f32::consts::FRAC_PI_2, &config);
    assert!((crest - 0.5).abs() < 1e-6);

    let t = 1.3;
    let later = water_bob_offset(t + std::f32::consts::TAU, &config);
    assert!((water_bob_offset(t, &config) - later).abs() < 1e-4);
}
